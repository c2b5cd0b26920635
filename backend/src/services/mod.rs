pub mod articles;
pub mod ingredients;
pub mod orders;
pub mod runs;
pub mod sessions;
pub mod tutorials;
