pub mod article;
pub mod ingredient;
pub mod order;
pub mod run;
pub mod taco;
pub mod tutorial;
pub mod violation;
