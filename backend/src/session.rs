//! Server-side session state for in-progress orders.
//!
//! Each ordering session accumulates tacos into a `TacoOrder` until the
//! client submits it. The state is explicit: a map from session id to the
//! in-progress order, shared across workers as `web::Data` and guarded by a
//! single `RwLock`. A submit removes the entry only after the order has been
//! persisted, so a failed submit leaves the session intact.

use std::collections::HashMap;
use std::sync::Arc;

use common::model::order::TacoOrder;
use common::model::taco::Taco;
use common::requests::OrderDetails;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shareable store of all in-progress session orders.
#[derive(Clone, Default)]
pub struct SessionStore {
    orders: Arc<RwLock<HashMap<String, TacoOrder>>>,
}

impl SessionStore {
    /// Opens a new session with an empty order and returns its id.
    pub async fn open(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        let mut orders = self.orders.write().await;
        orders.insert(session_id.clone(), TacoOrder::default());
        session_id
    }

    /// A snapshot of the in-progress order, or `None` for an unknown session.
    pub async fn current(&self, session_id: &str) -> Option<TacoOrder> {
        let orders = self.orders.read().await;
        orders.get(session_id).cloned()
    }

    /// Appends a taco to the session's order. Returns the updated order, or
    /// `None` for an unknown session.
    pub async fn add_taco(&self, session_id: &str, taco: Taco) -> Option<TacoOrder> {
        let mut orders = self.orders.write().await;
        let order = orders.get_mut(session_id)?;
        order.add_taco(taco);
        Some(order.clone())
    }

    /// Sets the delivery and payment fields on the session's order, keeping
    /// the accumulated tacos. Returns the updated order, or `None` for an
    /// unknown session.
    pub async fn set_details(&self, session_id: &str, details: OrderDetails) -> Option<TacoOrder> {
        let mut orders = self.orders.write().await;
        let order = orders.get_mut(session_id)?;
        order.delivery_name = details.delivery_name;
        order.delivery_street = details.delivery_street;
        order.delivery_city = details.delivery_city;
        order.delivery_state = details.delivery_state;
        order.delivery_zip = details.delivery_zip;
        order.cc_number = details.cc_number;
        order.cc_expiration = details.cc_expiration;
        order.cc_cvv = details.cc_cvv;
        Some(order.clone())
    }

    /// Closes the session, discarding its order. Called after a successful
    /// submit. Returns false for an unknown session.
    pub async fn close(&self, session_id: &str) -> bool {
        let mut orders = self.orders.write().await;
        orders.remove(session_id).is_some()
    }
}
