//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthService, NewsService, NotesService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthService>,
    pub notes: Arc<dyn NotesService>,
    pub news: Arc<dyn NewsService>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    pub fn new(
        auth: Arc<dyn AuthService>,
        notes: Arc<dyn NotesService>,
        news: Arc<dyn NewsService>,
    ) -> Self {
        Self { auth, notes, news }
    }
}
