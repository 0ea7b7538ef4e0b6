//! HTTP surface for mission control: the axum router, route handlers, and
//! the link-title fetch service. Presentation stays out of this crate; it
//! speaks JSON only.

pub mod routes;
pub mod server;
pub mod services;

mod error;
mod state;

pub use error::{Result, WebError};
pub use server::{build_router, start_server, ServerConfig};
pub use state::{build_state, AppState};
