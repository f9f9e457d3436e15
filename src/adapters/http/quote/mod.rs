//! HTTP adapter for quotes.
//!
//! - `GET /api/quotes/packages`
//! - `POST /api/quotes/calculate`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::quote_router;
