//! HTTP adapter for catalog reads.
//!
//! - `GET /api/accommodations`
//! - `GET /api/accommodations/:id`
//! - `GET /api/activities?category=`
//! - `GET /api/activities/:id`
//! - `GET /api/activities/categories/list`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::catalog_router;
