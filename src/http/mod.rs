//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, route table)
//!     → items.rs (list / create / delete handlers)
//!     → store adapter
//!     → JSON response to client
//!
//! Unmatched path (production only)
//!     → static_assets.rs (front-end build directory, index fallback)
//! ```

pub mod items;
pub mod server;
pub mod static_assets;

pub use server::{AppState, HttpServer};
