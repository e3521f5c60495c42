//! Observability subsystem.
//!
//! Structured logging only; the service deliberately carries no metrics
//! endpoint. Every request is traced with a correlation id set by the
//! request-id middleware.

pub mod logging;
