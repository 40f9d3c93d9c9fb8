//! # plantstore-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON plant API** (`/plants`, `/plants/{id}`)
//! - Serve the static HTML greeting at `/` and a `/health` check
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `plantstore-app` (for port traits and services) and `plantstore-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod home;
pub mod router;
pub mod state;
