//! # stockroom-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for the product catalogue
//!   (`/products`, `/product`, `/product/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into indented JSON responses
//!
//! ## Dependency rule
//! Depends on `stockroom-app` (for port traits and services) and
//! `stockroom-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod json;
pub mod router;
pub mod state;
