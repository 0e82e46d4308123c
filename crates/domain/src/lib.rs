//! # stockroom-domain
//!
//! Pure domain model for the stockroom product catalogue.
//!
//! ## Responsibilities
//! - Foundational types: the typed product identifier and error conventions
//! - Define the **Product** entity and the **`NewProduct`** insert payload
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod product;
