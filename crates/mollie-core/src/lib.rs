//! # mollie-core
//!
//! Core types for the mollie-rs API client.
//!
//! This crate provides:
//! - `Model` trait tying each entity to its resource name and id prefix
//! - `List` pages with cursor navigation
//! - `Amount` and the entity models (payments, orders, customers, ...)
//! - `MollieError` for typed error handling
//!
//! It performs no I/O; requests live in `mollie-client`.
//!
//! ## Example
//!
//! ```rust
//! use mollie_core::{validate_id, Payment};
//!
//! assert!(validate_id::<Payment>("tr_WDqYK6vllg").is_ok());
//!
//! let err = validate_id::<Payment>("ord_WDqYK6vllg").unwrap_err();
//! assert_eq!(err.message(), "The payment id is invalid");
//! ```

pub mod amount;
pub mod error;
pub mod list;
pub mod model;
pub mod models;

// Re-exports for convenience
pub use amount::Amount;
pub use error::{ApiErrorBody, MollieError, MollieResult};
pub use list::{List, ListLinks, ListParams, MAX_PAGE_SIZE};
pub use model::{validate_id, validate_parent_id, Link, Links, Mode, Model};
pub use models::*;
