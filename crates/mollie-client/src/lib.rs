//! # mollie-client
//!
//! Async client for the Mollie v2 payments API.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      MollieClient                        │
//! │  payments, payment_refunds, customers, orders, ...       │
//! └───────────────────────────┬──────────────────────────────┘
//!                             │ one per entity
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │             Resource<M: Model> (generic CRUD)            │
//! │    id prefix checks, list params, next_page cursors      │
//! └───────────────────────────┬──────────────────────────────┘
//!                             │ shared (Arc)
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │   NetworkClient  ──►  dyn Transport (HttpTransport)      │
//! │   response normalization into MollieError               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use mollie_client::{Amount, CreatePaymentParams, GetParams, MollieClient};
//!
//! # async fn run() -> mollie_client::MollieResult<()> {
//! let client = MollieClient::builder("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM").build()?;
//!
//! let payment = client
//!     .payments
//!     .create(&CreatePaymentParams::new(
//!         Amount::new("EUR", "10.00"),
//!         "Order #12345",
//!         "https://webshop.example.org/order/12345/",
//!     ))
//!     .await?;
//!
//! let payment = client.payments.get(&payment.id, &GetParams::new()).await?;
//! println!("{:?} {:?}", payment.status, payment.checkout_url());
//! # Ok(())
//! # }
//! ```

pub mod callback;
pub mod client;
pub mod config;
pub mod network;
pub mod params;
pub mod resource;
pub mod resources;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::{MollieClient, MollieClientBuilder};
pub use config::{ClientConfig, Credential, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use network::NetworkClient;
pub use params::{GetParams, TestmodeParams};
pub use resource::Resource;
pub use resources::*;
pub use transport::{ApiRequest, ApiResponse, BoxedTransport, HttpTransport, Transport};

// Re-export the core types so callers need only one dependency
pub use mollie_core::*;
