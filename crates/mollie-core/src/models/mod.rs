//! # Entity Models
//!
//! One module per group of related API entities.

pub mod customer;
pub mod method;
pub mod order;
pub mod payment;
pub mod payment_link;
pub mod profile;
pub mod refund;
pub mod settlement;

pub use customer::{Customer, Mandate, MandateStatus, Subscription, SubscriptionStatus};
pub use method::{Issuer, Method, MethodImage, MethodPricing};
pub use order::{
    Address, Order, OrderEmbedded, OrderLine, OrderLineType, OrderStatus, Shipment, Tracking,
};
pub use payment::{ApplicationFee, Payment, PaymentEmbedded, PaymentStatus, SequenceType};
pub use payment_link::PaymentLink;
pub use profile::{
    Onboarding, OnboardingStatus, Organization, Permission, Profile, ProfileStatus,
};
pub use refund::{
    Capture, Chargeback, ChargebackReason, EmbeddedPayment, Refund, RefundStatus,
};
pub use settlement::{Invoice, InvoiceLine, InvoiceStatus, Settlement, SettlementStatus};
