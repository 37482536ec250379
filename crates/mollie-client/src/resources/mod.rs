//! # Resources
//!
//! One façade per API endpoint family, each exposing only the operations
//! the endpoint supports. All of them delegate to [`crate::resource::Resource`].

pub mod customers;
pub mod methods;
pub mod orders;
pub mod payment_links;
pub mod payments;
pub mod profiles;
pub mod refunds;
pub mod settlements;

pub use customers::{
    CreateMandateParams, CreateSubscriptionParams, CustomerMandatesResource, CustomerParams,
    CustomerPaymentsResource, CustomerSubscriptionsResource, CustomersResource,
    SubscriptionPaymentsResource, SubscriptionsResource, UpdateSubscriptionParams,
};
pub use methods::{GetMethodParams, ListMethodParams, MethodsResource};
pub use orders::{
    CancelOrderLinesParams, CreateOrderParams, CreateOrderPaymentParams, CreateOrderRefundParams,
    CreateShipmentParams, OrderLineParams, OrderLineQuantity, OrderLinesResource,
    OrderPaymentsResource, OrderRefundsResource, OrderShipmentsResource, OrdersResource,
    UpdateOrderLineParams, UpdateOrderParams, UpdateShipmentParams,
};
pub use payment_links::{CreatePaymentLinkParams, PaymentLinksResource};
pub use payments::{CreatePaymentParams, PaymentsResource, UpdatePaymentParams};
pub use profiles::{
    CreateProfileParams, OnboardingOrganization, OnboardingProfile, OnboardingResource,
    OrganizationsResource, PermissionsResource, ProfilesResource, SubmitOnboardingParams,
    UpdateProfileParams,
};
pub use refunds::{
    ChargebacksResource, CreateRefundParams, PaymentCapturesResource, PaymentChargebacksResource,
    PaymentRefundsResource, RefundsResource,
};
pub use settlements::{InvoicesResource, SettlementsResource};
