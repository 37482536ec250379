//! # Order, Order Line, Shipment
//!
//! Orders wrap one or more payments for pay-later and klarna style methods.
//! Each order carries its lines; shipments mark lines as sent.

use crate::amount::Amount;
use crate::model::{Links, Mode};
use crate::models::payment::Payment;
use crate::models::refund::Refund;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an order or an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Pending,
    Authorized,
    Paid,
    Shipping,
    Completed,
    Canceled,
    Expired,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Kind of an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderLineType {
    Physical,
    Discount,
    Digital,
    ShippingFee,
    StoreCredit,
    GiftCard,
    Surcharge,
}

impl Default for OrderLineType {
    fn default() -> Self {
        OrderLineType::Physical
    }
}

/// Billing or shipping address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_and_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_additional: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// One line of an order, identified by an `odl_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub order_id: String,
    #[serde(rename = "type", default)]
    pub line_type: OrderLineType,
    pub name: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub is_cancelable: bool,
    pub quantity: u32,
    #[serde(default)]
    pub quantity_shipped: u32,
    #[serde(default)]
    pub quantity_refunded: u32,
    #[serde(default)]
    pub quantity_canceled: u32,
    #[serde(default)]
    pub shippable_quantity: u32,
    #[serde(default)]
    pub refundable_quantity: u32,
    #[serde(default)]
    pub cancelable_quantity: u32,
    pub unit_price: Amount,
    #[serde(default)]
    pub discount_amount: Option<Amount>,
    pub total_amount: Amount,
    pub vat_rate: String,
    pub vat_amount: Amount,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(OrderLine, "orderline", "lines", Some("odl_"));

/// Sub-resources embedded with `embed=payments,refunds,shipments`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<Payment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipments: Option<Vec<Shipment>>,
}

/// An order, identified by an `ord_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub profile_id: String,
    #[serde(default)]
    pub method: Option<String>,
    pub mode: Mode,
    pub amount: Amount,
    #[serde(default)]
    pub amount_captured: Option<Amount>,
    #[serde(default)]
    pub amount_refunded: Option<Amount>,
    pub status: OrderStatus,
    #[serde(default)]
    pub is_cancelable: bool,
    pub billing_address: Address,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub consumer_date_of_birth: Option<String>,
    pub order_number: String,
    pub locale: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expired_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub authorized_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<OrderEmbedded>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Order, "order", "orders", Some("ord_"));

impl Order {
    pub fn is_created(&self) -> bool {
        self.status == OrderStatus::Created
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    pub fn is_canceled(&self) -> bool {
        self.status == OrderStatus::Canceled
    }

    /// Hosted checkout URL the customer should be redirected to
    pub fn checkout_url(&self) -> Option<&str> {
        self.links.href("checkout")
    }

    /// Embedded payments, empty unless requested with `embed=payments`
    pub fn payments(&self) -> &[Payment] {
        self.embedded
            .as_ref()
            .and_then(|e| e.payments.as_deref())
            .unwrap_or(&[])
    }
}

/// Carrier tracking details of a shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracking {
    pub carrier: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A shipment of order lines, identified by a `shp_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tracking: Option<Tracking>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Shipment, "shipment", "shipments", Some("shp_"));

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line_json() -> serde_json::Value {
        json!({
            "resource": "orderline",
            "id": "odl_dgtxyl",
            "orderId": "ord_pbjz8x",
            "name": "LEGO 42083 Bugatti Chiron",
            "sku": "5702016116977",
            "type": "physical",
            "status": "created",
            "isCancelable": false,
            "quantity": 2,
            "quantityShipped": 0,
            "unitPrice": { "value": "399.00", "currency": "EUR" },
            "vatRate": "21.00",
            "vatAmount": { "value": "121.14", "currency": "EUR" },
            "discountAmount": { "value": "100.00", "currency": "EUR" },
            "totalAmount": { "value": "698.00", "currency": "EUR" },
            "createdAt": "2018-08-02T09:29:56+00:00"
        })
    }

    #[test]
    fn test_parse_order_with_lines() {
        let order: Order = serde_json::from_value(json!({
            "resource": "order",
            "id": "ord_pbjz8x",
            "profileId": "pfl_URR55HPMGx",
            "method": "ideal",
            "amount": { "value": "1027.99", "currency": "EUR" },
            "status": "created",
            "isCancelable": true,
            "metadata": null,
            "createdAt": "2018-08-02T09:29:56+00:00",
            "expiresAt": "2018-08-30T09:29:56+00:00",
            "mode": "live",
            "locale": "nl_NL",
            "billingAddress": {
                "organizationName": "Mollie B.V.",
                "streetAndNumber": "Keizersgracht 126",
                "postalCode": "1015 CW",
                "city": "Amsterdam",
                "country": "nl",
                "givenName": "Luke",
                "familyName": "Skywalker",
                "email": "luke@skywalker.com"
            },
            "orderNumber": "18475",
            "redirectUrl": "https://example.org/redirect",
            "lines": [ line_json() ],
            "_links": {
                "checkout": { "href": "https://www.mollie.com/payscreen/order/checkout/pbjz8x", "type": "text/html" }
            }
        }))
        .unwrap();

        assert!(order.is_created());
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].line_type, OrderLineType::Physical);
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(order.billing_address.city.as_deref(), Some("Amsterdam"));
        assert!(order.checkout_url().is_some());
        assert!(order.payments().is_empty());
    }

    #[test]
    fn test_parse_shipment() {
        let shipment: Shipment = serde_json::from_value(json!({
            "resource": "shipment",
            "id": "shp_3wmsgCJN4U",
            "orderId": "ord_kEn1PlbGa",
            "createdAt": "2018-08-09T14:33:54+00:00",
            "tracking": { "carrier": "PostNL", "code": "3SKABA000000000", "url": null },
            "lines": [ line_json() ]
        }))
        .unwrap();

        assert_eq!(shipment.tracking.as_ref().unwrap().carrier, "PostNL");
        assert_eq!(shipment.lines[0].id, "odl_dgtxyl");
    }

    #[test]
    fn test_address_skips_empty_fields() {
        let address = Address {
            city: Some("Amsterdam".into()),
            country: Some("NL".into()),
            ..Address::default()
        };

        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            json!({ "city": "Amsterdam", "country": "NL" })
        );
    }
}
