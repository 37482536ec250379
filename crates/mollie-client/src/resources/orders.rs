//! # Orders
//!
//! Orders with their lines, shipments, refunds and payments.
//!
//! ```text
//! orders/{ord_id}
//!   ├── lines/{odl_id}      PATCH  (returns the whole order)
//!   ├── lines               DELETE (cancel lines, 204)
//!   ├── shipments[/{shp_id}]
//!   ├── refunds
//!   └── payments            POST   (new attempt for an unpaid order)
//! ```

use crate::network::NetworkClient;
use crate::params::{require, GetParams, TestmodeParams};
use crate::resource::{member_path, Resource};
use chrono::NaiveDate;
use mollie_core::{
    validate_id, validate_parent_id, Address, Amount, List, ListParams, MollieError, MollieResult,
    Order, OrderLine, OrderLineType, Payment, Refund, Shipment, Tracking,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

/// One line of a new order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<OrderLineType>,

    pub name: String,
    pub quantity: u32,
    pub unit_price: Amount,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Amount>,

    pub total_amount: Amount,

    /// VAT rate as a percentage string, e.g. `"21.00"`
    pub vat_rate: String,
    pub vat_amount: Amount,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl OrderLineParams {
    pub fn validate(&self) -> MollieResult<()> {
        require("name", &self.name)?;
        if self.quantity == 0 {
            return Err(MollieError::invalid_field("quantity", "The quantity must be at least 1"));
        }
        self.unit_price.validate("unitPrice")?;
        self.total_amount.validate("totalAmount")?;
        self.vat_amount.validate("vatAmount")?;
        if let Some(discount) = &self.discount_amount {
            discount.validate("discountAmount")?;
        }
        require("vatRate", &self.vat_rate)
    }
}

/// Parameters for creating an order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderParams {
    pub amount: Amount,
    pub order_number: String,
    pub lines: Vec<OrderLineParams>,
    pub billing_address: Address,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_date_of_birth: Option<NaiveDate>,

    pub locale: String,
    pub redirect_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub method: Vec<String>,

    /// Parameters forwarded to the order's payment, e.g. `issuer`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Last day the order can be paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl CreateOrderParams {
    pub fn validate(&self) -> MollieResult<()> {
        self.amount.validate("amount")?;
        require("orderNumber", &self.order_number)?;
        require("locale", &self.locale)?;
        require("redirectUrl", &self.redirect_url)?;
        if self.lines.is_empty() {
            return Err(MollieError::invalid_field("lines", "An order needs at least one line"));
        }
        self.lines.iter().try_for_each(OrderLineParams::validate)
    }
}

/// Parameters for updating an order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Parameters for updating one order line
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderLineParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// A line reference with an optional partial quantity or amount, used to
/// cancel, ship or refund part of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineQuantity {
    pub id: String,

    /// The whole line when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl OrderLineQuantity {
    /// The whole line
    pub fn all(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quantity: None,
            amount: None,
        }
    }

    /// `quantity` items of the line
    pub fn partial(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::all(id)
        }
    }
}

fn validate_lines(lines: &[OrderLineQuantity]) -> MollieResult<()> {
    for line in lines {
        validate_id::<OrderLine>(&line.id)?;
        if line.quantity == Some(0) {
            return Err(MollieError::invalid_field("quantity", "The quantity must be at least 1"));
        }
        if let Some(amount) = &line.amount {
            amount.validate("amount")?;
        }
    }
    Ok(())
}

/// Lines to cancel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CancelOrderLinesParams {
    pub lines: Vec<OrderLineQuantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl CancelOrderLinesParams {
    pub fn new(lines: Vec<OrderLineQuantity>) -> Self {
        Self { lines, testmode: None }
    }

    pub fn validate(&self) -> MollieResult<()> {
        if self.lines.is_empty() {
            return Err(MollieError::invalid_field("lines", "Name at least one line to cancel"));
        }
        validate_lines(&self.lines)
    }
}

/// Parameters for creating a shipment; no lines ships everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateShipmentParams {
    pub lines: Vec<OrderLineQuantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl CreateShipmentParams {
    /// Builder: attach carrier tracking
    pub fn with_tracking(mut self, tracking: Tracking) -> Self {
        self.tracking = Some(tracking);
        self
    }
}

/// Parameters for updating a shipment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateShipmentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Parameters for refunding order lines; no lines refunds everything
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateOrderRefundParams {
    pub lines: Vec<OrderLineQuantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// Parameters for a new payment attempt on an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPaymentParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub method: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

fn order_path(order_id: &str, collection: &str) -> MollieResult<String> {
    validate_parent_id::<Order>(order_id, "orderId")?;
    Ok(format!("orders/{}/{}", order_id, collection))
}

/// `orders`
#[derive(Debug, Clone)]
pub struct OrdersResource {
    inner: Resource<Order>,
}

impl OrdersResource {
    const PATH: &'static str = "orders";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params), fields(order_number = %params.order_number))]
    pub async fn create(&self, params: &CreateOrderParams) -> MollieResult<Order> {
        params.validate()?;
        self.inner.create(Self::PATH, params).await
    }

    /// Fetch an order; embed `payments`, `refunds` or `shipments` via
    /// [`GetParams::with_embed`]
    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<Order> {
        self.inner.get(Self::PATH, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Order>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(&self, page: &List<Order>) -> MollieResult<Option<List<Order>>> {
        self.inner.next_page(Self::PATH, page).await
    }

    #[instrument(skip(self, params))]
    pub async fn update(&self, id: &str, params: &UpdateOrderParams) -> MollieResult<Order> {
        self.inner.update(Self::PATH, id, params).await
    }

    /// Cancel an order, returning it with status `canceled`
    #[instrument(skip(self, params))]
    pub async fn cancel(&self, id: &str, params: &TestmodeParams) -> MollieResult<Order> {
        self.inner.cancel(Self::PATH, id, params).await
    }
}

/// `orders/{ord_id}/lines`
#[derive(Debug, Clone)]
pub struct OrderLinesResource {
    network: NetworkClient,
}

impl OrderLinesResource {
    pub fn new(network: NetworkClient) -> Self {
        Self { network }
    }

    /// Update one line; the API answers with the whole order
    #[instrument(skip(self, params))]
    pub async fn update(
        &self,
        order_id: &str,
        id: &str,
        params: &UpdateOrderLineParams,
    ) -> MollieResult<Order> {
        let path = order_path(order_id, "lines")?;
        validate_id::<OrderLine>(id)?;
        self.network.patch(&member_path(&path, id), params).await
    }

    /// Cancel (part of) some lines
    #[instrument(skip(self, params), fields(lines = params.lines.len()))]
    pub async fn cancel(
        &self,
        order_id: &str,
        params: &CancelOrderLinesParams,
    ) -> MollieResult<()> {
        let path = order_path(order_id, "lines")?;
        params.validate()?;
        self.network.delete_empty(&path, params).await?;
        info!("Canceled {} line(s) of order {}", params.lines.len(), order_id);
        Ok(())
    }
}

/// `orders/{ord_id}/shipments`
#[derive(Debug, Clone)]
pub struct OrderShipmentsResource {
    inner: Resource<Shipment>,
}

impl OrderShipmentsResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn create(
        &self,
        order_id: &str,
        params: &CreateShipmentParams,
    ) -> MollieResult<Shipment> {
        let path = order_path(order_id, "shipments")?;
        validate_lines(&params.lines)?;
        self.inner.create(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn get(
        &self,
        order_id: &str,
        id: &str,
        params: &GetParams,
    ) -> MollieResult<Shipment> {
        let path = order_path(order_id, "shipments")?;
        self.inner.get(&path, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, order_id: &str, params: &ListParams) -> MollieResult<List<Shipment>> {
        let path = order_path(order_id, "shipments")?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        order_id: &str,
        page: &List<Shipment>,
    ) -> MollieResult<Option<List<Shipment>>> {
        let path = order_path(order_id, "shipments")?;
        self.inner.next_page(&path, page).await
    }

    #[instrument(skip(self, params))]
    pub async fn update(
        &self,
        order_id: &str,
        id: &str,
        params: &UpdateShipmentParams,
    ) -> MollieResult<Shipment> {
        let path = order_path(order_id, "shipments")?;
        self.inner.update(&path, id, params).await
    }
}

/// `orders/{ord_id}/refunds`
#[derive(Debug, Clone)]
pub struct OrderRefundsResource {
    inner: Resource<Refund>,
}

impl OrderRefundsResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn create(
        &self,
        order_id: &str,
        params: &CreateOrderRefundParams,
    ) -> MollieResult<Refund> {
        let path = order_path(order_id, "refunds")?;
        validate_lines(&params.lines)?;
        self.inner.create(&path, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, order_id: &str, params: &ListParams) -> MollieResult<List<Refund>> {
        let path = order_path(order_id, "refunds")?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        order_id: &str,
        page: &List<Refund>,
    ) -> MollieResult<Option<List<Refund>>> {
        let path = order_path(order_id, "refunds")?;
        self.inner.next_page(&path, page).await
    }
}

/// `orders/{ord_id}/payments`
#[derive(Debug, Clone)]
pub struct OrderPaymentsResource {
    inner: Resource<Payment>,
}

impl OrderPaymentsResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    /// Start a new payment attempt for an order whose earlier payment
    /// failed or expired
    #[instrument(skip(self, params))]
    pub async fn create(
        &self,
        order_id: &str,
        params: &CreateOrderPaymentParams,
    ) -> MollieResult<Payment> {
        let path = order_path(order_id, "payments")?;
        self.inner.create(&path, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockTransport};
    use reqwest::Method;
    use serde_json::json;

    fn line() -> OrderLineParams {
        OrderLineParams {
            line_type: Some(OrderLineType::Physical),
            name: "LEGO 42083 Bugatti Chiron".into(),
            quantity: 2,
            unit_price: Amount::new("EUR", "399.00"),
            discount_amount: Some(Amount::new("EUR", "100.00")),
            total_amount: Amount::new("EUR", "698.00"),
            vat_rate: "21.00".into(),
            vat_amount: Amount::new("EUR", "121.14"),
            sku: Some("5702016116977".into()),
            image_url: None,
            product_url: None,
            metadata: None,
        }
    }

    fn order_params() -> CreateOrderParams {
        CreateOrderParams {
            amount: Amount::new("EUR", "698.00"),
            order_number: "1337".into(),
            lines: vec![line()],
            billing_address: Address {
                given_name: Some("Luke".into()),
                family_name: Some("Skywalker".into()),
                email: Some("luke@skywalker.com".into()),
                street_and_number: Some("Keizersgracht 313".into()),
                postal_code: Some("1016 EE".into()),
                city: Some("Amsterdam".into()),
                country: Some("NL".into()),
                ..Default::default()
            },
            shipping_address: None,
            consumer_date_of_birth: None,
            locale: "nl_NL".into(),
            redirect_url: "https://example.org/redirect".into(),
            webhook_url: None,
            method: vec!["klarnapaylater".into()],
            payment: None,
            metadata: None,
            expires_at: None,
            profile_id: None,
            testmode: None,
        }
    }

    #[test]
    fn test_order_line_body() {
        let body = serde_json::to_value(line()).unwrap();
        assert_eq!(body["type"], "physical");
        assert_eq!(body["unitPrice"]["value"], "399.00");
        assert_eq!(body["vatRate"], "21.00");
        assert!(body.get("imageUrl").is_none());
    }

    #[test]
    fn test_order_validation() {
        assert!(order_params().validate().is_ok());

        let mut empty = order_params();
        empty.lines.clear();
        assert_eq!(empty.validate().unwrap_err().field(), Some("lines"));

        let mut zero = order_params();
        zero.lines[0].quantity = 0;
        assert_eq!(zero.validate().unwrap_err().field(), Some("quantity"));
    }

    #[tokio::test]
    async fn test_create_order() {
        let transport = MockTransport::new().respond(201, fixtures::order("ord_pbjz8x"));
        let orders = OrdersResource::new(transport.network());

        let order = orders.create(&order_params()).await.unwrap();

        assert_eq!(order.id, "ord_pbjz8x");
        assert!(order.is_created());
        assert_eq!(order.lines.len(), 1);
        assert!(order.checkout_url().is_some());

        let request = transport.last_request();
        assert_eq!(request.path, "orders");
        let body = request.body.unwrap();
        assert_eq!(body["orderNumber"], "1337");
        assert_eq!(body["billingAddress"]["givenName"], "Luke");
        assert_eq!(body["method"], json!(["klarnapaylater"]));
    }

    #[tokio::test]
    async fn test_update_line_returns_order() {
        let transport = MockTransport::new().respond(200, fixtures::order("ord_pbjz8x"));
        let lines = OrderLinesResource::new(transport.network());

        let params = UpdateOrderLineParams {
            name: Some("LEGO 71043 Hogwarts Castle".into()),
            ..Default::default()
        };
        let order = lines.update("ord_pbjz8x", "odl_dgtxyl", &params).await.unwrap();

        assert_eq!(order.id, "ord_pbjz8x");
        let request = transport.last_request();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.path, "orders/ord_pbjz8x/lines/odl_dgtxyl");
    }

    #[tokio::test]
    async fn test_cancel_lines() {
        let transport = MockTransport::new().respond_empty(204);
        let lines = OrderLinesResource::new(transport.network());

        let params = CancelOrderLinesParams::new(vec![
            OrderLineQuantity::partial("odl_dgtxyl", 1),
            OrderLineQuantity::all("odl_jp31jz"),
        ]);
        lines.cancel("ord_8wmqcHMN4U", &params).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "orders/ord_8wmqcHMN4U/lines");
        assert_eq!(
            request.body,
            Some(json!({
                "lines": [
                    { "id": "odl_dgtxyl", "quantity": 1 },
                    { "id": "odl_jp31jz" }
                ]
            }))
        );
    }

    #[tokio::test]
    async fn test_cancel_lines_rejects_bad_input() {
        let transport = MockTransport::new();
        let lines = OrderLinesResource::new(transport.network());

        assert!(lines
            .cancel("ord_8wmqcHMN4U", &CancelOrderLinesParams::default())
            .await
            .is_err());
        let err = lines
            .cancel(
                "ord_8wmqcHMN4U",
                &CancelOrderLinesParams::new(vec![OrderLineQuantity::all("shp_3wmsgCJN4U")]),
            )
            .await
            .unwrap_err();
        assert_eq!(err.message(), "The orderline id is invalid");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_shipment_with_tracking() {
        let transport = MockTransport::new()
            .respond(201, fixtures::shipment("shp_3wmsgCJN4U", "ord_kEn1PlbGa"));
        let shipments = OrderShipmentsResource::new(transport.network());

        let params = CreateShipmentParams::default().with_tracking(Tracking {
            carrier: "PostNL".into(),
            code: "3SKABA000000000".into(),
            url: None,
        });
        let shipment = shipments.create("ord_kEn1PlbGa", &params).await.unwrap();

        assert_eq!(shipment.tracking.unwrap().carrier, "PostNL");
        assert_eq!(
            transport.last_request().body,
            Some(json!({
                "lines": [],
                "tracking": { "carrier": "PostNL", "code": "3SKABA000000000" }
            }))
        );
    }

    #[tokio::test]
    async fn test_order_refund_and_payment_paths() {
        let transport = MockTransport::new()
            .respond(201, fixtures::refund("re_4qqhO89gsT", "tr_WDqYK6vllg"))
            .respond(201, fixtures::payment("tr_WDqYK6vllg"));
        let refunds = OrderRefundsResource::new(transport.network());
        let payments = OrderPaymentsResource::new(transport.network());

        refunds
            .create("ord_stTC2WHAuS", &CreateOrderRefundParams::default())
            .await
            .unwrap();
        let params = CreateOrderPaymentParams {
            method: vec!["banktransfer".into()],
            ..Default::default()
        };
        payments.create("ord_stTC2WHAuS", &params).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path, "orders/ord_stTC2WHAuS/refunds");
        assert_eq!(requests[1].path, "orders/ord_stTC2WHAuS/payments");
        assert_eq!(requests[1].body, Some(json!({ "method": ["banktransfer"] })));
    }
}
