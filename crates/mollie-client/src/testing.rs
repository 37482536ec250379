//! Scripted transport for unit tests: records every request and answers
//! with queued responses in order.

use crate::network::NetworkClient;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use async_trait::async_trait;
use mollie_core::{MollieError, MollieResult};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    requests: Vec<ApiRequest>,
    responses: VecDeque<ApiResponse>,
}

#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response
    pub fn respond(self, status: u16, body: Value) -> Self {
        self.push(status, body.to_string())
    }

    /// Queue a response without a body
    pub fn respond_empty(self, status: u16) -> Self {
        self.push(status, String::new())
    }

    fn push(self, status: u16, body: String) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(ApiResponse { status, body });
        self
    }

    pub fn network(&self) -> NetworkClient {
        NetworkClient::new(Arc::new(self.clone()))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> MollieResult<ApiResponse> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .ok_or_else(|| MollieError::Transport("No scripted response left".to_string()))
    }
}

/// Minimal response bodies for each entity
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn payment(id: &str) -> Value {
        json!({
            "resource": "payment",
            "id": id,
            "mode": "test",
            "createdAt": "2018-03-20T13:13:37+00:00",
            "status": "open",
            "amount": { "value": "10.00", "currency": "EUR" },
            "description": "Order #12345",
            "sequenceType": "oneoff",
            "_links": {
                "checkout": { "href": "https://www.mollie.com/payscreen/select-method/7UhSN1zuXS", "type": "text/html" }
            }
        })
    }

    pub fn refund(id: &str, payment_id: &str) -> Value {
        json!({
            "resource": "refund",
            "id": id,
            "amount": { "value": "5.95", "currency": "EUR" },
            "status": "pending",
            "createdAt": "2018-03-14T17:09:02.0Z",
            "description": "Order #33",
            "paymentId": payment_id
        })
    }

    pub fn customer(id: &str) -> Value {
        json!({
            "resource": "customer",
            "id": id,
            "mode": "test",
            "name": "Customer A",
            "email": "customer@example.org",
            "createdAt": "2018-04-06T13:10:19.0Z"
        })
    }

    pub fn mandate(id: &str) -> Value {
        json!({
            "resource": "mandate",
            "id": id,
            "mode": "test",
            "status": "valid",
            "method": "directdebit",
            "details": {
                "consumerName": "John Doe",
                "consumerAccount": "NL55INGB0000000000",
                "consumerBic": "INGBNL2A"
            },
            "mandateReference": "YOUR-COMPANY-MD13804",
            "signatureDate": "2018-05-07",
            "createdAt": "2018-05-07T10:49:08.0Z"
        })
    }

    pub fn subscription(id: &str, customer_id: &str) -> Value {
        json!({
            "resource": "subscription",
            "id": id,
            "mode": "test",
            "createdAt": "2016-06-01T12:23:34+00:00",
            "status": "active",
            "amount": { "value": "25.00", "currency": "EUR" },
            "times": 4,
            "timesRemaining": 4,
            "interval": "3 months",
            "startDate": "2016-06-01",
            "nextPaymentDate": "2016-09-01",
            "description": "Quarterly payment",
            "webhookUrl": "https://webshop.example.org/payments/webhook",
            "customerId": customer_id
        })
    }

    pub fn order_line(id: &str, order_id: &str) -> Value {
        json!({
            "resource": "orderline",
            "id": id,
            "orderId": order_id,
            "name": "LEGO 42083 Bugatti Chiron",
            "sku": "5702016116977",
            "type": "physical",
            "status": "created",
            "isCancelable": true,
            "quantity": 2,
            "unitPrice": { "value": "399.00", "currency": "EUR" },
            "vatRate": "21.00",
            "vatAmount": { "value": "121.14", "currency": "EUR" },
            "totalAmount": { "value": "698.00", "currency": "EUR" },
            "createdAt": "2018-08-02T09:29:56+00:00"
        })
    }

    pub fn order(id: &str) -> Value {
        json!({
            "resource": "order",
            "id": id,
            "profileId": "pfl_URR55HPMGx",
            "method": "ideal",
            "amount": { "value": "698.00", "currency": "EUR" },
            "status": "created",
            "isCancelable": true,
            "mode": "test",
            "billingAddress": {
                "streetAndNumber": "Keizersgracht 313",
                "postalCode": "1016 EE",
                "city": "Amsterdam",
                "country": "nl",
                "givenName": "Luke",
                "familyName": "Skywalker",
                "email": "luke@skywalker.com"
            },
            "orderNumber": "18475",
            "locale": "nl_NL",
            "redirectUrl": "https://example.org/redirect",
            "createdAt": "2018-08-02T09:29:56+00:00",
            "lines": [ order_line("odl_dgtxyl", id) ],
            "_links": {
                "checkout": { "href": "https://www.mollie.com/payscreen/order/checkout/pbjz8x", "type": "text/html" }
            }
        })
    }

    pub fn shipment(id: &str, order_id: &str) -> Value {
        json!({
            "resource": "shipment",
            "id": id,
            "orderId": order_id,
            "createdAt": "2018-08-09T14:33:54+00:00",
            "tracking": {
                "carrier": "PostNL",
                "code": "3SKABA000000000",
                "url": "http://postnl.nl/tracktrace/?B=3SKABA000000000&P=1016EE&D=NL&T=C"
            },
            "lines": [ order_line("odl_dgtxyl", order_id) ]
        })
    }

    pub fn payment_link(id: &str) -> Value {
        json!({
            "resource": "payment-link",
            "id": id,
            "mode": "test",
            "profileId": "pfl_QkEhN94Ba",
            "createdAt": "2021-03-20T09:13:37+00:00",
            "amount": { "value": "24.95", "currency": "EUR" },
            "description": "Bicycle tires",
            "redirectUrl": "https://webshop.example.org/thanks",
            "_links": {
                "paymentLink": { "href": "https://useplink.com/payment/4Y0eZitmBnQ6IDoMqZQKh", "type": "text/html" }
            }
        })
    }

    pub fn profile(id: &str) -> Value {
        json!({
            "resource": "profile",
            "id": id,
            "mode": "live",
            "name": "My website name",
            "website": "https://www.mywebsite.com",
            "email": "info@mywebsite.com",
            "phone": "+31208202070",
            "categoryCode": 5399,
            "status": "verified",
            "createdAt": "2018-03-20T09:28:37+00:00"
        })
    }

    pub fn settlement(id: &str) -> Value {
        json!({
            "resource": "settlement",
            "id": id,
            "reference": "1234567.1804.03",
            "createdAt": "2018-04-06T06:00:01.0Z",
            "settledAt": "2018-04-06T09:41:44.0Z",
            "status": "paidout",
            "amount": { "value": "39.75", "currency": "EUR" }
        })
    }

    pub fn method(id: &str) -> Value {
        json!({
            "resource": "method",
            "id": id,
            "description": "iDEAL",
            "minimumAmount": { "value": "0.01", "currency": "EUR" },
            "maximumAmount": { "value": "50000.00", "currency": "EUR" },
            "image": {
                "size1x": "https://www.mollie.com/external/icons/payment-methods/ideal.png",
                "size2x": "https://www.mollie.com/external/icons/payment-methods/ideal%402x.png",
                "svg": "https://www.mollie.com/external/icons/payment-methods/ideal.svg"
            },
            "status": "activated"
        })
    }

    /// A collection page; `next` is the cursor of the following page
    pub fn page(collection: &str, items: Vec<Value>, next: Option<&str>) -> Value {
        let next = next.map(|from| {
            json!({
                "href": format!("https://api.mollie.com/v2/{}?from={}&limit=5", collection, from),
                "type": "application/hal+json"
            })
        });
        json!({
            "count": items.len(),
            "_embedded": { collection: items },
            "_links": {
                "self": { "href": format!("https://api.mollie.com/v2/{}?limit=5", collection), "type": "application/hal+json" },
                "previous": null,
                "next": next,
                "documentation": { "href": "https://docs.mollie.com/reference/v2/", "type": "text/html" }
            }
        })
    }
}
