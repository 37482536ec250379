//! # Settlement, Invoice
//!
//! Payouts to the merchant and the invoices Mollie issues for its fees.

use crate::amount::Amount;
use crate::model::Links;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Status of a settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    /// Still collecting payments
    Open,
    Pending,
    /// Paid out to the merchant
    Paidout,
    Failed,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// A settlement, identified by a `stl_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    #[serde(default)]
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub settled_at: Option<DateTime<Utc>>,
    pub status: SettlementStatus,
    pub amount: Amount,
    /// Revenue and costs per year and month
    #[serde(default)]
    pub periods: Option<serde_json::Value>,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Settlement, "settlement", "settlements", Some("stl_"));

impl Settlement {
    pub fn is_paid_out(&self) -> bool {
        self.status == SettlementStatus::Paidout
    }
}

/// Status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Open,
    Paid,
    Overdue,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// One line of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub period: String,
    pub description: String,
    pub count: u32,
    pub vat_percentage: f64,
    pub amount: Amount,
}

/// An invoice, identified by an `inv_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub reference: String,
    #[serde(default)]
    pub vat_number: Option<String>,
    pub status: InvoiceStatus,
    pub issued_at: NaiveDate,
    #[serde(default)]
    pub paid_at: Option<NaiveDate>,
    #[serde(default)]
    pub due_at: Option<NaiveDate>,
    pub net_amount: Amount,
    pub vat_amount: Amount,
    pub gross_amount: Amount,
    #[serde(default)]
    pub lines: Vec<InvoiceLine>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Invoice, "invoice", "invoices", Some("inv_"));

impl Invoice {
    /// Link to the PDF version of the invoice
    pub fn pdf_url(&self) -> Option<&str> {
        self.links.href("pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_settlement() {
        let settlement: Settlement = serde_json::from_value(json!({
            "resource": "settlement",
            "id": "stl_jDk30akdN",
            "reference": "1234567.1804.03",
            "createdAt": "2018-04-06T06:00:01.0Z",
            "settledAt": "2018-04-06T09:41:44.0Z",
            "status": "paidout",
            "amount": { "value": "39.75", "currency": "EUR" },
            "periods": {},
            "invoiceId": "inv_FrvewDA3Pr"
        }))
        .unwrap();

        assert!(settlement.is_paid_out());
        assert_eq!(settlement.invoice_id.as_deref(), Some("inv_FrvewDA3Pr"));
    }

    #[test]
    fn test_parse_invoice() {
        let invoice: Invoice = serde_json::from_value(json!({
            "resource": "invoice",
            "id": "inv_xBEbP9rvAq",
            "reference": "2016.10000",
            "vatNumber": "NL001234567B01",
            "status": "open",
            "issuedAt": "2016-08-31",
            "dueAt": "2016-09-14",
            "netAmount": { "value": "45.00", "currency": "EUR" },
            "vatAmount": { "value": "9.45", "currency": "EUR" },
            "grossAmount": { "value": "54.45", "currency": "EUR" },
            "lines": [
                {
                    "period": "2016-09",
                    "description": "iDEAL transactiekosten",
                    "count": 100,
                    "vatPercentage": 21,
                    "amount": { "value": "45.00", "currency": "EUR" }
                }
            ],
            "_links": {
                "pdf": { "href": "https://www.mollie.com/merchant/download/invoice/xBEbP9rvAq/2ab44d60b35b1d06090bba955fa2c602", "type": "application/pdf" }
            }
        }))
        .unwrap();

        assert_eq!(invoice.issued_at, NaiveDate::from_ymd_opt(2016, 8, 31).unwrap());
        assert_eq!(invoice.lines[0].count, 100);
        assert!(invoice.pdf_url().is_some());
    }
}
