//! # Completion Callbacks
//!
//! Adapter for callers that consume results through a completion callback
//! instead of awaiting a `Result`. It drives the operation and hands the
//! outcome over as `(error, value)`, exactly one of which is set.

use mollie_core::{MollieError, MollieResult};
use std::future::Future;

/// Drive `operation` to completion and report its outcome to `callback`.
///
/// ```rust,no_run
/// # #![allow(deprecated)]
/// # use mollie_client::{callback::complete_with, GetParams, MollieClient};
/// # async fn demo(client: MollieClient) {
/// complete_with(client.payments.get("tr_WDqYK6vllg", &GetParams::new()), |error, payment| {
///     match (error, payment) {
///         (Some(error), _) => eprintln!("{}", error),
///         (None, Some(payment)) => println!("{:?}", payment.status),
///         (None, None) => unreachable!(),
///     }
/// })
/// .await;
/// # }
/// ```
#[deprecated(note = "await the operation and match on its `MollieResult` instead")]
pub async fn complete_with<T, F, C>(operation: F, callback: C)
where
    F: Future<Output = MollieResult<T>>,
    C: FnOnce(Option<MollieError>, Option<T>),
{
    match operation.await {
        Ok(value) => callback(None, Some(value)),
        Err(error) => callback(Some(error), None),
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::params::GetParams;
    use crate::resources::PaymentsResource;
    use crate::testing::{fixtures, MockTransport};

    #[tokio::test]
    async fn test_success_reaches_callback() {
        let transport = MockTransport::new().respond(200, fixtures::payment("tr_WDqYK6vllg"));
        let payments = PaymentsResource::new(transport.network());

        let mut outcome = None;
        complete_with(payments.get("tr_WDqYK6vllg", &GetParams::new()), |error, payment| {
            outcome = Some((error, payment));
        })
        .await;

        let (error, payment) = outcome.unwrap();
        assert!(error.is_none());
        assert_eq!(payment.unwrap().id, "tr_WDqYK6vllg");
    }

    #[tokio::test]
    async fn test_error_reaches_callback() {
        let transport = MockTransport::new();
        let payments = PaymentsResource::new(transport.network());

        let mut outcome = None;
        complete_with(payments.get("foo", &GetParams::new()), |error, payment| {
            outcome = Some((error, payment));
        })
        .await;

        let (error, payment) = outcome.unwrap();
        assert_eq!(error.unwrap().message(), "The payment id is invalid");
        assert!(payment.is_none());
        assert_eq!(transport.request_count(), 0);
    }
}
