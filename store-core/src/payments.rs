//! The payments domain: payment history, the single "current" payment
//! projection, and the redirect link returned on creation.

use store_types::{Payment, PaymentCreatedBody};

use crate::remote::{OpStatus, Remote};

/// State of the payments domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentsState {
    /// The current user's payments, most recent first.
    pub items: Vec<Payment>,
    /// The payment currently being viewed, if any.
    pub current: Option<Payment>,
    /// Redirect link to the external payment page, set on creation and
    /// held until the hand-off happens.
    pub payment_link: Option<String>,
    /// Operation loading/error tracking.
    pub status: OpStatus,
}

/// Events the payments domain responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentsEvent {
    /// The payment history was requested.
    FetchList(Remote<Vec<Payment>>),
    /// A payment's details were requested by transaction id.
    FetchDetails(Remote<Payment>),
    /// A payment was initiated.
    Create(Remote<PaymentCreatedBody>),
    /// Drop the current-payment projection.
    ClearCurrent,
    /// Drop the stored redirect link (after hand-off).
    ClearPaymentLink,
    /// Clear a surfaced error.
    ClearError,
}

impl PaymentsState {
    /// Apply one event to the domain state.
    pub fn apply(&mut self, event: PaymentsEvent) {
        let Self {
            items,
            current,
            payment_link,
            status,
        } = self;

        match event {
            PaymentsEvent::FetchList(remote) => remote.settle(status, |payments| {
                *items = payments;
            }),
            PaymentsEvent::FetchDetails(remote) => remote.settle(status, |payment| {
                *current = Some(payment);
            }),
            PaymentsEvent::Create(remote) => remote.settle(status, |created| {
                items.insert(0, created.payment.clone());
                *current = Some(created.payment);
                *payment_link = Some(created.payment_link);
            }),
            PaymentsEvent::ClearCurrent => *current = None,
            PaymentsEvent::ClearPaymentLink => *payment_link = None,
            PaymentsEvent::ClearError => status.clear_error(),
        }
    }
}
