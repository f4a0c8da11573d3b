//! The shared remote-operation lifecycle.
//!
//! Every remote operation, in every domain, goes through the same three
//! observable transitions: `Pending` at call start, then exactly one of
//! `Fulfilled` or `Rejected`. The domains differ only in how a fulfilled
//! payload is merged into their collections, so the merge is supplied as a
//! callback and the loading/error bookkeeping lives here once.

/// One observable transition of a remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<P> {
    /// The call was just issued.
    Pending,
    /// The call succeeded with this payload.
    Fulfilled(P),
    /// The call failed; the string is the human-readable reason.
    Rejected(String),
}

impl<P> Remote<P> {
    /// Transform the fulfilled payload, leaving the other transitions as-is.
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> Remote<Q> {
        match self {
            Self::Pending => Remote::Pending,
            Self::Fulfilled(payload) => Remote::Fulfilled(f(payload)),
            Self::Rejected(reason) => Remote::Rejected(reason),
        }
    }

    /// Run the shared lifecycle bookkeeping against `status`, handing a
    /// fulfilled payload to the domain-specific `merge` callback.
    ///
    /// `Pending` starts the operation (and clears any previous error);
    /// `Rejected` records the failure and leaves collections untouched;
    /// `Fulfilled` finishes the operation and merges.
    pub fn settle(self, status: &mut OpStatus, merge: impl FnOnce(P)) {
        match self {
            Self::Pending => status.begin(),
            Self::Fulfilled(payload) => {
                status.finish();
                merge(payload);
            }
            Self::Rejected(reason) => status.fail(reason),
        }
    }
}

/// The loading/error pair every domain tracks for its operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpStatus {
    /// Whether a remote operation is currently in flight.
    pub is_loading: bool,
    /// The last failure reason, until explicitly cleared or a new
    /// operation starts.
    pub error: Option<String>,
}

impl OpStatus {
    /// A new operation was issued.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// The in-flight operation succeeded.
    pub fn finish(&mut self) {
        self.is_loading = false;
    }

    /// The in-flight operation failed.
    pub fn fail(&mut self, reason: String) {
        self.is_loading = false;
        self.error = Some(reason);
    }

    /// Explicitly clear a surfaced error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
