use thiserror::Error;

/// Failure reported by a platform system during terminal submission.
///
/// Failures travel back through `Driver::dispatch` and `Shape::render`
/// unchanged; no layer retries, masks, or reinterprets them. Retry policy,
/// if any, belongs to the caller above the dispatch chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The device behind the sink went away mid-submission.
    #[error("device lost on {system}")]
    DeviceLost { system: String },

    /// The sink refused the payload.
    #[error("submission rejected by {system}: {reason}")]
    Rejected { system: String, reason: String },
}

/// Status returned from every layer of the dispatch chain.
pub type SubmitStatus = Result<(), SubmitError>;
