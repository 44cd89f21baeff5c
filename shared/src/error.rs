use thiserror::Error;

use crate::session::Step;

/// Everything that can go wrong during a draw.
///
/// The `Display` text of the alert variants is exactly what the visitor sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("Invalid invitation code")]
    WrongAccessCode,
    #[error("Only {limit} prizes may be excluded")]
    ExclusionLimit { limit: usize },
    #[error("Please exclude {remaining} more prize(s) first")]
    ExclusionIncomplete { remaining: usize },
    #[error("Unknown prize id {0}")]
    UnknownPrize(u32),
    #[error("You have already taken part. Please do not spin again.")]
    AlreadyParticipated,
    #[error("Saving failed, please keep a screenshot of this result as proof.")]
    SubmissionFailed(String),
    #[error("expected the {expected} screen but the session is on {actual}")]
    WrongStep { expected: Step, actual: Step },
    #[error("no spin is waiting for this action")]
    NotSpinning,
    #[error("wheel landed on slot {landed} but slot {requested} was requested")]
    WheelMismatch { requested: usize, landed: usize },
    #[error("invalid draw configuration: {0}")]
    InvalidConfig(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl DrawError {
    /// Whether this error should interrupt the visitor with a blocking alert.
    /// The rest are only logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::WrongAccessCode
                | Self::ExclusionLimit { .. }
                | Self::ExclusionIncomplete { .. }
                | Self::AlreadyParticipated
                | Self::SubmissionFailed(_)
        )
    }
}
