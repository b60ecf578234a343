//! Result of a controller operation

use serde::{Deserialize, Serialize};

/// How an operation ended. Errors are already reported to the view by the
/// time a caller sees this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationOutcome {
    /// Succeeded.
    Completed,
    /// Stopped by validation before any network call.
    Rejected,
    /// A service, transport or storage error ended it.
    Failed,
    /// The triggering control was disabled; nothing happened.
    Busy,
}

impl OperationOutcome {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}
