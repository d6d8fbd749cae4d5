//! One-line status messages for lesson commands that produce no lesson.

use std::fmt;

/// A `Success:` or `Error:` line shown in place of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Reported when `show` is given an unknown lesson ID.
    pub fn lesson_not_found(id: u64) -> Self {
        Self::failure(format!("Lesson with ID {id} not found"))
    }

    /// Reported when `delete` is given an unknown lesson ID. Not a failure:
    /// the lesson is gone either way.
    pub fn nothing_deleted(id: u64) -> Self {
        Self::success(format!("No lesson with ID {id}; nothing to delete"))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}
