//! Plain status lines for operation feedback.

use std::fmt;

/// One-line outcome of an operation that has nothing else to show, such as
/// deleting a session that does not exist.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Session 4 deleted".to_string());
        assert_eq!(format!("{success}"), "Success: Session 4 deleted\n");

        let failure = OperationStatus::failure("Deletion not confirmed".to_string());
        assert_eq!(format!("{failure}"), "Error: Deletion not confirmed\n");
    }
}
