use thiserror::Error;

/// Validation failures. Both indicate a misconfiguration and are never corrected silently.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid check_mode: {0} (expected file|build|newest|oldest)")]
    InvalidCheckMode(String),

    #[error("exclude_newer_than must be >= 0 (value: {0})")]
    InvalidPeriod(i64),
}
