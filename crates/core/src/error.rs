/// Domain-level errors shared by every rickdex crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A string value did not match any accepted variant.
    #[error("Invalid {field} '{value}'. Must be one of: {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}
