/// Errors raised by the todo view-models.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// A filter name or tab index outside `All`, `Active` and `Completed`.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}
