//! Error types for the colour sort engine.

/// Failures raised by level generation, puzzle construction and the session.
///
/// An illegal move is not an error: selecting an incompatible destination
/// yields [`SelectionOutcome::Rejected`](crate::games::colour_sort::SelectionOutcome)
/// and is ordinary control flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A count or setting failed its range precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A colour sequence does not fit the puzzle geometry it is applied to.
    #[error("colour sequence has {actual} entries, puzzle has {expected} slots")]
    ShapeMismatch { expected: usize, actual: usize },

    /// More distinct colours were requested than the base palette holds.
    #[error("requested {requested} distinct colours, palette has {available}")]
    PaletteExhausted { requested: usize, available: usize },

    /// The level store could not be read.
    #[error("storage error: {0}")]
    Storage(String),
}

impl EngineError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
