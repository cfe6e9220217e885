/// An error raised when parsing an unknown [`TraversalMode`](crate::TraversalMode) name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown traversal mode '{value}', expected 'subclasses', 'include' or 'traverse'")]
pub struct ParseTraversalModeError {
    pub(crate) value: String,
}

impl ParseTraversalModeError {
    /// The value that failed to parse.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}
