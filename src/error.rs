use thiserror::Error;

/// Top-level error type for the vertex container crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Vertex(#[from] VertexError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Rejections produced by [`VertexContainer`](crate::container::VertexContainer) operations.
///
/// Both kinds are expected outcomes: the sequence is left untouched and no
/// callback fires.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VertexError {
    #[error("vertex index {index} is out of range for container of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("vertex container is empty")]
    EmptyContainer,
}

/// Errors related to the path arena.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("path not found")]
    NotFound,
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_message_names_index_and_len() {
        let err = VertexError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "vertex index 4 is out of range for container of length 2"
        );
    }

    #[test]
    fn top_level_error_is_transparent() {
        let err: Error = VertexError::EmptyContainer.into();
        assert_eq!(err.to_string(), "vertex container is empty");
        assert_eq!(err, Error::Vertex(VertexError::EmptyContainer));
    }
}
