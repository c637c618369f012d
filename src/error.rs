//! Errors reported by [`CursorSeq`](crate::CursorSeq) operations.

/// Errors that can occur when operating on a [`CursorSeq`](crate::CursorSeq).
///
/// Every failure is detected before the sequence is touched, so a returned
/// error always leaves the sequence exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// The operation needs a current element, but the cursor is absent.
    #[error("`{op}` requires a current element")]
    InvalidState { op: &'static str },

    /// A required sequence argument was not supplied.
    #[error("`{op}` requires the sequence argument `{arg}`")]
    InvalidArgument {
        op: &'static str,
        arg: &'static str,
    },
}

pub type Result<T, E = SeqError> = std::result::Result<T, E>;
