use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A declared record could not be fully read from the remaining buffer.
    /// Fatal to the whole conversion; retrying the same bytes cannot succeed.
    #[error(
        "truncated notebook input: needed {needed} byte(s) at offset {offset}, {remaining} remaining"
    )]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    /// The caller's cancellation token was signalled mid-decode.
    #[error("decode cancelled")]
    Cancelled,
}
