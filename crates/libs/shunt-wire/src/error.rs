/// Errors produced below the router: framing and codec failures.
///
/// Codec variants carry the underlying cause as a string so the error stays
/// `Clone + PartialEq` regardless of which codec produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum WireError {
    #[error("frame too short: {len} bytes")]
    FrameTooShort { len: usize },

    #[error("encode error: {0}")]
    Encode(String),

    #[error("decode error: {0}")]
    Decode(String),
}
