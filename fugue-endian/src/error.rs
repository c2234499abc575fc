use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid byte order bits: {0:#04x}")]
    InvalidBits(u8),
    #[error("unrecognised byte order `{0}`")]
    InvalidName(String),
    #[error("native byte order of `{0}` cannot be classified")]
    UnknownNative(&'static str),
    #[error("buffer of {len} bytes is too small for `{ty}` ({size} bytes)")]
    BufferTooSmall { ty: &'static str, size: usize, len: usize },
}
