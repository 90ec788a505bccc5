#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unexpected end of file")]
    UnexpectedEof,
    #[error("Data don't start with SOI marker")]
    MissingSoi,
    #[error("Expected marker start 0xFF, found {0:#04x}")]
    InvalidMarkerStart(u8),
    #[error("Segment length {0} is shorter than the length field")]
    InvalidLength(u16),
}
