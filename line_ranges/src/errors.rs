#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid line range [{start},{end}): start is after end")]
    InvalidRange { start: u32, end: u32 },

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    ParseIntError(#[from] std::num::ParseIntError),
}
