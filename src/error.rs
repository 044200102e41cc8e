pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot parse a number from empty input")]
    Empty,
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}
