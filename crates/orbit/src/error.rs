use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrbitError {
    #[error("a carousel needs at least one item")]
    Empty,
    #[error("item {index} is out of range for {count} items")]
    OutOfRange { index: usize, count: usize },
}
