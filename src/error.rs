use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
