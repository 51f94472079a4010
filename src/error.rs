use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("empty data: chart series has no samples")]
    EmptyData,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
