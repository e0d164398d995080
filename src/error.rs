use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("display size must have exactly 2 components, got {count}")]
    InvalidDisplayComponents { count: usize },

    #[error("invalid {axis}-axis range: start={start}, end={end} (expected finite start < end)")]
    InvalidRange { axis: char, start: f64, end: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
