use thiserror::Error;

pub type TickerResult<T> = Result<T, TickerError>;

#[derive(Debug, Error)]
pub enum TickerError {
    #[error("invalid ticker config: {0}")]
    InvalidConfig(String),

    #[error("render target rejected frame: {0}")]
    Render(String),
}
