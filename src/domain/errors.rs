/// Simplified error system - three failure surfaces, nothing fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Network error or unusable payload from the market data source.
    /// Recovered by the scheduler's bounded retry; worst case is stale
    /// displayed data.
    Fetch(String),
    /// Rejected configuration input. The previous stored value stays in
    /// effect.
    InvalidConfig(String),
    /// Canvas/drawing failure surfaced by the rendering adapter.
    Rendering(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Fetch(msg) => write!(f, "Fetch Error: {}", msg),
            AppError::InvalidConfig(msg) => write!(f, "Invalid Configuration: {}", msg),
            AppError::Rendering(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type FetchResult<T> = Result<T, AppError>;
pub type ConfigResult<T> = Result<T, AppError>;
