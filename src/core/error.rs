use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building bodies, configs and the simulation itself.
///
/// A running frame never produces one of these; per-frame problems (escaped
/// bodies, coincident centres) are recovered locally.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid body or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A body would not fit the 3x3 neighbourhood guarantee of the grid.
    #[error("body radius {radius} exceeds half the cell size {cell_size}")]
    BodyTooLarge { radius: f32, cell_size: f32 },

    /// Config JSON could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be created.
    #[cfg(feature = "parallel")]
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
