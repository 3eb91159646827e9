use thiserror::Error;

/// Errors raised when turning raw user input into demo parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("unknown demo '{0}' (expected balls, squares, cradle or fluid)")]
    UnknownDemo(String),
    #[error("unsupported ball count {0} (expected 5, 10 or 50)")]
    InvalidBallCount(u32),
    #[error("unsupported mass ratio {0} (expected 1, 10 or 100)")]
    InvalidMassRatio(u32),
    #[error("unknown obstacle '{0}' (expected ball, triangle or airfoil)")]
    UnknownObstacle(String),
}
