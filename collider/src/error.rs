/// Rejected lottery parameters. Always raised before the first draw.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("pool size must be at least 1")]
    EmptyPool,

    #[error("draw size must be at least 1")]
    EmptyDraw,

    #[error("cannot draw {draw} numbers from a pool of {pool}")]
    DrawExceedsPool { draw: usize, pool: u32 },

    #[error("target has {found} numbers, expected {expected}")]
    TargetLength { expected: usize, found: usize },

    #[error("target number {value} is outside the pool 1..={pool}")]
    TargetOutOfRange { value: u32, pool: u32 },

    #[error("target number {value} appears more than once")]
    DuplicateTarget { value: u32 },
}
