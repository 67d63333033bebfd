use crate::cli::Cli;
use crate::draw::Draw;
use crate::error::ConfigError;
use crate::sampler::{self, DrawSampler};

pub const DEFAULT_POOL_SIZE: u32 = 49;
pub const DEFAULT_DRAW_SIZE: usize = 6;

/// Validated lottery parameters. The only way to build one is through
/// [`Config::new`], so a `Config` in hand is always runnable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pool_size: u32,
    draw_size: usize,
    target: Draw,
}

impl Config {
    /// `target = None` means `1..=draw_size`.
    pub fn new(
        pool_size: u32,
        draw_size: usize,
        target: Option<Vec<u32>>,
    ) -> Result<Self, ConfigError> {
        sampler::check_sizes(pool_size, draw_size)?;

        let target = match target {
            Some(values) => Draw::from_values(values),
            // draw_size <= pool_size, so this fits in u32
            None => Draw::from_values(1..=draw_size as u32),
        };

        if target.len() != draw_size {
            return Err(ConfigError::TargetLength {
                expected: draw_size,
                found: target.len(),
            });
        }
        if let Some(&value) = target
            .as_slice()
            .iter()
            .find(|&&v| v == 0 || v > pool_size)
        {
            return Err(ConfigError::TargetOutOfRange {
                value,
                pool: pool_size,
            });
        }
        if let Some(w) = target.as_slice().windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigError::DuplicateTarget { value: w[0] });
        }

        Ok(Self {
            pool_size,
            draw_size,
            target,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::new(cli.pool_size, cli.draw_size, cli.target.clone())
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    pub fn draw_size(&self) -> usize {
        self.draw_size
    }

    pub fn target(&self) -> &Draw {
        &self.target
    }

    /// Sampler for this game. Sizes were checked in [`Config::new`].
    pub fn sampler(&self) -> DrawSampler {
        DrawSampler::with_checked_sizes(self.pool_size, self.draw_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            draw_size: DEFAULT_DRAW_SIZE,
            target: Draw::from_values(1..=DEFAULT_DRAW_SIZE as u32),
        }
    }
}
