pub mod cli;
pub mod collider;
pub mod config;
pub mod draw;
pub mod error;
pub mod report;
pub mod rng;
pub mod sampler;

pub use collider::{Collider, Outcome, State};
pub use config::Config;
pub use draw::Draw;
pub use error::ConfigError;
pub use rng::{EntropySource, RandomSource, SeededSource};
pub use sampler::DrawSampler;
