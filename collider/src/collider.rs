use tracing::{info, trace};

use crate::config::Config;
use crate::draw::Draw;
use crate::rng::RandomSource;
use crate::sampler::DrawSampler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `draws` counts the matching draw too, so the first draw is draw 1.
    Collision { draw: Draw, draws: u64 },
    /// The draw limit ran out first.
    Exhausted { draws: u64 },
}

/// Draws repeatedly until a draw equals the target.
pub struct Collider<R> {
    sampler: DrawSampler,
    source: R,
    target: Draw,
    picked: Vec<u32>,
    hit: Option<Draw>,
    draws: u64,
    state: State,
    progress_every: u64,
}

impl<R: RandomSource> Collider<R> {
    pub fn new(config: &Config, source: R) -> Self {
        Self {
            picked: Vec::with_capacity(config.draw_size()),
            sampler: config.sampler(),
            source,
            hit: None,
            target: config.target().clone(),
            draws: 0,
            state: State::Running,
            progress_every: 0,
        }
    }

    /// Log a progress line every `every` draws. Zero turns it off.
    pub fn with_progress(mut self, every: u64) -> Self {
        self.progress_every = every;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn sampler(&self) -> &DrawSampler {
        &self.sampler
    }

    /// One iteration. Returns the matching draw when this one hit. Once
    /// done, further calls draw nothing and return `None`.
    pub fn step(&mut self) -> Option<Draw> {
        if self.state == State::Done {
            return None;
        }

        self.sampler.draw_into(&mut self.source, &mut self.picked);
        self.picked.sort_unstable();
        self.draws += 1;

        if self.progress_every != 0 && self.draws % self.progress_every == 0 {
            info!("{} draws so far", self.draws);
        }

        if self.target.matches(&self.picked) {
            self.state = State::Done;
            let draw = Draw::from_vec(self.picked.clone());
            info!(draws = self.draws, "collision: {}", draw);
            self.hit = Some(draw.clone());
            Some(draw)
        } else {
            trace!(draw = ?self.picked, "miss");
            None
        }
    }

    /// Runs until the target comes up, or until `limit` total draws have
    /// been made. `None` means no limit. On a finished game this returns the
    /// same collision again without drawing.
    pub fn run(&mut self, limit: Option<u64>) -> Outcome {
        loop {
            if let Some(draw) = &self.hit {
                return Outcome::Collision {
                    draw: draw.clone(),
                    draws: self.draws,
                };
            }
            if let Some(max) = limit {
                if self.draws >= max {
                    return Outcome::Exhausted { draws: self.draws };
                }
            }
            self.step();
        }
    }
}
