use crate::draw::Draw;
use crate::error::ConfigError;
use crate::rng::RandomSource;

/// Draws `draw_size` distinct numbers from `1..=pool_size` without
/// replacement.
pub struct DrawSampler {
    pool_size: u32,
    draw_size: usize,
    pool: Vec<u32>,
}

/// Checks `1 <= draw_size <= pool_size`.
pub fn check_sizes(pool_size: u32, draw_size: usize) -> Result<(), ConfigError> {
    if pool_size == 0 {
        return Err(ConfigError::EmptyPool);
    }
    if draw_size == 0 {
        return Err(ConfigError::EmptyDraw);
    }
    if draw_size > pool_size as usize {
        return Err(ConfigError::DrawExceedsPool {
            draw: draw_size,
            pool: pool_size,
        });
    }
    Ok(())
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl DrawSampler {
    pub fn new(pool_size: u32, draw_size: usize) -> Result<Self, ConfigError> {
        check_sizes(pool_size, draw_size)?;
        Ok(Self::with_checked_sizes(pool_size, draw_size))
    }

    /// Caller has already run [`check_sizes`].
    pub(crate) fn with_checked_sizes(pool_size: u32, draw_size: usize) -> Self {
        Self {
            pool_size,
            draw_size,
            pool: Vec::new(),
        }
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    pub fn draw_size(&self) -> usize {
        self.draw_size
    }

    /// Number of distinct combinations, C(pool_size, draw_size). Returns
    /// `u128::MAX` only when the exact value does not fit.
    pub fn combinations(&self) -> u128 {
        let n = self.pool_size as u128;
        let k = self.draw_size.min(self.pool_size as usize - self.draw_size) as u128;
        let mut acc: u128 = 1;
        for i in 0..k {
            // acc = C(n, i). (i + 1) / g divides (n - i), so the product
            // below is exactly C(n, i + 1).
            //
            let g = gcd(acc, i + 1);
            let factor = (n - i) / ((i + 1) / g);
            acc = match (acc / g).checked_mul(factor) {
                Some(v) => v,
                None => return u128::MAX,
            };
        }
        acc
    }

    pub fn draw<R: RandomSource>(&mut self, source: &mut R) -> Draw {
        let mut picked = Vec::with_capacity(self.draw_size);
        self.draw_into(source, &mut picked);
        Draw::from_vec(picked)
    }

    /// Fills `picked` with one draw, unsorted, in selection order.
    pub fn draw_into<R: RandomSource>(&mut self, source: &mut R, picked: &mut Vec<u32>) {
        source.reseed();

        // Fresh pool every draw
        //
        self.pool.clear();
        self.pool.extend(1..=self.pool_size);
        picked.clear();

        for _ in 0..self.draw_size {
            let idx = source.index(self.pool.len());
            picked.push(self.pool.swap_remove(idx));
        }
    }
}
