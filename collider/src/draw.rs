use std::fmt;

/// One combination, kept sorted ascending. Two draws are equal when they
/// hold the same numbers, whatever order they were picked in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Draw {
    numbers: Vec<u32>,
}

impl Draw {
    pub fn from_values<I: IntoIterator<Item = u32>>(values: I) -> Self {
        let mut numbers: Vec<u32> = values.into_iter().collect();
        numbers.sort_unstable();
        Self { numbers }
    }

    /// Takes ownership of an already filled buffer and sorts it in place.
    pub(crate) fn from_vec(mut numbers: Vec<u32>) -> Self {
        numbers.sort_unstable();
        Self { numbers }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Element-wise comparison against a sorted slice.
    pub fn matches(&self, sorted: &[u32]) -> bool {
        self.numbers.as_slice() == sorted
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for n in &self.numbers {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", n)?;
            first = false;
        }
        Ok(())
    }
}
