//! Source of uniform integer draws

/* crate use */
use rand::Rng;

/// Anything able to draw an index uniformly in `0..bound`.
///
/// Every draw advance the source state, so the order and the number of call
/// fully determine the generated output.
pub trait RandomSource {
    /// Draw an index in `0..bound`, bound must be greater than 0
    fn gen_index(&mut self, bound: usize) -> usize;
}

impl<R> RandomSource for R
where
    R: Rng + ?Sized,
{
    fn gen_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// A fake source replaying a fixed list of draws and recording requested bounds
#[cfg(test)]
pub(crate) struct Scripted {
    draws: std::collections::VecDeque<usize>,
    pub bounds: Vec<usize>,
}

#[cfg(test)]
impl Scripted {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            bounds: Vec::new(),
        }
    }

    pub fn exhausted(&self) -> bool {
        self.draws.is_empty()
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn gen_index(&mut self, bound: usize) -> usize {
        self.bounds.push(bound);
        let value = self.draws.pop_front().expect("script run out of draws");
        assert!(value < bound, "scripted draw {} out of 0..{}", value, bound);

        value
    }
}
