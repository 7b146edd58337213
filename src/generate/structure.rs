//! Random dot-bracket structure from grammar `S -> S '.' | S '(' S ')' | ε`

/* local use */
use crate::error::Generation;
use crate::rng::RandomSource;

pub type Structure = Vec<u8>;

/// Pending work of the grammar expansion
enum Step {
    /// Expand a sub-structure of this size
    Build(usize),
    /// Write this character
    Emit(u8),
}

/// Production choose for a sub-structure of size n
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    /// `S -> S '.'`, prefix of size n - 1
    Dot,
    /// `S -> S '(' S ')'`, inner span of given size, prefix get the rest
    Wrap(usize),
}

impl Production {
    /// Convert an option index in `0..n` to production, dot first then wrap by inner size
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Production::Dot,
            k => Production::Wrap(k - 1),
        }
    }
}

/// Number of production applicable to a sub-structure of size n
///
/// One dot option when `n >= 1`, plus one wrap option per inner size in `0..=n-2` when `n >= 2`.
pub fn nb_options(n: usize) -> usize {
    let dot = usize::from(n >= 1);
    let wrap = if n >= 2 { n - 1 } else { 0 };

    dot + wrap
}

/// Generate a balanced dot-bracket structure of exactly `length` characters.
///
/// Each expanded size draw one production among all options, then expand the prefix and after
/// that the inner span. Length 0 return an empty structure without any draw.
pub fn generate_structure<R>(rng: &mut R, length: usize) -> Result<Structure, Generation>
where
    R: RandomSource + ?Sized,
{
    let mut structure = Vec::with_capacity(length);
    let mut stack = vec![Step::Build(length)];

    while let Some(step) = stack.pop() {
        let n = match step {
            Step::Emit(c) => {
                structure.push(c);
                continue;
            }
            Step::Build(0) => continue,
            Step::Build(n) => n,
        };

        let production = Production::from_index(rng.gen_index(nb_options(n)));
        log::trace!("size {} production {:?}", n, production);

        // last pushed is first expanded
        match production {
            Production::Dot => {
                stack.push(Step::Emit(b'.'));
                stack.push(Step::Build(n - 1));
            }
            Production::Wrap(inner) => {
                let prefix = n
                    .checked_sub(inner + 2)
                    .ok_or(Generation::InvalidGrammarSplit { size: n, inner })?;

                stack.push(Step::Emit(b')'));
                stack.push(Step::Build(inner));
                stack.push(Step::Emit(b'('));
                stack.push(Step::Build(prefix));
            }
        }
    }

    Ok(structure)
}
