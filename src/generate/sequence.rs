//! Assign nucleotides to a structure

/* local use */
use super::token::{tokenize, Token};
use crate::error::Generation;
use crate::rng::RandomSource;

pub type Seq = Vec<u8>;

const UNASSIGNED: u8 = b'?';

/// Build a sequence compatible with structure.
///
/// Structure is read from left to right, each unpaired position draw a base and each closing
/// bracket draw an allowed pair for itself and its opening bracket.
pub fn assign_sequence<R>(rng: &mut R, structure: &[u8]) -> Result<Seq, Generation>
where
    R: RandomSource + ?Sized,
{
    let mut seq = vec![UNASSIGNED; structure.len()];
    let mut stack = Vec::new();

    for res in tokenize(structure) {
        let (i, token) = res?;

        match token {
            Token::Open => stack.push(i),
            Token::Close => {
                let j = stack.pop().ok_or(Generation::UnbalancedClose(i))?;
                let (open, close) = crate::random_pair(rng);

                seq[j] = open;
                seq[i] = close;
            }
            Token::Unpaired => seq[i] = crate::random_base(rng),
        }
    }

    if !stack.is_empty() {
        return Err(Generation::UnbalancedOpen(stack.len()));
    }

    if let Some(pos) = seq.iter().position(|&c| c == UNASSIGNED) {
        return Err(Generation::UnassignedPosition(pos));
    }

    Ok(seq)
}
