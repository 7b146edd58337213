//! Check a sequence against its structure, independently of how it was generated

/* local use */
use super::token::{tokenize, Token};
use crate::error::Generation;

/// Verify every matched bracket hold an allowed pair and every base is in alphabet.
pub fn validate_pairing(seq: &[u8], structure: &[u8]) -> Result<(), Generation> {
    if seq.len() != structure.len() {
        return Err(Generation::LengthMismatch {
            seq: seq.len(),
            structure: structure.len(),
        });
    }

    let mut stack = Vec::new();

    for res in tokenize(structure) {
        let (i, token) = res?;

        match token {
            Token::Open => stack.push(i),
            Token::Close => {
                let j = stack.pop().ok_or(Generation::UnbalancedClose(i))?;

                if !crate::is_allowed_pair(seq[j], seq[i]) {
                    return Err(Generation::DisallowedPair {
                        open: j,
                        close: i,
                        left: seq[j] as char,
                        right: seq[i] as char,
                    });
                }
            }
            Token::Unpaired => (),
        }
    }

    if !stack.is_empty() {
        return Err(Generation::UnbalancedOpen(stack.len()));
    }

    if let Some(pos) = seq.iter().position(|c| !crate::ALPHABET.contains(c)) {
        return Err(Generation::InvalidSequenceChar(seq[pos] as char, pos));
    }

    Ok(())
}

#[cfg(test)]
mod t {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn valid() {
        assert!(validate_pairing(b"", b"").is_ok());
        assert!(validate_pairing(b"AGU", b"(.)").is_ok());
        assert!(validate_pairing(b"GGCUUCGGUC", b"((((..))))").is_ok());
        assert!(validate_pairing(b"ACGU", b"....").is_ok());
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            validate_pairing(b"AU", b"(.)"),
            Err(Generation::LengthMismatch {
                seq: 2,
                structure: 3
            })
        );
    }

    #[test]
    fn disallowed_pair() {
        assert_eq!(
            validate_pairing(b"GAAAA", b".(..)"),
            Err(Generation::DisallowedPair {
                open: 1,
                close: 4,
                left: 'A',
                right: 'A'
            })
        );
        assert_eq!(
            format!("{}", validate_pairing(b"GAAAA", b".(..)").unwrap_err()),
            "disallowed pair at (1,4): (A, A)"
        );
    }

    #[test]
    fn unbalanced() {
        assert_eq!(
            validate_pairing(b"AUA", b"())"),
            Err(Generation::UnbalancedClose(2))
        );
        assert_eq!(
            validate_pairing(b"GAU", b"((."),
            Err(Generation::UnbalancedOpen(2))
        );
    }

    #[test]
    fn invalid_char() {
        assert_eq!(
            validate_pairing(b"AAA", b".-."),
            Err(Generation::InvalidStructureChar('-', 1))
        );
        assert_eq!(
            validate_pairing(b"ATA", b"..."),
            Err(Generation::InvalidSequenceChar('T', 1))
        );
    }

    #[test]
    fn generated_pass() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for length in 0..40 {
            let structure = crate::generate::structure::generate_structure(&mut rng, length).unwrap();
            let seq = crate::generate::sequence::assign_sequence(&mut rng, &structure).unwrap();

            assert!(validate_pairing(&seq, &structure).is_ok());
        }
    }
}
