/* crate use */

/* module declaration */
pub mod cli;
pub mod error;
pub mod generate;
pub mod rng;

/* reexport for easiest use */
pub use rng::RandomSource;

/// Nucleotides a sequence can contain, order matter for draw reproducibility
pub const ALPHABET: [u8; 4] = [b'A', b'U', b'G', b'C'];

/// Watson-Crick and wobble pairs, order matter for draw reproducibility
pub const ALLOWED_PAIRS: [(u8, u8); 6] = [
    (b'A', b'U'),
    (b'U', b'A'),
    (b'G', b'C'),
    (b'C', b'G'),
    (b'G', b'U'),
    (b'U', b'G'),
];

/// Get a random base
pub fn random_base<R>(rng: &mut R) -> u8
where
    R: RandomSource + ?Sized,
{
    ALPHABET[rng.gen_index(ALPHABET.len())]
}

/// Get a random allowed pair
pub fn random_pair<R>(rng: &mut R) -> (u8, u8)
where
    R: RandomSource + ?Sized,
{
    ALLOWED_PAIRS[rng.gen_index(ALLOWED_PAIRS.len())]
}

/// Return true if the ordered pair (open, close) can be a base pair
pub fn is_allowed_pair(open: u8, close: u8) -> bool {
    ALLOWED_PAIRS.contains(&(open, close))
}

#[cfg(test)]
mod t {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn random_base_() {
        let mut rng = rng::Scripted::new(&[0, 1, 2, 3]);

        let data: Vec<u8> = (0..4).map(|_| random_base(&mut rng)).collect();

        assert_eq!(b"AUGC".to_vec(), data);
        assert_eq!(rng.bounds, vec![4; 4]);
    }

    #[test]
    fn random_pair_() {
        let mut rng = rng::Scripted::new(&[0, 1, 2, 3, 4, 5]);

        let data: Vec<(u8, u8)> = (0..6).map(|_| random_pair(&mut rng)).collect();

        assert_eq!(ALLOWED_PAIRS.to_vec(), data);
        assert_eq!(rng.bounds, vec![6; 6]);
    }

    #[test]
    fn random_base_seeded() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let data: Vec<u8> = (0..1000).map(|_| random_base(&mut rng)).collect();

        assert!(data.iter().all(|b| ALPHABET.contains(b)));
        for nuc in ALPHABET {
            assert!(data.contains(&nuc));
        }
    }

    #[test]
    fn allowed_pair() {
        assert!(is_allowed_pair(b'A', b'U'));
        assert!(is_allowed_pair(b'U', b'A'));
        assert!(is_allowed_pair(b'G', b'C'));
        assert!(is_allowed_pair(b'C', b'G'));
        assert!(is_allowed_pair(b'G', b'U'));
        assert!(is_allowed_pair(b'U', b'G'));

        assert!(!is_allowed_pair(b'A', b'A'));
        assert!(!is_allowed_pair(b'A', b'C'));
        assert!(!is_allowed_pair(b'C', b'U'));
        assert!(!is_allowed_pair(b'A', b'G'));
        assert!(!is_allowed_pair(b'a', b'u'));
        assert!(!is_allowed_pair(b'A', b'T'));
    }
}
