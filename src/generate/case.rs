//! Manage case record

/* local use */
use super::sequence::Seq;
use super::structure::Structure;

/// One generated sequence and its structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub id: String,
    pub seq: Seq,
    pub structure: Structure,
}

impl Case {
    pub fn new(prefix: &str, index: usize, seq: Seq, structure: Structure) -> Self {
        Case {
            id: case_id(prefix, index),
            seq,
            structure,
        }
    }

    /// Record fields in output order
    pub fn record(&self) -> [&[u8]; 3] {
        [self.id.as_bytes(), &self.seq, &self.structure]
    }
}

/// Build case identifiant, index is zero padded to 4 digit
pub fn case_id(prefix: &str, index: usize) -> String {
    format!("{}_{:04}", prefix, index)
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.id,
            String::from_utf8_lossy(&self.seq),
            String::from_utf8_lossy(&self.structure)
        )
    }
}
