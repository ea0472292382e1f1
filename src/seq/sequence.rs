use crate::seq::dna;
use rand::Rng;
use std::fmt;

/// A nucleotide sequence over `dna::ALPHABET`. Once generated it is never modified, so the
/// same value can be annotated, written and then used for statistics.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    /// Draws `n` bases independently and uniformly from the alphabet.
    pub fn random<R: Rng>(rng: &mut R, n: usize) -> Self {
        let bases = (0..n)
            .map(|_| dna::ALPHABET[rng.gen_range(0..dna::ALPHABET.len())])
            .collect();
        Self(bases)
    }

    /// Builds a sequence from existing text. Returns `None` if any character is outside the
    /// alphabet.
    #[cfg(test)]
    pub fn from_string(s: &str) -> Option<Self> {
        if s.bytes().all(|b| dna::rank(b).is_some()) {
            Some(Self(s.as_bytes().to_vec()))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // every byte is one of A, C, G or T
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
