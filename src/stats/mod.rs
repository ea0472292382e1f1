use crate::seq::{dna, Sequence};

use serde::Serialize;
use std::fmt;

/// Base composition of a sequence.
///
/// This is always built from the generated sequence *before* the annotation is inserted, so
/// that the annotation text never shows up in the percentages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Composition {
    pub len: usize,        // number of bases counted
    pub counts: [usize; 4], // occurrences, in `dna::ALPHABET` order
}

impl Composition {
    pub fn from_sequence(seq: &Sequence) -> Self {
        let mut counts = [0usize; 4];
        seq.as_bytes()
            .iter()
            .filter_map(|b| dna::rank(*b))
            .for_each(|i| counts[i] += 1);

        Self {
            len: seq.len(),
            counts,
        }
    }

    pub fn count(&self, base: u8) -> usize {
        dna::rank(base).map_or(0, |i| self.counts[i])
    }

    /// Percentage of `base` over the whole sequence. An empty sequence reports 0.
    pub fn percent(&self, base: u8) -> f64 {
        self.fraction_of(self.count(base))
    }

    /// Combined percentage of C and G.
    pub fn gc_percent(&self) -> f64 {
        self.fraction_of(self.count(dna::C) + self.count(dna::G))
    }

    fn fraction_of(&self, n: usize) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        (n as f64) / (self.len as f64) * 100.0
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for base in dna::ALPHABET {
            writeln!(f, "{}: {:.1}%", base as char, self.percent(base))?;
        }
        write!(f, "%CG: {:.1}%", self.gc_percent())
    }
}
