pub const A: u8 = b'A';
pub const C: u8 = b'C';
pub const G: u8 = b'G';
pub const T: u8 = b'T';

/// The four nucleotides, in the order they are reported.
pub const ALPHABET: [u8; 4] = [A, C, G, T];

/// Position of a nucleotide within `ALPHABET`, or `None` for any other byte.
#[inline(always)]
pub fn rank(b: u8) -> Option<usize> {
    match b {
        A => Some(0),
        C => Some(1),
        G => Some(2),
        T => Some(3),
        _ => None,
    }
}
