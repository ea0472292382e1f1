pub mod dna;
pub mod sequence;
pub mod splice;

pub use self::sequence::Sequence;
pub use self::splice::{insert_annotation, splice_at, Spliced};
