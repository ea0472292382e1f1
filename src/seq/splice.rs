use crate::seq::Sequence;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SpliceError {
    #[error("offset {offset} is past the end of a sequence of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },
}

/// A sequence with an annotation inserted into it. This is what gets written to the record;
/// the sequence it was built from is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Spliced {
    /// The combined text, `sequence[..offset] + annotation + sequence[offset..]`
    pub text: String,
    /// Index of the first annotation byte. Always within `0..=sequence.len()`
    pub offset: usize,
    /// The annotation, as inserted
    pub annotation: String,
}

impl Spliced {
    /// Length in characters. The sequence part is ASCII, so this is the sequence length plus
    /// the number of characters in the annotation.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Cuts the annotation back out, returning the original sequence text.
    pub fn remove_annotation(&self) -> String {
        let end = self.offset + self.annotation.len();
        format!("{}{}", &self.text[..self.offset], &self.text[end..])
    }
}

/// Inserts `annotation` into `sequence` at `offset`.
///
/// # Errors
///
/// Returns `SpliceError::OffsetOutOfRange` if `offset` is greater than the sequence length.
/// An offset equal to the length appends the annotation.
pub fn splice_at(
    sequence: &Sequence,
    annotation: &str,
    offset: usize,
) -> Result<Spliced, SpliceError> {
    let len = sequence.len();
    if offset > len {
        return Err(SpliceError::OffsetOutOfRange { offset, len });
    }

    let s = sequence.as_str();
    let mut text = String::with_capacity(len + annotation.len());
    text.push_str(&s[..offset]);
    text.push_str(annotation);
    text.push_str(&s[offset..]);

    Ok(Spliced {
        text,
        offset,
        annotation: annotation.to_string(),
    })
}

/// Inserts `annotation` at an offset drawn uniformly from `0..=sequence.len()`, so both ends
/// of the sequence are possible positions.
pub fn insert_annotation<R: Rng>(
    sequence: &Sequence,
    annotation: &str,
    rng: &mut R,
) -> Result<Spliced, SpliceError> {
    let offset = rng.gen_range(0..=sequence.len());
    splice_at(sequence, annotation, offset)
}
