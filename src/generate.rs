use crate::io::{save_record, Record};
use crate::prompt::Request;
use crate::seq::{insert_annotation, Sequence};
use crate::stats::Composition;

use anyhow::{Context, Result};
use rand::Rng;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What happened to a generated record.
pub enum Outcome {
    /// The record was written, and this is the composition of the sequence before the
    /// annotation went in.
    Saved { path: PathBuf, composition: Composition },
    /// The record could not be written. No statistics are produced in this case.
    WriteFailed { path: PathBuf, reason: anyhow::Error },
}

impl Outcome {
    /// Writes the user-facing summary of this outcome.
    pub fn report(&self, writer: &mut impl Write) -> std::io::Result<()> {
        match self {
            Outcome::Saved { path, composition } => {
                writeln!(writer, "The sequence was saved to the file {}", path.display())?;
                writeln!(writer, "Sequence statistics:")?;
                writeln!(writer, "{composition}")
            }
            Outcome::WriteFailed { path, reason } => {
                writeln!(
                    writer,
                    "Error: Unable to write file '{}': {:#}",
                    path.display(),
                    reason
                )
            }
        }
    }
}

/// Generates a random sequence, hides the requested annotation in it and saves the result as
/// `<id>.fasta` inside `dir`.
///
/// The composition is taken from the sequence as generated, so the annotation never counts
/// towards it. A failure to write the file is returned as `Outcome::WriteFailed` rather than an
/// error, so that the caller can report it and stop without treating it as a crash.
pub fn generate<R: Rng>(request: &Request, rng: &mut R, dir: &Path) -> Result<Outcome> {
    let sequence = Sequence::random(rng, request.length.get());
    info!("Generated {} random bases", sequence.len());

    let spliced = insert_annotation(&sequence, &request.annotation, rng)
        .context("Could not insert the annotation")?;
    debug!(
        "Inserted annotation of {} characters at offset {}",
        request.annotation.chars().count(),
        spliced.offset
    );
    debug_assert_eq!(spliced.remove_annotation(), sequence.as_str());

    let path = dir.join(format!("{}.fasta", request.id));
    let record = Record {
        id: &request.id,
        description: &request.description,
        seq: &spliced,
    };

    info!("Writing {} characters to {}", spliced.len(), path.display());
    if let Err(reason) = save_record(&path, &record) {
        warn!("Could not write {}", path.display());
        return Ok(Outcome::WriteFailed { path, reason });
    }

    let composition = Composition::from_sequence(&sequence);
    debug!("Composition: {}", serde_json::to_string(&composition)?);

    Ok(Outcome::Saved { path, composition })
}
