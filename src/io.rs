use crate::seq::Spliced;
use anyhow::Context;
use itertools::Itertools;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Number of sequence characters per body line.
pub const LINE_WIDTH: usize = 60;

/// A single FASTA record, borrowing its parts from the pipeline.
pub struct Record<'a> {
    pub id: &'a str,
    pub description: &'a str,
    pub seq: &'a Spliced,
}

/// Formats a record and writes it to the provided writer.
///
/// The header is `>` followed by the id, a space and the description. The sequence follows in
/// lines of at most `LINE_WIDTH` characters, each ending in a newline. Lines are split on
/// character boundaries, so a multi-byte annotation is never cut in half.
pub fn write_record(writer: &mut impl Write, record: &Record) -> std::io::Result<()> {
    writeln!(writer, ">{} {}", record.id, record.description)?;

    for line in &record.seq.text.chars().chunks(LINE_WIDTH) {
        writeln!(writer, "{}", line.collect::<String>())?;
    }

    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `record` into it.
///
/// # Errors
///
/// This function will return an error if:
/// * The file cannot be created, e.g. its directory does not exist or is not writable.
/// * Writing or flushing the record fails.
///
/// The file handle is dropped before returning, whether or not the write succeeded.
pub fn save_record(path: &Path, record: &Record) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_record(&mut writer, record)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Unable to write record {}", record.id))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::{splice_at, Sequence};
    use std::io::Cursor;

    fn spliced(n: usize, annotation: &str, offset: usize) -> Spliced {
        let bases: String = "ACGT".chars().cycle().take(n).collect();
        splice_at(&Sequence::from_string(&bases).unwrap(), annotation, offset).unwrap()
    }

    fn render(record: &Record) -> String {
        let mut buf = Cursor::new(Vec::new());
        write_record(&mut buf, record).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn short_record_is_one_line() {
        let seq = spliced(10, "Bob", 10);
        let out = render(&Record { id: "seq1", description: "test", seq: &seq });
        assert_eq!(out, ">seq1 test\nACGTACGTACBob\n");
    }

    #[test]
    fn body_wraps_at_line_width() {
        let seq = spliced(118, "Bob", 0);
        let out = render(&Record { id: "x", description: "", seq: &seq });
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], ">x ");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 1);
        assert_eq!(lines[1..].concat(), seq.text);
    }

    #[test]
    fn exact_multiple_has_no_empty_line() {
        let seq = spliced(120, "", 0);
        let out = render(&Record { id: "x", description: "d", seq: &seq });
        assert_eq!(out.lines().count(), 3);
        assert!(out.ends_with("\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn wraps_by_character_not_byte() {
        let seq = spliced(58, "ëëëë", 58);
        let out = render(&Record { id: "x", description: "d", seq: &seq });
        let lines: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(lines[0].chars().count(), 60);
        assert_eq!(lines[1], "ëë");
    }

    #[test]
    fn save_then_read_back() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("seq1.fasta");
        let seq = spliced(75, "Grace", 30);

        save_record(&path, &Record { id: "seq1", description: "a b c", seq: &seq }).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(">seq1 a b c"));
        assert!(lines.clone().all(|l| l.chars().count() <= LINE_WIDTH));
        assert_eq!(lines.collect::<String>(), seq.text);
    }

    #[test]
    fn save_truncates_existing_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("old.fasta");
        std::fs::write(&path, "x".repeat(1000)).unwrap();

        let seq = spliced(4, "", 0);
        save_record(&path, &Record { id: "old", description: "new", seq: &seq }).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">old new\nACGT\n");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("seq1.fasta");
        let seq = spliced(4, "", 0);

        let err = save_record(&path, &Record { id: "seq1", description: "", seq: &seq })
            .unwrap_err();
        assert!(err.to_string().contains("Unable to create"));
    }
}
