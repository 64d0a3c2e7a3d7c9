use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;

use crate::counts::RowCounts;
use crate::error::{CustomError, Result};
use crate::model::{Cohort, SampleInfo};
use crate::output::PercentWriter;
use crate::reader::matrix::{CohortColumns, MatrixReader};
use crate::reader::samples::read_samples;

/// Rows written and malformed rows dropped in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub n_rows: usize,
    pub n_skipped: usize,
}

/// Print a recoverable error to stderr and keep going.
fn report(err: CustomError) {
    eprintln!("{:?}", miette::Report::new(err));
}

/// A samples file that cannot be read is reported and treated as empty.
pub fn load_samples(path: &Path) -> Vec<SampleInfo> {
    match read_samples(&path) {
        Ok(samples) => samples,
        Err(e) => {
            report(e);
            Vec::new()
        }
    }
}

/// Never fails: every error is reported to stderr. Returns `None` when the
/// data file could not be opened (nothing is written) or output could not
/// be written.
pub fn run(data_path: &Path, samples_path: &Path, out: impl Write) -> Option<RunSummary> {
    let samples = load_samples(samples_path);
    log::info!(
        "Read {} samples from {}",
        samples.len(),
        samples_path.display()
    );

    let reader = match MatrixReader::open(&data_path) {
        Ok(reader) => reader,
        Err(e) => {
            report(e);
            return None;
        }
    };
    match process_matrix(reader, &samples, out) {
        Ok(summary) => {
            log::info!(
                "Wrote {} rows, skipped {} rows with fewer than 3 fields",
                summary.n_rows,
                summary.n_skipped
            );
            Some(summary)
        }
        Err(e) => {
            report(e);
            None
        }
    }
}

/// Writes the output header, then one line per data row. A read error ends
/// the rows early; only write errors are returned.
pub fn process_matrix<R: std::io::BufRead>(
    mut reader: MatrixReader<R>,
    samples: &[SampleInfo],
    out: impl Write,
) -> Result<RunSummary> {
    let columns = CohortColumns::resolve(samples, reader.header());
    log::info!(
        "Matched {} case and {} control samples against {} header columns",
        columns.n_cohort(Cohort::Case),
        columns.n_cohort(Cohort::Control),
        reader.header().n_samples()
    );

    let mut writer = PercentWriter::new(out);
    writer.write_header()?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("[{elapsed_precise}] {spinner} {pos} sites")?);

    let mut n_rows = 0;
    for row in reader.by_ref() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                report(e);
                break;
            }
        };
        let counts = RowCounts::tally(&row, &columns);
        writer.write_row(&row, &counts.percentages())?;
        n_rows += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();
    writer.finish()?;

    Ok(RunSummary {
        n_rows,
        n_skipped: reader.n_skipped(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SampleStatus;
    use std::io::{self, BufReader, Cursor, Read};

    /// Serves `ok` bytes, then fails every read.
    struct BrokenAfter(Cursor<Vec<u8>>);

    impl Read for BrokenAfter {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            match self.0.read(out)? {
                0 => Err(io::Error::other("device error")),
                n => Ok(n),
            }
        }
    }

    fn samples(spec: &[(&str, SampleStatus)]) -> Vec<SampleInfo> {
        spec.iter()
            .map(|&(name, status)| SampleInfo {
                name: name.as_bytes().to_vec(),
                status,
            })
            .collect()
    }

    fn process(matrix: &str, samples: &[SampleInfo]) -> (String, RunSummary) {
        let reader = MatrixReader::from_reader(Cursor::new(matrix));
        let mut out = Vec::new();
        let summary = process_matrix(reader, samples, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn processes_matrix_end_to_end() {
        let samples = samples(&[
            ("S1", SampleStatus::Case),
            ("S2", SampleStatus::Control),
            ("S3", SampleStatus::Excluded),
        ]);
        let matrix = "Chrom Pos S1 S2 S3\n1 100 0/0 0/1 1/1\n1 101\n2 7 ./. 1/1 0/0\n";
        let (out, summary) = process(matrix, &samples);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Chrom Pos 0/0_Percent_Case"));
        assert_eq!(lines[1], "1 100 100 0 0 100 0 0");
        assert_eq!(lines[2], "2 7 0 0 0 0 0 100");
        assert_eq!(
            summary,
            RunSummary {
                n_rows: 2,
                n_skipped: 1
            }
        );
    }

    #[test]
    fn empty_sample_list_gives_zero_percentages() {
        let (out, _) = process("Chrom Pos S1\n1 100 0/0\n", &[]);
        assert_eq!(out.lines().nth(1), Some("1 100 0 0 0 0 0 0"));
    }

    #[test]
    fn empty_matrix_writes_only_header() {
        let samples = samples(&[("S1", SampleStatus::Case)]);
        let (out, summary) = process("", &samples);
        assert_eq!(out.lines().count(), 1);
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn missing_data_file_writes_nothing() {
        let dir = std::env::temp_dir();
        let mut out = Vec::new();
        let summary = run(
            &dir.join("gtpercent-no-such-data-file.txt"),
            &dir.join("gtpercent-no-such-samples-file.txt"),
            &mut out,
        );
        assert!(summary.is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn unreadable_header_writes_only_output_header() {
        let samples = samples(&[("S1", SampleStatus::Case)]);
        let reader = MatrixReader::from_reader(BufReader::new(BrokenAfter(Cursor::new(Vec::new()))));
        let mut out = Vec::new();
        let summary = process_matrix(reader, &samples, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Chrom Pos "));
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn read_error_keeps_rows_written_so_far() {
        let samples = samples(&[("S1", SampleStatus::Case)]);
        let input = b"Chrom Pos S1\n1 100 1/1\n".to_vec();
        let reader = MatrixReader::from_reader(BufReader::new(BrokenAfter(Cursor::new(input))));
        let mut out = Vec::new();
        let summary = process_matrix(reader, &samples, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "1 100 0 0 0 0 100 0");
        assert_eq!(summary.n_rows, 1);
    }
}
