use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CustomError, Result};
use crate::model::{Cohort, SampleInfo};
use crate::reader::{read_raw_line, split_fields};

/// Leading identifier columns (chromosome and position) before the genotypes.
pub const ID_FIELDS: usize = 2;
/// Rows with fewer fields than this carry no genotype and are skipped.
pub const MIN_ROW_FIELDS: usize = ID_FIELDS + 1;

#[derive(Debug, Clone, Default)]
pub struct Header {
    columns: HashMap<Vec<u8>, usize>,
}

impl Header {
    pub fn parse(line: &[u8]) -> Self {
        let mut columns = HashMap::new();
        for (idx, name) in split_fields(line).enumerate().skip(ID_FIELDS) {
            // A repeated name keeps its last column
            columns.insert(name.to_vec(), idx);
        }
        Self { columns }
    }

    pub fn column_of(&self, sample: &[u8]) -> Option<usize> {
        self.columns.get(sample).copied()
    }

    pub fn n_samples(&self) -> usize {
        self.columns.len()
    }
}

/// Counted samples joined to their header column, in sample-list order.
#[derive(Debug, Clone, Default)]
pub struct CohortColumns {
    columns: Vec<(usize, Cohort)>,
}

impl CohortColumns {
    pub fn resolve(samples: &[SampleInfo], header: &Header) -> Self {
        let mut columns = Vec::with_capacity(samples.len());
        for sample in samples {
            let Some(cohort) = sample.status.cohort() else {
                continue;
            };
            match header.column_of(&sample.name) {
                Some(idx) => columns.push((idx, cohort)),
                None => log::warn!(
                    "sample {} is not in the data file header",
                    sample.display_name()
                ),
            }
        }
        Self { columns }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Cohort)> + '_ {
        self.columns.iter().copied()
    }

    pub fn n_cohort(&self, cohort: Cohort) -> usize {
        self.iter().filter(|&(_, c)| c == cohort).count()
    }
}

/// One data line split into fields, kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<Vec<u8>>,
}

impl Row {
    /// Returns `None` for rows too short to hold a genotype.
    pub fn parse(line: &[u8]) -> Option<Self> {
        let fields: Vec<Vec<u8>> = split_fields(line).map(<[u8]>::to_vec).collect();
        if fields.len() < MIN_ROW_FIELDS {
            return None;
        }
        Some(Self { fields })
    }

    pub fn chrom(&self) -> &[u8] {
        &self.fields[0]
    }

    pub fn pos(&self) -> &[u8] {
        &self.fields[1]
    }

    pub fn field(&self, idx: usize) -> Option<&[u8]> {
        self.fields.get(idx).map(Vec::as_slice)
    }
}

pub struct MatrixReader<R> {
    reader: R,
    header: Header,
    line_num: usize,
    n_skipped: usize,
    buf: Vec<u8>,
    // Header read failure, handed out as the first item
    pending: Option<CustomError>,
    done: bool,
}

impl MatrixReader<BufReader<File>> {
    pub fn open(path: &impl AsRef<Path>) -> Result<Self> {
        let f = File::open(path).map_err(|e| CustomError::OpenMatrix {
            source: e,
            path: path.as_ref().to_path_buf(),
        })?;
        Ok(Self::from_reader(BufReader::new(f)))
    }
}

impl<R: BufRead> MatrixReader<R> {
    /// Consumes the header line. An empty or unreadable input gives an empty
    /// header; a read error is yielded by the first call to `next`.
    pub fn from_reader(mut reader: R) -> Self {
        let mut buf = Vec::new();
        let (header, pending) = match read_raw_line(&mut reader, &mut buf) {
            Ok(true) => (Header::parse(&buf), None),
            Ok(false) => (Header::default(), None),
            Err(e) => (
                Header::default(),
                Some(CustomError::ReadMatrix {
                    source: e,
                    line_num: 1,
                }),
            ),
        };

        Self {
            reader,
            header,
            line_num: 1,
            n_skipped: 0,
            buf,
            pending,
            done: false,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Data lines dropped for having fewer than three fields.
    pub fn n_skipped(&self) -> usize {
        self.n_skipped
    }
}

impl<R: BufRead> Iterator for MatrixReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.pending.take() {
            self.done = true;
            return Some(Err(e));
        }
        while !self.done {
            self.line_num += 1;
            match read_raw_line(&mut self.reader, &mut self.buf) {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    // Poison iterator to prevent further reads
                    self.done = true;
                    return Some(Err(CustomError::ReadMatrix {
                        source: e,
                        line_num: self.line_num,
                    }));
                }
            }
            match Row::parse(&self.buf) {
                Some(row) => return Some(Ok(row)),
                None => {
                    log::debug!("skipping line {} with too few fields", self.line_num);
                    self.n_skipped += 1;
                }
            }
        }
        None
    }
}
