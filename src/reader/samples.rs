use itertools::Itertools;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CustomError, Result};
use crate::model::{SampleInfo, SampleStatus};
use crate::reader::{read_raw_line, split_fields};

/// Reads `<name> <status> [ignored...]` lines in file order.
pub fn read_samples(path: &impl AsRef<Path>) -> Result<Vec<SampleInfo>> {
    let f = File::open(path).map_err(|e| CustomError::OpenSamples {
        source: e,
        path: path.as_ref().to_path_buf(),
    })?;
    parse_samples(BufReader::new(f)).map_err(|e| CustomError::ReadSamples {
        source: e,
        path: path.as_ref().to_path_buf(),
    })
}

pub(crate) fn parse_samples(mut reader: impl BufRead) -> std::io::Result<Vec<SampleInfo>> {
    let mut samples = Vec::new();
    let mut buf = Vec::new();
    while read_raw_line(&mut reader, &mut buf)? {
        // Lines without both a name and a status are ignored
        let Some((name, status)) = split_fields(&buf).next_tuple() else {
            continue;
        };
        let status_byte = status[0];
        let sample = SampleInfo {
            name: name.to_vec(),
            status: SampleStatus::from_byte(status_byte),
        };
        if !matches!(status_byte, b'+' | b'-' | b'0') {
            log::warn!(
                "sample {} has status {:?}, counting it as control",
                sample.display_name(),
                status_byte as char
            );
        }
        samples.push(sample);
    }
    Ok(samples)
}
