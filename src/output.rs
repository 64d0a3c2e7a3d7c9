use std::io::Write;

use crate::counts::Percentages;
use crate::error::{CustomError, Result};
use crate::reader::matrix::Row;

pub const OUTPUT_HEADER: [&str; 8] = [
    "Chrom",
    "Pos",
    "0/0_Percent_Case",
    "0/0_Percent_Control",
    "0/1_Percent_Case",
    "0/1_Percent_Control",
    "1/1_Percent_Case",
    "1/1_Percent_Control",
];

/// Space-delimited report writer. Fields are written verbatim, never quoted.
pub struct PercentWriter<W: Write> {
    wtr: csv::Writer<W>,
}

impl<W: Write> PercentWriter<W> {
    pub fn new(inner: W) -> Self {
        let wtr = csv::WriterBuilder::new()
            .delimiter(b' ')
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(inner);
        Self { wtr }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.wtr.write_record(OUTPUT_HEADER)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &Row, percentages: &Percentages) -> Result<()> {
        let Percentages(values) = percentages;
        self.wtr.write_field(row.chrom())?;
        self.wtr.write_field(row.pos())?;
        for value in values {
            self.wtr.write_field(value.to_string())?;
        }
        self.wtr.write_record(None::<&[u8]>)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.wtr
            .flush()
            .map_err(|e| CustomError::Write { source: e })?;
        self.wtr
            .into_inner()
            .map_err(|e| CustomError::Write {
                source: e.into_error(),
            })
    }
}
