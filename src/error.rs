use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CustomError {
    #[error("could not open samples file {path}")]
    #[diagnostic(
        code(gtpercent::samples::open),
        help("continuing with an empty sample list; every percentage will be 0")
    )]
    OpenSamples {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not read samples file {path}")]
    #[diagnostic(
        code(gtpercent::samples::read),
        help("continuing with an empty sample list; every percentage will be 0")
    )]
    ReadSamples {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not open data file {path}")]
    #[diagnostic(code(gtpercent::matrix::open))]
    OpenMatrix {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not read line {line_num} of data file")]
    #[diagnostic(code(gtpercent::matrix::read))]
    ReadMatrix {
        #[source]
        source: std::io::Error,
        line_num: usize,
    },

    #[error("could not write to standard output")]
    #[diagnostic(code(gtpercent::output::write))]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output record")]
    #[diagnostic(code(gtpercent::output::record))]
    CsvWrite(#[from] csv::Error),

    #[error("invalid progress bar template")]
    #[diagnostic(code(gtpercent::progress))]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, CustomError>;
