/// Missing-call sentinel in the genotype matrix.
pub const MISSING_GENOTYPE: &[u8] = b"./.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStatus {
    Case,
    Control,
    Excluded,
}

impl SampleStatus {
    /// '+' is case and '0' is excluded. Everything else is tallied as control.
    pub fn from_byte(b: u8) -> Self {
        match b {
            b'+' => SampleStatus::Case,
            b'0' => SampleStatus::Excluded,
            _ => SampleStatus::Control,
        }
    }

    pub fn cohort(self) -> Option<Cohort> {
        match self {
            SampleStatus::Case => Some(Cohort::Case),
            SampleStatus::Control => Some(Cohort::Control),
            SampleStatus::Excluded => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleInfo {
    /// Raw name bytes, matched byte for byte against the matrix header.
    pub name: Vec<u8>,
    pub status: SampleStatus,
}

impl SampleInfo {
    pub fn display_name(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cohort {
    Case,
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genotype {
    HomRef,
    Het,
    HomAlt,
    Missing,
    Unrecognized,
}

impl Genotype {
    /// Exact byte match, no normalisation of case or whitespace.
    pub fn classify(token: &[u8]) -> Self {
        match token {
            b"0/0" => Genotype::HomRef,
            b"0/1" | b"1/0" => Genotype::Het,
            b"1/1" => Genotype::HomAlt,
            MISSING_GENOTYPE => Genotype::Missing,
            _ => Genotype::Unrecognized,
        }
    }
}
