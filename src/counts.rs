use crate::model::{Cohort, Genotype};
use crate::reader::matrix::{CohortColumns, Row};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenotypeCount {
    pub hom_ref: u64,
    pub het: u64,
    pub hom_alt: u64,
    // Non-missing calls that match no class. They still count toward `total`.
    pub unclassified: u64,
    pub total: u64,
}

impl GenotypeCount {
    pub fn add(&mut self, genotype: Genotype) {
        match genotype {
            Genotype::Missing => return,
            Genotype::HomRef => self.hom_ref += 1,
            Genotype::Het => self.het += 1,
            Genotype::HomAlt => self.hom_alt += 1,
            Genotype::Unrecognized => self.unclassified += 1,
        }
        self.total += 1;
    }

    pub fn hom_ref_percent(&self) -> u64 {
        percent(self.hom_ref, self.total)
    }

    pub fn het_percent(&self) -> u64 {
        percent(self.het, self.total)
    }

    pub fn hom_alt_percent(&self) -> u64 {
        percent(self.hom_alt, self.total)
    }
}

/// Truncating integer percentage, 0 when there is nothing to divide by.
pub fn percent(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    count * 100 / total
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub case: GenotypeCount,
    pub control: GenotypeCount,
}

impl RowCounts {
    pub fn tally(row: &Row, columns: &CohortColumns) -> Self {
        let mut counts = Self::default();
        for (col_idx, cohort) in columns.iter() {
            // Short rows simply lack the column
            let Some(token) = row.field(col_idx) else {
                continue;
            };
            counts.cohort_mut(cohort).add(Genotype::classify(token));
        }
        counts
    }

    fn cohort_mut(&mut self, cohort: Cohort) -> &mut GenotypeCount {
        match cohort {
            Cohort::Case => &mut self.case,
            Cohort::Control => &mut self.control,
        }
    }

    pub fn percentages(&self) -> Percentages {
        Percentages([
            self.case.hom_ref_percent(),
            self.control.hom_ref_percent(),
            self.case.het_percent(),
            self.control.het_percent(),
            self.case.hom_alt_percent(),
            self.control.hom_alt_percent(),
        ])
    }
}

/// 0/0 case, 0/0 control, 0/1 case, 0/1 control, 1/1 case, 1/1 control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentages(pub [u64; 6]);
