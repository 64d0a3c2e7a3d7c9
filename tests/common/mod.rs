use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const OUTPUT_HEADER: &str = "Chrom Pos 0/0_Percent_Case 0/0_Percent_Control 0/1_Percent_Case 0/1_Percent_Control 1/1_Percent_Case 1/1_Percent_Control";

pub const COHORT_SAMPLES: &str = "\
Case1 +
Case2 +
Case3 +
Ctrl1 -
Ctrl2 -
Skip1 0
Absent -
";

// Case1..3 are cases, Ctrl1..2 controls, Skip1 excluded. Absent is not in the header.
pub const COHORT_MATRIX: &str = "\
Chrom\tPos\tCase1\tCtrl1\tCase2\tSkip1\tCtrl2\tCase3
1\t100\t0/0\t0/0\t0/1\t1/1\t1/1\t1/1
1\t200\t./.\t0/1\t1/0\t1/1\t./.\t0/1
1\t300
2\t50\t./.\t./.\t./.\t0/0\t./.\t./.
2\t60\t0/0\tNA\t1/1\t0/0\t0/0\t0/0
X\t7\t1/1
";

pub const COHORT_EXPECTED: &[&str] = &[
    // case: 0/0, 0/1, 1/1 -> 33 each; control: 0/0, 1/1 -> 50/0/50
    "1 100 33 50 33 0 33 50",
    // case: 0/1, 0/1 -> het 100; control: 0/1 -> het 100
    "1 200 0 0 100 100 0 0",
    // nothing counted
    "2 50 0 0 0 0 0 0",
    // case: 0/0, 1/1, 0/0 -> 66/0/33; control: NA, 0/0 -> 50 with NA in the total
    "2 60 66 50 0 0 33 0",
    // short row, only Case1 in range
    "X 7 0 0 0 0 100 0",
];

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub struct Dataset {
    pub dir: PathBuf,
    pub data: PathBuf,
    pub samples: PathBuf,
}

pub fn create_dataset(label: &str, matrix: &str, samples: &str) -> io::Result<Dataset> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join("gtpercent-tests").join(format!(
        "{}-{}-{}",
        std::process::id(),
        id,
        label
    ));
    fs::create_dir_all(&dir)?;

    let data = dir.join("genotypes.txt");
    let samples_path = dir.join("samples.txt");
    fs::write(&data, matrix)?;
    fs::write(&samples_path, samples)?;

    Ok(Dataset {
        dir,
        data,
        samples: samples_path,
    })
}

pub fn expected_cohort_output() -> String {
    let mut out = String::from(OUTPUT_HEADER);
    out.push('\n');
    for line in COHORT_EXPECTED {
        out.push_str(line);
        out.push('\n');
    }
    out
}
