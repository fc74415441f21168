#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sales-report binary.
#[macro_export]
macro_rules! sales_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sales-report"))
    };
}

/// Three months of sales for three products in two regions.
pub const SAMPLE_CSV: &str = "\
Date,Product,Region,Sales,Expenses
2023-01-01,Product A,North,5000,3000
2023-01-01,Product B,North,4500,2800
2023-01-01,Product C,North,6000,3500
2023-01-01,Product A,South,5500,3200
2023-01-01,Product B,South,4800,2900
2023-01-01,Product C,South,6200,3800
2023-02-01,Product A,North,5200,3100
2023-02-01,Product B,North,4700,2850
2023-02-01,Product C,North,6100,3600
2023-02-01,Product A,South,5600,3300
2023-02-01,Product B,South,4900,2950
2023-02-01,Product C,South,6300,3900
2023-03-01,Product A,North,5300,3150
2023-03-01,Product B,North,4800,2900
2023-03-01,Product C,North,6200,3650
2023-03-01,Product A,South,5700,3350
2023-03-01,Product B,South,5000,3000
2023-03-01,Product C,South,6400,3950
";

/// Rows for a loss-making product appended to [`SAMPLE_CSV`].
pub const LOSS_ROWS: &str = "\
2023-03-01,Product D,North,1000,1500
2023-03-01,Product D,South,900,1200
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture holding `sales.csv` with the sample data.
    pub fn with_sample() -> Self {
        let fixture = Self::new();
        fixture.create_file("sales.csv", SAMPLE_CSV);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the fixture.
    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn read(&self, relative_path: &str) -> Vec<u8> {
        fs::read(self.join(relative_path)).expect("Failed to read file")
    }

    pub fn read_string(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }
}
