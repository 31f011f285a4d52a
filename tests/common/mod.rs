#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// A five-column table description covering every mapped SQL type.
pub const FIVE_TYPE_TABLE: &str = "\
# exported table description
column_details
a,character varying,255
b,boolean,1
c,bigint,8
d,timestamp without time zone,8
e,double precision,8
";

/// A LookML view referencing only columns `a` and `b`.
pub const VIEW_REFERENCING_A_AND_B: &str = "\
view: orders {
  sql_table_name: public.orders ;;

  dimension: a {
    type: string
    sql: ${TABLE}.a ;;
  }

  dimension: b {
    type: yesno
    sql: ${TABLE}.b ;;
  }
}
";
