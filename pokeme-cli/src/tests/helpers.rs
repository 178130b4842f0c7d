//! Test helpers for writing viewer and candidate fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const VIEWER_JSON: &str = r#"{
  "id": "me",
  "displayName": "Morgan",
  "sports": [{ "sport": "Tennis", "skillLevel": "Intermediate" }],
  "availability": { "Monday": ["Morning"] },
  "collegeYear": "Junior",
  "major": "Economics",
  "bio": ""
}"#;

pub(super) const CANDIDATES_JSON: &str = r#"[
  {
    "id": "me",
    "displayName": "Morgan",
    "sports": [{ "sport": "Tennis", "skillLevel": "Intermediate" }]
  },
  {
    "id": "u-golf",
    "displayName": "Gil",
    "sports": [{ "sport": "Golf", "skillLevel": "Advanced" }],
    "availability": null
  },
  {
    "id": "u-tennis",
    "displayName": "Tess",
    "sports": [
      { "sport": "tennis", "skillLevel": "Intermediate" },
      { "sport": "Soccer", "skillLevel": "Beginner" }
    ],
    "availability": { "Monday": ["Morning"], "Tuesday": ["Evening"] },
    "collegeYear": "junior",
    "major": "economics",
    "bio": ""
  }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding `viewer.json` and `candidates.json`.
pub(super) struct ProfileFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ProfileFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn with_defaults() -> Self {
        let files = Self::new();
        write_utf8(&files.viewer(), VIEWER_JSON.as_bytes());
        write_utf8(&files.candidates(), CANDIDATES_JSON.as_bytes());
        files
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn viewer(&self) -> Utf8PathBuf {
        self.root.join("viewer.json")
    }

    pub(super) fn candidates(&self) -> Utf8PathBuf {
        self.root.join("candidates.json")
    }
}
