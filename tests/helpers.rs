// Shared test helpers for building throwaway workspaces.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::fs;
use std::path::{Path, PathBuf};

use disavow_generator::Config;
use tempfile::TempDir;

/// A temporary input/output/whitelist layout. Dropping it removes everything.
pub struct Workspace {
    // Held for its Drop
    _root: TempDir,
    pub config: Config,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let config = Config {
            input_dir: root.path().join("INGEST"),
            output_dir: root.path().join("OUTPUT"),
            whitelist_file: root.path().join("whitelist.txt"),
            ..Config::default()
        };
        fs::create_dir_all(&config.input_dir).expect("Failed to create input dir");
        fs::create_dir_all(&config.output_dir).expect("Failed to create output dir");
        Self {
            _root: root,
            config,
        }
    }

    /// Writes an input file and returns its path.
    #[allow(dead_code)] // Used by other test files
    pub fn add_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config.input_dir.join(name);
        fs::write(&path, content).expect("Failed to write input file");
        path
    }

    #[allow(dead_code)] // Used by other test files
    pub fn write_whitelist(&self, content: &str) {
        fs::write(&self.config.whitelist_file, content).expect("Failed to write whitelist");
    }

    /// Names of every file in the output directory, sorted.
    #[allow(dead_code)] // Used by other test files
    pub fn output_names(&self) -> Vec<String> {
        dir_names(&self.config.output_dir)
    }
}

#[allow(dead_code)] // Used by other test files
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
