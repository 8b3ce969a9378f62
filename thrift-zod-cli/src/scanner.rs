//! Input discovery for `.thrift` files.
//!
//! The input is either one file or a directory walked recursively,
//! respecting `.gitignore` patterns and an optional glob filter.

use crate::error::{CliResult, ScanError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File extension of IDL sources.
pub const THRIFT_EXTENSION: &str = "thrift";

/// A discovered IDL file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path to the file.
    pub path: PathBuf,

    /// Path relative to the scan root. For a single-file input this is the
    /// file name.
    pub relative_path: PathBuf,
}

/// Scanner for discovering Thrift files.
#[derive(Debug)]
pub struct SourceScanner {
    /// File or directory to scan.
    root: PathBuf,

    /// Whether to respect .gitignore files.
    respect_gitignore: bool,

    /// Optional glob filter pattern.
    filter: Option<glob::Pattern>,
}

impl SourceScanner {
    /// Create a new scanner for the given input path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: true,
            filter: None,
        }
    }

    /// Set whether to respect .gitignore files.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Set a glob filter pattern, matched against paths relative to the root.
    pub fn with_filter(mut self, pattern: &str) -> Result<Self, ScanError> {
        let glob_pattern = glob::Pattern::new(pattern)
            .map_err(|e| ScanError::invalid_pattern(pattern, e.to_string()))?;
        self.filter = Some(glob_pattern);
        Ok(self)
    }

    /// Whether the input is a single file.
    pub fn is_single_file(&self) -> bool {
        self.root.is_file()
    }

    /// Discover input files, sorted by relative path.
    pub fn scan(&self) -> CliResult<Vec<SourceFile>> {
        if !self.root.exists() {
            return Err(ScanError::not_found(self.root.clone()).into());
        }

        if self.is_single_file() {
            let name = self
                .root
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| self.root.clone());
            return Ok(vec![SourceFile {
                path: self.root.clone(),
                relative_path: name,
            }]);
        }

        let walker = WalkBuilder::new(&self.root)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .hidden(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(ScanError::Walk)?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if path.extension().map_or(true, |ext| ext != THRIFT_EXTENSION) {
                continue;
            }

            let relative = self.relative_path(path);
            if let Some(ref pattern) = self.filter {
                if !pattern.matches_path(&relative) {
                    continue;
                }
            }

            tracing::trace!(path = %relative.display(), "found thrift file");
            files.push(SourceFile {
                path: path.to_path_buf(),
                relative_path: relative,
            });
        }

        if files.is_empty() {
            return Err(ScanError::no_thrift_files(self.root.clone()).into());
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    /// Get the relative path from root.
    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    /// Get the input path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        fs::write(dir.path().join("service.thrift"), "struct A {}").unwrap();
        fs::write(dir.path().join("shared.thrift"), "struct B {}").unwrap();

        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/corgi.thrift"), "struct C {}").unwrap();

        fs::write(dir.path().join("README.md"), "# Test").unwrap();

        dir
    }

    #[test]
    fn test_scan_finds_thrift_files_sorted() {
        let dir = create_test_dir();
        let files = SourceScanner::new(dir.path()).scan().unwrap();

        let paths: Vec<_> = files
            .iter()
            .map(|f| f.relative_path.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            paths,
            vec!["nested/corgi.thrift", "service.thrift", "shared.thrift"]
        );
    }

    #[test]
    fn test_scan_with_filter() {
        let dir = create_test_dir();
        let files = SourceScanner::new(dir.path())
            .with_filter("**/corgi*.thrift")
            .unwrap()
            .scan()
            .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("nested/corgi.thrift"));
    }

    #[test]
    fn test_scan_invalid_filter() {
        let err = SourceScanner::new(".").with_filter("[").unwrap_err();
        assert!(matches!(err, ScanError::InvalidPattern { .. }));
    }

    #[test]
    fn test_scan_single_file() {
        let dir = create_test_dir();
        let scanner = SourceScanner::new(dir.path().join("service.thrift"));

        assert!(scanner.is_single_file());
        let files = scanner.scan().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, PathBuf::from("service.thrift"));
    }

    #[test]
    fn test_scan_nonexistent_input() {
        let err = SourceScanner::new("/nonexistent/path").scan().unwrap_err();
        assert!(matches!(err, CliError::Scan(ScanError::NotFound { .. })));
    }

    #[test]
    fn test_scan_directory_without_thrift_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "nothing here").unwrap();

        let err = SourceScanner::new(dir.path()).scan().unwrap_err();
        assert!(matches!(err, CliError::Scan(ScanError::NoThriftFiles { .. })));
    }
}
