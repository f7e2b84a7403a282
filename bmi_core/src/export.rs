//! Report delivery.
//!
//! Rendering is pure; handing the finished text to the user is the one
//! side effect in the system and lives behind `ReportSink`.

use crate::{Error, Result};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Delivers a rendered report as a named downloadable artifact
pub trait ReportSink {
    /// Deliver `contents` under `filename`, returning where it ended up
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<PathBuf>;
}

/// Writes reports as files into a directory
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a new file sink for the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportSink for FileSink {
    /// Atomically writes the report by:
    /// 1. Writing to a temp file in the target directory
    /// 2. Syncing to disk
    /// 3. Renaming over any existing report with the same name
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(Error::InvalidInput(format!(
                "report filename '{}' must be a plain file name",
                filename
            )));
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(contents.as_bytes())?;
        temp.flush()?;
        temp.as_file().sync_all()?;

        temp.persist(&path).map_err(|e| Error::Io(e.error))?;

        tracing::info!("Wrote report to {:?}", path);
        Ok(path)
    }
}

/// Keeps delivered reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub delivered: Vec<(String, String)>,
}

impl ReportSink for MemorySink {
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<PathBuf> {
        self.delivered.push((filename.to_string(), contents.to_string()));
        Ok(PathBuf::from(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_contents_unmodified() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(temp_dir.path());

        let contents = "\nBMI HEALTH REPORT\nonly. \n- Café au lait\n";
        let path = sink.deliver("BMI_Report_2026-02-01.txt", contents).unwrap();

        assert_eq!(path, temp_dir.path().join("BMI_Report_2026-02-01.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_file_sink_creates_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("reports").join("2026");
        let mut sink = FileSink::new(&nested);

        let path = sink.deliver("report.txt", "hello").unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_file_sink_overwrites_same_day_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(temp_dir.path());

        sink.deliver("report.txt", "first").unwrap();
        let path = sink.deliver("report.txt", "second").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
        // Only the report itself, no leftover temp files
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_sink_rejects_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(temp_dir.path());

        let result = sink.deliver("../escape.txt", "nope");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_memory_sink_records_deliveries() {
        let mut sink = MemorySink::default();
        sink.deliver("a.txt", "one").unwrap();
        sink.deliver("b.txt", "two").unwrap();

        assert_eq!(
            sink.delivered,
            vec![
                ("a.txt".to_string(), "one".to_string()),
                ("b.txt".to_string(), "two".to_string()),
            ]
        );
    }
}
