use std::fs;
use std::io;
use std::path::PathBuf;

use log::info;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Destination for exported text reports.
#[mockall::automock]
pub trait ReportStore {
    /// Persists `contents` under `file_name` and returns where it ended up.
    fn save(&self, file_name: &str, contents: &str) -> Result<PathBuf>;
}

pub struct FileReportStore {
    dir: PathBuf,
}

impl FileReportStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

pub fn create(dir: PathBuf) -> impl ReportStore {
    FileReportStore::new(dir)
}

impl ReportStore for FileReportStore {
    fn save(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        let write = |path: &PathBuf| -> io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)
        };
        write(&path).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        info!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}
