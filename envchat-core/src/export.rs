//! Transcript export to a plain-text file

use crate::config::ExportConfig;
use envchat_session::Session;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the conversation is empty")]
    EmptyHistory,

    #[error("cannot expand export directory '{directory}': {reason}")]
    InvalidDirectory { directory: String, reason: String },

    #[error("failed to write transcript to {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes the session transcript to `<directory>/<file_name>`
#[derive(Debug, Clone)]
pub struct TranscriptExporter {
    directory: String,
    file_name: String,
}

impl TranscriptExporter {
    pub fn new(directory: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.directory.clone(), config.file_name.clone())
    }

    /// Destination path with `~` and `$VAR` expanded
    pub fn target_path(&self) -> Result<PathBuf, ExportError> {
        let directory =
            shellexpand::full(&self.directory).map_err(|e| ExportError::InvalidDirectory {
                directory: self.directory.clone(),
                reason: e.to_string(),
            })?;
        Ok(PathBuf::from(directory.as_ref()).join(&self.file_name))
    }

    /// Write the transcript, overwriting any previous export. UTF-8, no
    /// trailing metadata. Returns the path written.
    pub fn write(&self, session: &Session) -> Result<PathBuf, ExportError> {
        if session.history().is_empty() {
            return Err(ExportError::EmptyHistory);
        }
        let path = self.target_path()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, session.export_text()).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(
            path = %path.display(),
            messages = session.history().len(),
            "Exported chat transcript"
        );
        Ok(path)
    }
}
