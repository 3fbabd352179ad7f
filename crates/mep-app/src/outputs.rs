//! Output directory management.

use std::fs;
use std::path::{Path, PathBuf};

use mep_core::Uid;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Directory-backed store for a run's output artifacts: one XML file per
/// network plus the aggregate JSON documents.
#[derive(Debug, Clone)]
pub struct OutputStore {
    root_dir: PathBuf,
}

impl OutputStore {
    pub fn new(root_dir: PathBuf) -> AppResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Default location: `.meptrace/out` next to the project file.
    pub fn for_project(project_path: &Path) -> AppResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| AppError::InvalidOutputPath {
                path: project_path.to_path_buf(),
            })?;
        Self::new(project_dir.join(".meptrace").join("out"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Write one network's XML dump as `<network-uid>.xml`.
    pub fn write_network_xml(&self, network_uid: Uid, xml: &str) -> AppResult<PathBuf> {
        let path = self.root_dir.join(format!("{}.xml", network_uid));
        fs::write(&path, xml)?;
        Ok(path)
    }

    /// Write the combined three-branch document as `combined.json`.
    /// Returns the byte length written.
    pub fn write_combined(&self, value: &Value) -> AppResult<usize> {
        self.write_json("combined.json", value)
    }

    /// Write the per-network aggregate as `jsonData.json`.
    /// Returns the byte length written.
    pub fn write_json_data(&self, value: &Value) -> AppResult<usize> {
        self.write_json("jsonData.json", value)
    }

    fn write_json(&self, file_name: &str, value: &Value) -> AppResult<usize> {
        let content = serde_json::to_string_pretty(value).map_err(|e| {
            AppError::Render(e.to_string())
        })?;
        fs::write(self.root_dir.join(file_name), &content)?;
        Ok(content.len())
    }
}
