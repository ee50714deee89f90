use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use super::Project;
use crate::error::Result;

const PROJECT_FILE: &str = "project.json";
const PROJECT_TEMP_FILE: &str = "project.json.tmp";

impl Project {
    // =========================================================================
    // Save/Load
    // =========================================================================

    /// Save the project to a folder as `project.json`, stamping `saved_at`.
    ///
    /// The file is written to a temp path first and renamed into place.
    pub fn save_to(&mut self, folder: &Path) -> Result<PathBuf> {
        fs::create_dir_all(folder)?;

        let previous = self.saved_at.replace(Utc::now());
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(err) => {
                self.saved_at = previous;
                return Err(err.into());
            }
        };

        let path = folder.join(PROJECT_FILE);
        let tmp_path = folder.join(PROJECT_TEMP_FILE);
        fs::write(&tmp_path, json)?;
        if path.exists() {
            let _ = fs::remove_file(&path);
        }
        fs::rename(&tmp_path, &path)?;
        info!("saved project '{}' to {:?}", self.name, path);
        Ok(path)
    }

    /// Load a project from a folder
    pub fn load(folder: &Path) -> Result<Self> {
        let json = fs::read_to_string(folder.join(PROJECT_FILE))?;
        let mut project: Project = serde_json::from_str(&json)?;
        // Older files may carry a stale duration field.
        for clip in project.clips.iter_mut() {
            clip.duration = clip.end - clip.start;
        }
        Ok(project)
    }
}
