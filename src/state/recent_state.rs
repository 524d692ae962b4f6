//! Recently opened documents
//!
//! Persisted list shown in the recent documents view, most recent first.

use crate::error::{RecentError, RecentResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of recent documents to remember
pub const DEFAULT_MAX_RECENT: usize = 20;

/// A recently opened document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentDocument {
    /// File path
    pub path: PathBuf,

    /// When the document was last opened
    pub last_opened: chrono::DateTime<chrono::Utc>,

    /// Page count at last open
    pub n_pages: usize,
}

impl RecentDocument {
    /// Get display name (filename)
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    /// Get relative time since last opened
    pub fn relative_time(&self) -> String {
        let duration = chrono::Utc::now().signed_duration_since(self.last_opened);

        if duration.num_days() > 0 {
            format!("{} days ago", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{} hours ago", duration.num_hours())
        } else if duration.num_minutes() > 0 {
            format!("{} minutes ago", duration.num_minutes())
        } else {
            "Just now".to_string()
        }
    }
}

/// Recent documents list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentDocuments {
    entries: Vec<RecentDocument>,

    #[serde(skip, default = "default_max")]
    max_entries: usize,
}

fn default_max() -> usize {
    DEFAULT_MAX_RECENT
}

impl Default for RecentDocuments {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECENT)
    }
}

impl RecentDocuments {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Load from the default location, falling back to an empty list
    pub fn load(max_entries: usize) -> RecentResult<Self> {
        let mut recent = Self::load_from(&Self::storage_path()?)?;
        recent.set_max_entries(max_entries);
        Ok(recent)
    }

    /// Save to the default location
    pub fn save(&self) -> RecentResult<()> {
        self.save_to(&Self::storage_path()?)
    }

    /// Load from a specific file. A missing file yields an empty list.
    pub fn load_from(path: &Path) -> RecentResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| RecentError::LoadError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| RecentError::ParseError(e.to_string()))
    }

    /// Save to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> RecentResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RecentError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RecentError::SaveError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| RecentError::SaveError(e.to_string()))
    }

    fn storage_path() -> RecentResult<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join(crate::config::APP_ID).join("recent.json"))
            .ok_or(RecentError::DirectoryError)
    }

    /// Change the cap, trimming the oldest entries
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries;
        self.entries.truncate(max_entries);
    }

    /// Record an opened document, moving it to the front
    pub fn add(&mut self, path: PathBuf, n_pages: usize) {
        self.entries.retain(|r| r.path != path);
        self.entries.insert(
            0,
            RecentDocument {
                path,
                last_opened: chrono::Utc::now(),
                n_pages,
            },
        );
        self.entries.truncate(self.max_entries);
    }

    pub fn remove(&mut self, path: &Path) {
        self.entries.retain(|r| r.path != path);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[RecentDocument] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose files still exist
    pub fn existing(&self) -> Vec<&RecentDocument> {
        self.entries.iter().filter(|r| r.path.exists()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_moves_to_front() {
        let mut recent = RecentDocuments::default();
        recent.add(PathBuf::from("/a.pdf"), 1);
        recent.add(PathBuf::from("/b.pdf"), 2);
        recent.add(PathBuf::from("/a.pdf"), 3);

        let paths: Vec<_> = recent.entries().iter().map(|r| r.path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("/a.pdf"), PathBuf::from("/b.pdf")]);
        assert_eq!(recent.entries()[0].n_pages, 3);
    }

    #[test]
    fn test_add_respects_cap() {
        let mut recent = RecentDocuments::new(3);
        for i in 0..5 {
            recent.add(PathBuf::from(format!("/doc{}.pdf", i)), 1);
        }
        assert_eq!(recent.entries().len(), 3);
        assert_eq!(recent.entries()[0].path, PathBuf::from("/doc4.pdf"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut recent = RecentDocuments::default();
        recent.add(PathBuf::from("/a.pdf"), 1);
        recent.add(PathBuf::from("/b.pdf"), 1);
        recent.remove(Path::new("/a.pdf"));
        assert_eq!(recent.entries().len(), 1);
        recent.clear();
        assert!(recent.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("recent.json");

        let mut recent = RecentDocuments::default();
        recent.add(PathBuf::from("/a.pdf"), 12);
        recent.save_to(&file).unwrap();

        let loaded = RecentDocuments::load_from(&file).unwrap();
        assert_eq!(loaded.entries(), recent.entries());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = RecentDocuments::load_from(&dir.path().join("none.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("recent.json");
        std::fs::write(&file, "{ not json").unwrap();
        assert!(matches!(
            RecentDocuments::load_from(&file),
            Err(RecentError::ParseError(_))
        ));
    }

    #[test]
    fn test_existing_filters_missing() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("here.pdf");
        std::fs::write(&present, b"%PDF-1.4").unwrap();

        let mut recent = RecentDocuments::default();
        recent.add(present.clone(), 1);
        recent.add(dir.path().join("gone.pdf"), 1);

        let existing = recent.existing();
        assert_eq!(existing.len(), 1);
        assert_eq!(existing[0].path, present);
    }
}
