//! In-memory [`DocumentHost`] for tests and static snapshots.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Result, ShellError};
use crate::shell::DocumentHost;
use crate::theme::Theme;
use crate::types::SectionId;

/// Host that keeps "storage", the document marker and scroll requests in
/// memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    stored: Mutex<Option<String>>,
    dark_marker: Mutex<bool>,
    scrolled: Mutex<Vec<String>>,
    anchors: Vec<String>,
    storage_disabled: bool,
    year: Option<u32>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the persisted preference.
    pub fn with_stored_theme(self, value: &str) -> Self {
        *lock(&self.stored) = Some(value.to_string());
        self
    }

    /// Make every storage call fail, like a browser with storage blocked.
    pub fn without_storage(mut self) -> Self {
        self.storage_disabled = true;
        self
    }

    /// Anchors that exist in the "document".
    pub fn with_anchors(mut self, sections: impl IntoIterator<Item = SectionId>) -> Self {
        self.anchors = sections.into_iter().map(|s| s.anchor().to_string()).collect();
        self
    }

    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Overwrite storage behind the shell's back.
    pub fn set_stored_theme(&self, value: &str) {
        *lock(&self.stored) = Some(value.to_string());
    }

    pub fn stored_theme(&self) -> Option<String> {
        lock(&self.stored).clone()
    }

    pub fn has_dark_marker(&self) -> bool {
        *lock(&self.dark_marker)
    }

    /// Anchors scrolled to, oldest first.
    pub fn scroll_log(&self) -> Vec<String> {
        lock(&self.scrolled).clone()
    }
}

impl DocumentHost for MemoryHost {
    fn load_theme(&self) -> Result<Option<String>> {
        if self.storage_disabled {
            return Err(ShellError::StorageUnavailable("storage disabled".into()));
        }
        Ok(lock(&self.stored).clone())
    }

    fn store_theme(&self, theme: Theme) -> Result<()> {
        if self.storage_disabled {
            return Err(ShellError::StorageWrite("storage disabled".into()));
        }
        *lock(&self.stored) = Some(theme.as_str().to_string());
        Ok(())
    }

    fn apply_theme(&self, theme: Theme) -> Result<()> {
        *lock(&self.dark_marker) = theme.is_dark();
        Ok(())
    }

    fn scroll_to(&self, anchor: &str) -> Result<bool> {
        if !self.anchors.iter().any(|a| a == anchor) {
            return Ok(false);
        }
        lock(&self.scrolled).push(anchor.to_string());
        Ok(true)
    }

    fn current_year(&self) -> Option<u32> {
        self.year
    }
}
