//! [`DocumentHost`] backed by the browser window.

use portfolio::theme::DARK_MARKER_CLASS;
use portfolio::{DocumentHost, Result, ShellError, Theme};
use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

/// Talks to `localStorage`, `document.documentElement` and element scrolling.
///
/// The window is looked up on every call; the host itself only holds the
/// storage key.
#[derive(Clone, Debug)]
pub struct BrowserHost {
    storage_key: String,
}

/// Best-effort text of a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl BrowserHost {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    fn window() -> Result<Window> {
        web_sys::window().ok_or_else(|| ShellError::DocumentUnavailable("no window".into()))
    }

    fn document() -> Result<Document> {
        Self::window()?
            .document()
            .ok_or_else(|| ShellError::DocumentUnavailable("window has no document".into()))
    }

    fn storage() -> Result<Storage> {
        Self::window()?
            .local_storage()
            .map_err(|err| ShellError::StorageUnavailable(describe(&err)))?
            .ok_or_else(|| ShellError::StorageUnavailable("localStorage is disabled".into()))
    }
}

impl DocumentHost for BrowserHost {
    fn load_theme(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(&self.storage_key)
            .map_err(|err| ShellError::StorageUnavailable(describe(&err)))
    }

    fn store_theme(&self, theme: Theme) -> Result<()> {
        Self::storage()?
            .set_item(&self.storage_key, theme.as_str())
            .map_err(|err| ShellError::StorageWrite(describe(&err)))
    }

    fn apply_theme(&self, theme: Theme) -> Result<()> {
        let root = Self::document()?
            .document_element()
            .ok_or_else(|| ShellError::DocumentUnavailable("document has no root element".into()))?;
        root.class_list()
            .toggle_with_force(DARK_MARKER_CLASS, theme.is_dark())
            .map(|_| ())
            .map_err(|err| ShellError::DocumentUnavailable(describe(&err)))
    }

    fn scroll_to(&self, anchor: &str) -> Result<bool> {
        let Some(target) = Self::document()?.get_element_by_id(anchor) else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }

    fn current_year(&self) -> Option<u32> {
        Some(js_sys::Date::new_0().get_full_year())
    }
}
