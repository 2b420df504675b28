//! Presentation shell state: theme, active section and the startup gate.
//!
//! [`Shell`] is the one state holder of the page. It is created by the
//! entry point, handed to [`crate::components::PortfolioShell`], and exposes
//! exactly two user operations: [`Shell::navigate`] and
//! [`Shell::toggle_theme`]. Child components only ever see a read-only theme
//! signal and callbacks wrapping those operations.
//!
//! Everything the shell needs from the outside world (storage, the document
//! root, scrolling) goes through [`DocumentHost`], so the same shell runs in
//! the browser and in native tests.
//!
//! ```rust
//! use std::sync::Arc;
//! use portfolio::{MemoryHost, Shell, Theme, types::SectionId};
//!
//! let host = Arc::new(MemoryHost::new().with_anchors(SectionId::ALL));
//! let shell = Shell::new(host.clone(), Theme::Dark);
//!
//! assert_eq!(shell.initialize(), Theme::Dark);
//! assert_eq!(shell.toggle_theme(), Theme::Light);
//! assert_eq!(host.stored_theme().as_deref(), Some("light"));
//! assert!(shell.navigate(SectionId::Contact));
//! ```

use std::sync::Arc;

use leptos::prelude::*;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::theme::Theme;
use crate::types::SectionId;

/// Environment seam of the shell.
///
/// Implementations must be cheap to call from click handlers and must not
/// panic; failures are reported as [`crate::ShellError`] and the shell
/// decides how to degrade.
pub trait DocumentHost: Send + Sync {
    /// Read the persisted theme preference, `Ok(None)` when nothing is stored.
    fn load_theme(&self) -> Result<Option<String>>;

    /// Persist the theme preference.
    fn store_theme(&self, theme: Theme) -> Result<()>;

    /// Put the dark marker class on the document root iff `theme` is dark.
    fn apply_theme(&self, theme: Theme) -> Result<()>;

    /// Smooth-scroll the element with id `anchor` into view.
    ///
    /// Returns `Ok(false)` when no such element exists.
    fn scroll_to(&self, anchor: &str) -> Result<bool>;

    /// Calendar year for the footer, if the host knows it.
    fn current_year(&self) -> Option<u32> {
        None
    }
}

/// Reactive state of the page plus the host it acts on.
#[derive(Clone)]
pub struct Shell {
    theme: RwSignal<Theme>,
    active_section: RwSignal<SectionId>,
    initialized: RwSignal<bool>,
    year: RwSignal<Option<u32>>,
    default_theme: Theme,
    host: Arc<dyn DocumentHost>,
}

impl Shell {
    /// Create an uninitialized shell. Nothing renders until
    /// [`Shell::initialize`] runs.
    pub fn new(host: Arc<dyn DocumentHost>, default_theme: Theme) -> Self {
        Self {
            theme: RwSignal::new(default_theme),
            active_section: RwSignal::new(SectionId::Home),
            initialized: RwSignal::new(false),
            year: RwSignal::new(None),
            default_theme,
            host,
        }
    }

    /// Deferred startup step: resolve the persisted theme, apply it to the
    /// document and open the render gate.
    ///
    /// Calling it again is a no-op that returns the current theme.
    pub fn initialize(&self) -> Theme {
        if self.initialized.get_untracked() {
            debug!("shell already initialized");
            return self.theme.get_untracked();
        }

        let stored = self.host.load_theme().unwrap_or_else(|err| {
            warn!(%err, "theme preference unavailable, using default");
            None
        });
        let theme = Theme::resolve(stored.as_deref(), self.default_theme);

        self.theme.set(theme);
        if let Err(err) = self.host.apply_theme(theme) {
            warn!(%err, %theme, "could not apply theme marker");
        }
        self.year.set(self.host.current_year());
        self.initialized.set(true);

        debug!(%theme, persisted = stored.is_some(), "shell initialized");
        theme
    }

    /// Flip between dark and light, persist the choice and re-apply the
    /// document marker. Returns the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);

        if let Err(err) = self.host.store_theme(next) {
            warn!(%err, theme = %next, "theme preference not persisted");
        }
        if let Err(err) = self.host.apply_theme(next) {
            warn!(%err, theme = %next, "could not apply theme marker");
        }

        info!(theme = %next, "theme toggled");
        next
    }

    /// Smooth-scroll to `section` and mark it active.
    ///
    /// A missing anchor or a host failure leaves the active section untouched
    /// and returns `false`; nothing is raised.
    pub fn navigate(&self, section: SectionId) -> bool {
        match self.host.scroll_to(section.anchor()) {
            Ok(true) => {
                self.active_section.set(section);
                debug!(%section, "navigated");
                true
            }
            Ok(false) => {
                debug!(%section, "scroll target missing, skipping");
                false
            }
            Err(err) => {
                warn!(%err, %section, "scroll failed");
                false
            }
        }
    }

    /// Read-only theme signal for child components.
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    /// Read-only active section signal (cosmetic nav highlight).
    pub fn active_section(&self) -> Signal<SectionId> {
        self.active_section.into()
    }

    /// Footer year captured at startup.
    pub fn year(&self) -> Signal<Option<u32>> {
        self.year.into()
    }

    /// Tracked read of the render gate.
    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Untracked snapshot of the current theme.
    pub fn current_theme(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// Untracked snapshot of the active section.
    pub fn current_section(&self) -> SectionId {
        self.active_section.get_untracked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use pretty_assertions::assert_eq;

    fn shell_with(host: MemoryHost) -> (Shell, Arc<MemoryHost>) {
        let host = Arc::new(host);
        (Shell::new(host.clone(), Theme::Dark), host)
    }

    #[test]
    fn absent_preference_starts_dark() {
        let (shell, host) = shell_with(MemoryHost::new());
        assert!(!shell.initialized.get_untracked());

        assert_eq!(shell.initialize(), Theme::Dark);
        assert!(shell.initialized.get_untracked());
        assert!(host.has_dark_marker());
        // startup never writes storage
        assert_eq!(host.stored_theme(), None);
    }

    #[test]
    fn stored_light_preference_is_restored() {
        let (shell, host) = shell_with(MemoryHost::new().with_stored_theme("light"));

        assert_eq!(shell.initialize(), Theme::Light);
        assert_eq!(shell.current_theme(), Theme::Light);
        assert!(!host.has_dark_marker());
    }

    #[test]
    fn unavailable_storage_falls_back_to_default() {
        let (shell, host) = shell_with(MemoryHost::new().with_stored_theme("light").without_storage());

        assert_eq!(shell.initialize(), Theme::Dark);
        assert!(host.has_dark_marker());
    }

    #[test]
    fn garbage_preference_falls_back_to_default() {
        let (shell, _host) = shell_with(MemoryHost::new().with_stored_theme("neon"));
        assert_eq!(shell.initialize(), Theme::Dark);
    }

    #[test]
    fn second_initialize_is_a_noop() {
        let (shell, host) = shell_with(MemoryHost::new());
        shell.initialize();
        shell.toggle_theme();

        host.set_stored_theme("dark");
        assert_eq!(shell.initialize(), Theme::Light);
    }

    #[test]
    fn toggle_from_dark_persists_light_and_drops_marker() {
        let (shell, host) = shell_with(MemoryHost::new());
        shell.initialize();

        assert_eq!(shell.toggle_theme(), Theme::Light);
        assert_eq!(shell.current_theme(), Theme::Light);
        assert_eq!(host.stored_theme().as_deref(), Some("light"));
        assert!(!host.has_dark_marker());
    }

    #[test]
    fn toggling_twice_restores_original_state() {
        let (shell, host) = shell_with(MemoryHost::new().with_stored_theme("light"));
        shell.initialize();

        shell.toggle_theme();
        shell.toggle_theme();

        assert_eq!(shell.current_theme(), Theme::Light);
        assert_eq!(host.stored_theme().as_deref(), Some("light"));
        assert!(!host.has_dark_marker());
    }

    #[test]
    fn toggle_survives_storage_failure() {
        let (shell, host) = shell_with(MemoryHost::new().without_storage());
        shell.initialize();

        assert_eq!(shell.toggle_theme(), Theme::Light);
        assert!(!host.has_dark_marker());
        assert_eq!(host.stored_theme(), None);
    }

    #[test]
    fn navigate_contact_scrolls_and_marks_active() {
        let (shell, host) = shell_with(MemoryHost::new().with_anchors(SectionId::ALL));
        shell.initialize();

        assert!(shell.navigate(SectionId::Contact));
        assert_eq!(shell.current_section(), SectionId::Contact);
        assert_eq!(host.scroll_log(), vec!["contact".to_string()]);
    }

    #[test]
    fn navigate_without_anchors_is_silent() {
        let (shell, host) = shell_with(MemoryHost::new());
        shell.initialize();

        for section in SectionId::ALL {
            assert!(!shell.navigate(section));
        }
        assert_eq!(shell.current_section(), SectionId::Home);
        assert!(host.scroll_log().is_empty());
    }

    #[test]
    fn year_is_captured_at_startup() {
        let (shell, _host) = shell_with(MemoryHost::new().with_year(2025));
        assert_eq!(shell.year.get_untracked(), None);
        shell.initialize();
        assert_eq!(shell.year.get_untracked(), Some(2025));
    }
}
