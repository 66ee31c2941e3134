//! Application state using Sycamore signals
//!
//! Reactive state for the two feature panels plus the shell-level theme
//! and tab selection. Panel state is created by the shell and handed down,
//! so completions that land after a tab switch still find live signals.

use sycamore::prelude::*;
use transbox_core::{LanguagePair, OutputFormat};

use crate::download::DownloadFile;

/// Color scheme toggled from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Light backgrounds, dark text
    Light,
    /// Dark backgrounds, light text
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class on the app root; the stylesheet keys its variables off it.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

/// Which feature panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    /// Text translation
    Translate,
    /// File conversion
    Convert,
}

impl Default for ActiveTab {
    fn default() -> Self {
        Self::Translate
    }
}

/// Status of a panel's mock operation
#[derive(Debug, Clone, PartialEq)]
pub enum PanelStatus {
    /// Nothing in flight, no failure to report
    Idle,
    /// The simulated call is in flight
    Busy,
    /// The last submission failed; the message is shown inline
    Failed(String),
}

impl Default for PanelStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Translation panel state
#[derive(Clone, Copy)]
pub struct TranslationState {
    /// Selected source/target languages
    pub languages: Signal<LanguagePair>,

    /// Text typed into the input box
    pub input: Signal<String>,

    /// Last successful translation, empty until one lands
    pub output: Signal<String>,

    /// Operation status
    pub status: Signal<PanelStatus>,

    /// Token invalidating in-flight completions
    pub generation: Signal<u32>,
}

impl TranslationState {
    /// Create translation state with the form's initial values
    pub fn new() -> Self {
        Self {
            languages: create_signal(LanguagePair::default()),
            input: create_signal(String::new()),
            output: create_signal(String::new()),
            status: create_signal(PanelStatus::Idle),
            generation: create_signal(0),
        }
    }

    /// Exchange the languages and move the output back into the input box.
    ///
    /// Any in-flight translation is invalidated.
    pub fn swap_languages(&self) {
        self.bump_generation();
        self.languages.set(self.languages.get().swapped());
        self.input.set(self.output.get_clone());
        self.output.set(String::new());
        self.status.set(PanelStatus::Idle);
    }

    /// True while a translation is in flight.
    pub fn is_busy(&self) -> bool {
        self.status.with(|status| matches!(status, PanelStatus::Busy))
    }

    /// True when the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.input.with(|text| !text.trim().is_empty())
    }

    /// Message for the error banner, if the last submission failed.
    pub fn error_message(&self) -> Option<String> {
        self.status.with(|status| match status {
            PanelStatus::Failed(message) => Some(message.clone()),
            _ => None,
        })
    }

    /// Enter the busy state, clearing any previous failure.
    pub fn begin(&self) {
        self.status.set(PanelStatus::Busy);
    }

    /// Apply a successful translation.
    pub fn complete(&self, text: String) {
        self.output.set(text);
        self.status.set(PanelStatus::Idle);
    }

    /// Record a failure and clear the stale output.
    pub fn fail(&self, message: String) {
        self.output.set(String::new());
        self.status.set(PanelStatus::Failed(message));
    }

    /// Advance the generation token, returning the new value.
    pub fn bump_generation(&self) -> u32 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    /// True when a completion holding `token` is still the latest submission.
    pub fn accepts(&self, token: u32) -> bool {
        self.generation.get() == token
    }
}

impl Default for TranslationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Conversion panel state
#[derive(Clone, Copy)]
pub struct ConversionState {
    /// Name of the picked file, `None` before the first pick
    pub file_name: Signal<Option<String>>,

    /// Selected output format
    pub format: Signal<OutputFormat>,

    /// Operation status
    pub status: Signal<PanelStatus>,

    /// Download handle for the last successful conversion
    pub download: Signal<Option<DownloadFile>>,

    /// Token invalidating in-flight completions
    pub generation: Signal<u32>,
}

impl ConversionState {
    /// Create conversion state with the form's initial values
    pub fn new() -> Self {
        Self {
            file_name: create_signal(None),
            format: create_signal(OutputFormat::default()),
            status: create_signal(PanelStatus::Idle),
            download: create_signal(None),
            generation: create_signal(0),
        }
    }

    /// Replace the picked file, clearing the previous error and download.
    ///
    /// Any in-flight conversion is invalidated.
    pub fn select_file(&self, name: String) {
        self.bump_generation();
        self.file_name.set(Some(name));
        self.download.set(None);
        self.status.set(PanelStatus::Idle);
    }

    /// True while a conversion is in flight.
    pub fn is_busy(&self) -> bool {
        self.status.with(|status| matches!(status, PanelStatus::Busy))
    }

    /// True when the convert control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.file_name.with(|name| name.is_some())
    }

    /// Message for the error banner, if the last submission failed.
    pub fn error_message(&self) -> Option<String> {
        self.status.with(|status| match status {
            PanelStatus::Failed(message) => Some(message.clone()),
            _ => None,
        })
    }

    /// Enter the busy state, dropping the previous download and failure.
    ///
    /// Dropping the old download handle revokes its object URL before the
    /// replacement is created.
    pub fn begin(&self) {
        self.download.set(None);
        self.status.set(PanelStatus::Busy);
    }

    /// Expose a finished conversion for download.
    pub fn complete(&self, download: DownloadFile) {
        self.download.set(Some(download));
        self.status.set(PanelStatus::Idle);
    }

    /// Record a failure.
    pub fn fail(&self, message: String) {
        self.status.set(PanelStatus::Failed(message));
    }

    /// Advance the generation token, returning the new value.
    pub fn bump_generation(&self) -> u32 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    /// True when a completion holding `token` is still the latest submission.
    pub fn accepts(&self, token: u32) -> bool {
        self.generation.get() == token
    }
}

impl Default for ConversionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use sycamore::reactive::create_root;
    use transbox_core::Language;

    use super::*;

    #[test]
    fn test_submission_token_stays_current_while_busy() {
        let _ = create_root(|| {
            let state = TranslationState::new();
            let token = state.bump_generation();
            state.begin();

            assert!(state.accepts(token), "begin must not invalidate its own token");

            state.complete("done".to_string());
            assert!(!state.is_busy());
            assert_eq!(state.output.get_clone(), "done");
        });
    }

    #[test]
    fn test_resubmission_supersedes_the_previous_token() {
        let _ = create_root(|| {
            let state = TranslationState::new();
            let first = state.bump_generation();
            let second = state.bump_generation();

            assert!(!state.accepts(first), "an older token must be dropped");
            assert!(state.accepts(second), "the latest token must still apply");
        });
    }

    #[test]
    fn test_swap_invalidates_in_flight_translation() {
        let _ = create_root(|| {
            let state = TranslationState::new();
            state.input.set("Hello".to_string());
            let token = state.bump_generation();
            state.begin();

            state.swap_languages();

            assert!(!state.accepts(token), "swap must invalidate the in-flight token");
            assert!(!state.is_busy(), "an invalidating action must release the busy state");
        });
    }

    #[test]
    fn test_swap_moves_output_into_input() {
        let _ = create_root(|| {
            let state = TranslationState::new();
            state.input.set("Hello".to_string());
            state.output.set("你好".to_string());

            state.swap_languages();

            assert_eq!(state.languages.get().source, Language::Zh);
            assert_eq!(state.languages.get().target, Language::En);
            assert_eq!(state.input.get_clone(), "你好");
            assert_eq!(state.output.get_clone(), "");
        });
    }

    #[test]
    fn test_select_file_invalidates_in_flight_conversion() {
        let _ = create_root(|| {
            let state = ConversionState::new();
            state.select_file("report.png".to_string());
            let token = state.bump_generation();
            state.begin();

            state.select_file("notes.md".to_string());

            assert!(!state.accepts(token), "a new file must invalidate the in-flight token");
            assert!(!state.is_busy(), "an invalidating action must release the busy state");
            assert_eq!(state.file_name.get_clone().as_deref(), Some("notes.md"));
        });
    }

    #[test]
    fn test_failure_clears_translation_output() {
        let _ = create_root(|| {
            let state = TranslationState::new();
            state.output.set("stale".to_string());

            state.fail("翻译失败。请稍后再试。".to_string());

            assert_eq!(state.output.get_clone(), "");
            assert_eq!(state.error_message().as_deref(), Some("翻译失败。请稍后再试。"));
        });
    }
}
