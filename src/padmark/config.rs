use crate::model::LayoutModel;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// 1.6em line height at a 16px base font.
const DEFAULT_LINE_HEIGHT: f64 = 25.6;
const DEFAULT_TOP_PADDING: f64 = 20.0;
const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 500;
// How long to let the print target settle before opening the dialog.
const DEFAULT_PRINT_SETTLE_MS: u64 = 250;
const DEFAULT_NOTE_KEY: &str = "noteMarkdown";
const DEFAULT_SCOPE_KEY: &str = "noteStorageScope";

/// Configuration for padmark. Hosts typically embed this verbatim; every
/// field has a default matching the reference stylesheet's metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PadmarkConfig {
    /// Pixel height of one text line in the edit surface.
    #[serde(default = "default_line_height")]
    pub line_height: f64,

    /// Pixels of padding above the first line.
    #[serde(default = "default_top_padding")]
    pub top_padding: f64,

    /// Debounce window for autosave, in milliseconds.
    #[serde(default = "default_autosave_delay_ms")]
    pub autosave_delay_ms: u64,

    /// Delay before invoking the print dialog after handing over the
    /// rendered document, in milliseconds.
    #[serde(default = "default_print_settle_ms")]
    pub print_settle_ms: u64,

    /// Re-center the viewport on the caret's line when leaving edit mode.
    /// When off, the host's natural scroll retention is relied on instead.
    #[serde(default = "default_recenter")]
    pub recenter_on_preview: bool,

    /// Storage key for the note content.
    #[serde(default = "default_note_key")]
    pub note_key: String,

    /// Storage key for the scope flag (always kept in the durable store).
    #[serde(default = "default_scope_key")]
    pub scope_key: String,
}

fn default_line_height() -> f64 {
    DEFAULT_LINE_HEIGHT
}

fn default_top_padding() -> f64 {
    DEFAULT_TOP_PADDING
}

fn default_autosave_delay_ms() -> u64 {
    DEFAULT_AUTOSAVE_DELAY_MS
}

fn default_print_settle_ms() -> u64 {
    DEFAULT_PRINT_SETTLE_MS
}

fn default_recenter() -> bool {
    true
}

fn default_note_key() -> String {
    DEFAULT_NOTE_KEY.to_string()
}

fn default_scope_key() -> String {
    DEFAULT_SCOPE_KEY.to_string()
}

impl Default for PadmarkConfig {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            top_padding: DEFAULT_TOP_PADDING,
            autosave_delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
            print_settle_ms: DEFAULT_PRINT_SETTLE_MS,
            recenter_on_preview: true,
            note_key: DEFAULT_NOTE_KEY.to_string(),
            scope_key: DEFAULT_SCOPE_KEY.to_string(),
        }
    }
}

impl PadmarkConfig {
    pub fn layout(&self) -> LayoutModel {
        LayoutModel {
            line_height: self.line_height,
            top_padding: self.top_padding,
        }
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }

    pub fn print_settle(&self) -> Duration {
        Duration::from_millis(self.print_settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PadmarkConfig::default();
        assert_eq!(config.line_height, 25.6);
        assert_eq!(config.top_padding, 20.0);
        assert_eq!(config.autosave_delay_ms, 500);
        assert!(config.recenter_on_preview);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PadmarkConfig =
            serde_json::from_str(r#"{"recenter_on_preview": false}"#).unwrap();
        assert!(!config.recenter_on_preview);
        assert_eq!(config.note_key, "noteMarkdown");
        assert_eq!(config.autosave_delay_ms, 500);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut config = PadmarkConfig::default();
        config.autosave_delay_ms = 750;
        config.note_key = "scratch".to_string();

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PadmarkConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_durations() {
        let config = PadmarkConfig::default();
        assert_eq!(config.autosave_delay(), Duration::from_millis(500));
        assert_eq!(config.print_settle(), Duration::from_millis(250));
    }
}
