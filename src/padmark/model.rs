use serde::{Deserialize, Serialize};

/// Where the note lives. The flag itself is always persisted durably, so the
/// choice survives sessions even though ephemeral content does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageScope {
    Durable,
    Ephemeral,
}

impl StorageScope {
    pub fn inverse(self) -> Self {
        match self {
            StorageScope::Durable => StorageScope::Ephemeral,
            StorageScope::Ephemeral => StorageScope::Durable,
        }
    }

    /// Flag value as stored under the scope key.
    pub fn as_flag(self) -> &'static str {
        match self {
            StorageScope::Durable => "durable",
            StorageScope::Ephemeral => "ephemeral",
        }
    }

    /// Parse a stored flag. Unknown values fall back to Durable so a
    /// corrupted flag never strands content in the session store.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "ephemeral" => StorageScope::Ephemeral,
            _ => StorageScope::Durable,
        }
    }
}

/// Which surface is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Editing,
    Previewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn inverse(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Fixed layout metrics of the text surfaces. These must match the rendered
/// font metrics or position mapping silently degrades to approximate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutModel {
    /// Pixel height of one text line.
    pub line_height: f64,
    /// Pixels above the first line.
    pub top_padding: f64,
}

/// Carries a caret position across a mode transition. Created at the moment
/// of the transition, consumed when the opposite view is positioned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorAnchor {
    /// Character offset into the note text.
    pub offset: usize,
    /// Derived vertical pixel coordinate.
    pub y: f64,
}

/// The single note. The sole unit of persistence; at most one per session.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub scope: StorageScope,
}

impl Document {
    pub fn new(text: String, scope: StorageScope) -> Self {
        Self { text, scope }
    }

    /// True when there is anything worth exporting.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_inverse_round_trips() {
        assert_eq!(StorageScope::Durable.inverse(), StorageScope::Ephemeral);
        assert_eq!(StorageScope::Durable.inverse().inverse(), StorageScope::Durable);
    }

    #[test]
    fn test_scope_flag_round_trip() {
        for scope in [StorageScope::Durable, StorageScope::Ephemeral] {
            assert_eq!(StorageScope::from_flag(scope.as_flag()), scope);
        }
    }

    #[test]
    fn test_unknown_flag_defaults_to_durable() {
        assert_eq!(StorageScope::from_flag("garbage"), StorageScope::Durable);
        assert_eq!(StorageScope::from_flag(""), StorageScope::Durable);
    }

    #[test]
    fn test_has_content_ignores_whitespace() {
        let doc = Document::new("   \n\t".to_string(), StorageScope::Durable);
        assert!(!doc.has_content());
        let doc = Document::new("note".to_string(), StorageScope::Durable);
        assert!(doc.has_content());
    }
}
