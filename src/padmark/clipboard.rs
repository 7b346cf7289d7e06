//! # Clipboard
//!
//! The host owns the real clipboard; the editor only needs a copy
//! capability. Copy failure is the one expected, recoverable fault in the
//! system, so the production wiring is a primary sink with a fallback.

use crate::error::{PadmarkError, Result};

/// Capability to place text on the system clipboard.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Tries a primary sink, and on failure a secondary one. Errors only when
/// both fail.
pub struct FallbackClipboard<P: Clipboard, S: Clipboard> {
    primary: P,
    secondary: S,
}

impl<P: Clipboard, S: Clipboard> FallbackClipboard<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: Clipboard, S: Clipboard> Clipboard for FallbackClipboard<P, S> {
    fn copy(&mut self, text: &str) -> Result<()> {
        match self.primary.copy(text) {
            Ok(()) => Ok(()),
            Err(primary_err) => self.secondary.copy(text).map_err(|fallback_err| {
                PadmarkError::Clipboard(format!(
                    "primary copy failed ({}), fallback failed ({})",
                    primary_err, fallback_err
                ))
            }),
        }
    }
}
