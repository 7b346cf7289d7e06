//! # App Facade
//!
//! The facade is a **thin wiring layer** over the controller, storage, and
//! the sinks — the single entry point for all host events, regardless of the
//! embedding (webview, tauri shell, TUI). It holds no business logic of its
//! own: position math lives in `cursor`, transition rules in `controller`,
//! persistence routing in `store`, debouncing in `autosave`.
//!
//! ## Event surface
//!
//! Hosts funnel their raw events into these calls:
//!
//! - `on_double_click(y, target)` — double-activation on the page
//! - `on_blur()` / `on_pointer_down(region)` — leaving the edit surface
//! - `on_input(now)` — every keystroke
//! - `on_frame()` — the next paint after any call, so armed positioning runs
//!   against settled layout
//! - `tick(now)` — periodic driving of the debounce and deferred print
//!
//! plus the direct actions: `copy`, `export`, `toggle_theme`,
//! `toggle_storage_scope`.
//!
//! Export and copy always act on the live in-memory buffer and force-flush
//! any pending autosave first, so they can never observe a stale debounce
//! window.

use crate::autosave::AutosaveScheduler;
use crate::clipboard::Clipboard;
use crate::config::PadmarkConfig;
use crate::controller::{ControlRegion, Controller, ViewHost};
use crate::error::{PadmarkError, Result};
use crate::export::{self, ExportFormat, ExportSink};
use crate::model::{Document, StorageScope, Theme, ViewMode};
use crate::render;
use crate::store::scoped::ScopedStore;
use crate::store::KeyValueStore;
use crate::theme::ThemeToggle;
use chrono::Utc;
use std::time::{Duration, Instant};

/// A print-dialog invocation waiting for the rendered document to settle.
struct PendingPrint {
    html: String,
    due: Instant,
}

pub struct NoteApp<D: KeyValueStore, E: KeyValueStore, H: ViewHost> {
    store: ScopedStore<D, E>,
    controller: Controller,
    autosave: AutosaveScheduler,
    theme: ThemeToggle,
    host: H,
    clipboard: Box<dyn Clipboard>,
    sink: Box<dyn ExportSink>,
    print_settle: Duration,
    pending_print: Option<PendingPrint>,
}

impl<D: KeyValueStore, E: KeyValueStore, H: ViewHost> NoteApp<D, E, H> {
    /// Wire everything up and render the initial preview. Storage being
    /// unreachable here is fatal: the app refuses to start rather than run
    /// without persistence.
    pub fn start(
        durable: D,
        ephemeral: E,
        mut host: H,
        clipboard: Box<dyn Clipboard>,
        sink: Box<dyn ExportSink>,
        config: &PadmarkConfig,
    ) -> Result<Self> {
        let store = ScopedStore::open(durable, ephemeral, config)
            .map_err(|e| PadmarkError::Init(format!("storage unavailable: {}", e)))?;
        let text = store
            .load_note()
            .map_err(|e| PadmarkError::Init(format!("could not load note: {}", e)))?;

        host.show_preview(&render::render(&text));
        host.set_export_controls_visible(!text.trim().is_empty());
        host.set_scope_indicator(store.scope());

        let theme = ThemeToggle::default();
        host.apply_theme(theme.current());

        let controller = Controller::new(
            Document::new(text, store.scope()),
            config.layout(),
            config.recenter_on_preview,
        );

        Ok(Self {
            store,
            controller,
            autosave: AutosaveScheduler::new(config.autosave_delay()),
            theme,
            host,
            clipboard,
            sink,
            print_settle: config.print_settle(),
            pending_print: None,
        })
    }

    pub fn mode(&self) -> ViewMode {
        self.controller.mode()
    }

    pub fn text(&self) -> &str {
        self.controller.text()
    }

    pub fn scope(&self) -> StorageScope {
        self.store.scope()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // --- Events ---

    pub fn on_double_click(&mut self, y: f64, target: ControlRegion) {
        self.controller.enter_edit(y, target, &mut self.host);
    }

    pub fn on_blur(&mut self) -> Result<()> {
        let flushed = self.controller.exit_edit(&mut self.host);
        self.apply_exit_flush(flushed)
    }

    pub fn on_pointer_down(&mut self, region: ControlRegion) -> Result<()> {
        let flushed = self.controller.pointer_down(region, &mut self.host);
        self.apply_exit_flush(flushed)
    }

    pub fn on_input(&mut self, now: Instant) {
        let text = self.controller.sync_text(&self.host);
        self.autosave.on_change(&text, now);
    }

    pub fn on_frame(&mut self) {
        self.controller.on_frame(&mut self.host);
    }

    /// Drive time-based work: the autosave debounce and any deferred print.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if let Some(text) = self.autosave.poll(now) {
            self.persist(&text)?;
        }

        if self.pending_print.as_ref().is_some_and(|p| p.due <= now) {
            if let Some(print) = self.pending_print.take() {
                self.sink.print(&print.html)?;
            }
        }

        Ok(())
    }

    // --- Actions ---

    /// Copy the note to the clipboard. Acts on the live buffer.
    pub fn copy(&mut self) -> Result<()> {
        self.flush_pending()?;
        self.clipboard.copy(self.controller.text())
    }

    /// Export the note. Txt and Md carry the raw text; Html and Pdf build a
    /// styled document (or pass a complete HTML document through verbatim).
    /// Pdf hands the document to the sink's print dialog after the settle
    /// delay, driven by [`tick`](NoteApp::tick).
    pub fn export(&mut self, format: ExportFormat, now: Instant) -> Result<()> {
        self.flush_pending()?;
        let text = self.controller.text().to_string();

        match format {
            ExportFormat::Txt | ExportFormat::Md => {
                let filename = export::export_filename(format, Utc::now());
                self.sink.download(&filename, format.mime(), &text)
            }
            ExportFormat::Html => {
                let filename = export::export_filename(format, Utc::now());
                let document = export::build_document(&text);
                self.sink.download(&filename, format.mime(), &document)
            }
            ExportFormat::Pdf => {
                self.pending_print = Some(PendingPrint {
                    html: export::build_document(&text),
                    due: now + self.print_settle,
                });
                Ok(())
            }
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        self.host.apply_theme(theme);
        theme
    }

    /// Flip between durable and ephemeral storage, migrating the note.
    pub fn toggle_storage_scope(&mut self) -> Result<StorageScope> {
        let scope = self.store.toggle_scope()?;
        self.controller.document_mut().scope = scope;
        self.host.set_scope_indicator(scope);
        Ok(scope)
    }

    // --- Internals ---

    /// Exit-edit flushes bypass the debounce entirely.
    fn apply_exit_flush(&mut self, flushed: Option<String>) -> Result<()> {
        if let Some(text) = flushed {
            self.autosave.cancel();
            self.persist(&text)?;
        }
        Ok(())
    }

    /// Force any pending debounced save through before an action that reads
    /// persisted state.
    fn flush_pending(&mut self) -> Result<()> {
        if let Some(text) = self.autosave.take_now() {
            self.persist(&text)?;
        }
        Ok(())
    }

    /// Every flush also refreshes export-controls visibility.
    fn persist(&mut self, text: &str) -> Result<()> {
        self.store.save_note(text)?;
        self.host
            .set_export_controls_visible(!text.trim().is_empty());
        Ok(())
    }
}
