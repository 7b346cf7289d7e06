//! # View Transition Controller
//!
//! The state machine behind the edit/preview swap. The controller owns the
//! [`Document`] and the mode flag; the host owns the actual surfaces and is
//! reached through [`ViewHost`].
//!
//! ## Transitions
//!
//! - `Previewing → Editing` on a double-activation at a vertical position.
//!   The click's pixel Y is mapped to a character offset so the caret lands
//!   on the line the user aimed at.
//! - `Editing → Previewing` on blur or a click-away. The caret offset is
//!   mapped back to a pixel Y so the preview can be centered on the same
//!   line, despite the DOM structure changing under the cursor.
//!
//! Re-triggering a transition's gesture in its own target state is a no-op;
//! there are no self-transitions.
//!
//! ## The frame deferral
//!
//! Showing a surface invalidates layout, so caret placement and centering
//! must not happen in the same event. Transitions arm a [`CursorAnchor`] and
//! the host calls [`Controller::on_frame`] on its next paint, which consumes
//! the anchor and positions the now-settled view. This is a scheduling point,
//! not concurrency: everything runs on the one UI thread.

use crate::cursor;
use crate::model::{CursorAnchor, Document, LayoutModel, ViewMode};
use crate::render;

/// What the pointer landed on. Gestures over the designated controls never
/// drive mode transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRegion {
    EditSurface,
    ExportControls,
    ModeToggle,
    ThemeTrigger,
    /// Anywhere else on the page.
    Page,
}

/// Capabilities the controller needs from the host view. A host that cannot
/// bind its surfaces must fail its own construction with
/// [`PadmarkError::Init`](crate::error::PadmarkError::Init); every method
/// here is assumed infallible afterwards.
pub trait ViewHost {
    /// Hide the preview surface and show the edit surface.
    fn show_editor(&mut self);
    /// Hide the edit surface and show the preview surface with this HTML.
    fn show_preview(&mut self, html: &str);
    /// Focus the edit surface.
    fn focus_editor(&mut self);
    /// Place the caret at a character offset in the edit surface.
    fn set_caret(&mut self, offset: usize);
    /// Current caret offset in the edit surface.
    fn caret(&self) -> usize;
    /// Current text in the edit surface.
    fn editor_text(&self) -> String;
    /// Scroll so the given document Y coordinate is vertically centered.
    fn center_on(&mut self, y: f64);
    /// Show or hide the export controls.
    fn set_export_controls_visible(&mut self, visible: bool);
    /// Apply a theme to the page.
    fn apply_theme(&mut self, theme: crate::model::Theme);
    /// Reflect the active storage scope in the UI.
    fn set_scope_indicator(&mut self, scope: crate::model::StorageScope);
}

/// A positioning action armed by a transition, applied on the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    /// Focus the editor, place the caret, center the click position.
    FocusEditor(CursorAnchor),
    /// Center the preview on the caret's line.
    CenterPreview(CursorAnchor),
}

pub struct Controller {
    mode: ViewMode,
    doc: Document,
    layout: LayoutModel,
    recenter_on_preview: bool,
    pending: Option<Pending>,
}

impl Controller {
    /// Starts in `Previewing`; the caller renders the initial preview.
    pub fn new(doc: Document, layout: LayoutModel, recenter_on_preview: bool) -> Self {
        Self {
            mode: ViewMode::Previewing,
            doc,
            layout,
            recenter_on_preview,
            pending: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.doc.text
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Double-activation at document position `y`. Enters edit mode unless
    /// already editing or the gesture landed on the theme trigger.
    pub fn enter_edit<H: ViewHost>(&mut self, y: f64, target: ControlRegion, host: &mut H) {
        if self.mode == ViewMode::Editing || target == ControlRegion::ThemeTrigger {
            return;
        }

        host.show_editor();
        let offset = cursor::offset_from_y(y, &self.doc.text, &self.layout);
        self.pending = Some(Pending::FocusEditor(CursorAnchor { offset, y }));
        self.mode = ViewMode::Editing;
    }

    /// Loss of focus on the edit surface. Leaves edit mode and returns the
    /// text, which the caller must flush to storage immediately (the debounce
    /// does not apply to this transition).
    pub fn exit_edit<H: ViewHost>(&mut self, host: &mut H) -> Option<String> {
        if self.mode != ViewMode::Editing {
            return None;
        }

        let text = host.editor_text();
        let caret = host.caret();

        host.show_preview(&render::render(&text));

        if self.recenter_on_preview {
            let line = cursor::line_of_offset(&text, caret);
            let y = cursor::y_of_line(line, &self.layout);
            self.pending = Some(Pending::CenterPreview(CursorAnchor { offset: caret, y }));
        } else {
            self.pending = None;
        }

        self.doc.text = text.clone();
        self.mode = ViewMode::Previewing;
        Some(text)
    }

    /// Pointer-down routing for click-away hosts: anywhere outside the edit
    /// surface and the designated controls leaves edit mode.
    pub fn pointer_down<H: ViewHost>(&mut self, region: ControlRegion, host: &mut H) -> Option<String> {
        match region {
            ControlRegion::Page => self.exit_edit(host),
            ControlRegion::EditSurface
            | ControlRegion::ExportControls
            | ControlRegion::ModeToggle
            | ControlRegion::ThemeTrigger => None,
        }
    }

    /// Pull the current edit-surface text into the document. Called on every
    /// input event, before the autosave debounce is armed.
    pub fn sync_text<H: ViewHost>(&mut self, host: &H) -> String {
        let text = host.editor_text();
        self.doc.text = text.clone();
        text
    }

    /// Apply the armed positioning action. The host calls this on the next
    /// paint after a transition, once layout has settled.
    pub fn on_frame<H: ViewHost>(&mut self, host: &mut H) {
        match self.pending.take() {
            Some(Pending::FocusEditor(anchor)) => {
                host.focus_editor();
                host.set_caret(anchor.offset);
                host.center_on(anchor.y);
            }
            Some(Pending::CenterPreview(anchor)) => {
                host.center_on(anchor.y);
            }
            None => {}
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::ViewHost;
    use crate::model::{StorageScope, Theme};

    /// Records every host call for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub editor_visible: bool,
        pub preview_html: Option<String>,
        pub focused: bool,
        pub caret: usize,
        pub text: String,
        pub centered_on: Vec<f64>,
        pub export_controls_visible: bool,
        pub theme: Option<Theme>,
        pub scope: Option<StorageScope>,
    }

    impl ViewHost for RecordingHost {
        fn show_editor(&mut self) {
            self.editor_visible = true;
        }

        fn show_preview(&mut self, html: &str) {
            self.editor_visible = false;
            self.preview_html = Some(html.to_string());
        }

        fn focus_editor(&mut self) {
            self.focused = true;
        }

        fn set_caret(&mut self, offset: usize) {
            self.caret = offset;
        }

        fn caret(&self) -> usize {
            self.caret
        }

        fn editor_text(&self) -> String {
            self.text.clone()
        }

        fn center_on(&mut self, y: f64) {
            self.centered_on.push(y);
        }

        fn set_export_controls_visible(&mut self, visible: bool) {
            self.export_controls_visible = visible;
        }

        fn apply_theme(&mut self, theme: Theme) {
            self.theme = Some(theme);
        }

        fn set_scope_indicator(&mut self, scope: StorageScope) {
            self.scope = Some(scope);
        }
    }
}
