use crate::editor::Editor;
use crate::markdown::{StyledRow, render_document};
use crate::store::Entry;
use crate::ui::style::Theme;
use crate::ui::viewport::Viewport;
use crate::ui::{FOOTER_ROWS, VIEWER_HEADER_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
}

/// What a committed edit is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// A new entry, with the title given on the command line if any.
    New { title: Option<String> },
    /// An existing entry as it was when editing started.
    Existing(Entry),
}

impl EditTarget {
    /// Label for the status bar.
    pub fn label(&self) -> &str {
        match self {
            Self::New { title } => title.as_deref().unwrap_or("New entry"),
            Self::Existing(entry) => &entry.title,
        }
    }
}

#[derive(Debug)]
pub struct EditSession {
    pub editor: Editor,
    pub target: EditTarget,
}

impl EditSession {
    pub fn new(editor: Editor, target: EditTarget) -> Self {
        Self { editor, target }
    }
}

/// A read-only entry on screen.
///
/// The content is laid out into display rows for the current width; the
/// viewport scrolls over those rows.
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub entry: Entry,
    pub lines: Vec<String>,
    pub rows: Vec<StyledRow>,
    pub viewport: Viewport,
    width: usize,
}

impl ViewerState {
    pub fn new(entry: Entry, width: usize, height: usize) -> Self {
        let lines: Vec<String> = entry.content.split('\n').map(String::from).collect();
        let rows = render_document(&lines, width);
        let viewport = Viewport::new(height, rows.len());
        Self {
            entry,
            lines,
            rows,
            viewport,
            width,
        }
    }

    /// Re-wrap for a new width if it changed, then fit the viewport height.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width {
            self.width = width;
            self.rows = render_document(&self.lines, width);
            self.viewport.set_total_lines(self.rows.len());
        }
        self.viewport.resize(height);
    }

    /// Rows currently inside the viewport.
    pub fn visible_rows(&self) -> &[StyledRow] {
        &self.rows[self.viewport.visible_range()]
    }
}

#[derive(Debug, Default)]
pub enum Screen {
    Edit(EditSession),
    View(ViewerState),
    #[default]
    Closed,
}

/// A commit waiting to be written by the effects layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub target: EditTarget,
    pub content: String,
}

/// The complete application state.
#[derive(Debug)]
pub struct Model {
    pub screen: Screen,
    pub theme: Theme,
    /// Terminal size as (width, height)
    pub size: (u16, u16),
    pub pending_save: Option<PendingSave>,
    pub should_quit: bool,
    /// Printed after the terminal is restored
    pub exit_message: Option<String>,
    toast: Option<Toast>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            screen: Screen::Closed,
            theme: Theme::default(),
            size: (80, 24),
            pending_save: None,
            should_quit: false,
            exit_message: None,
            toast: None,
        }
    }
}

impl Model {
    pub fn new(screen: Screen, size: (u16, u16)) -> Self {
        let mut model = Self {
            screen,
            size,
            ..Self::default()
        };
        let (width, height) = (model.viewer_width(), model.viewer_height());
        if let Screen::View(viewer) = &mut model.screen {
            viewer.resize(width, height);
        }
        model
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Text area available to the editor as (width, height).
    pub fn editor_area(&self) -> (usize, usize) {
        let (w, h) = self.size;
        (usize::from(w), usize::from(h.saturating_sub(FOOTER_ROWS)))
    }

    /// The editor cannot lay anything out at the current size.
    pub fn editor_has_no_room(&self) -> bool {
        let (w, h) = self.editor_area();
        w == 0 || h == 0
    }

    /// Columns available to the viewer.
    pub fn viewer_width(&self) -> usize {
        usize::from(self.size.0)
    }

    /// Content rows available to the viewer.
    pub fn viewer_height(&self) -> usize {
        usize::from(
            self.size
                .1
                .saturating_sub(FOOTER_ROWS + VIEWER_HEADER_ROWS),
        )
    }

    /// Show `entry` read-only, replacing whatever was on screen.
    pub fn open_viewer(&mut self, entry: Entry) {
        self.screen = Screen::View(ViewerState::new(
            entry,
            self.viewer_width(),
            self.viewer_height(),
        ));
    }

    /// Start editing `entry` with its current content.
    pub fn open_editor(&mut self, entry: Entry) {
        let editor = Editor::open(Some(&entry.content));
        self.screen = Screen::Edit(EditSession::new(editor, EditTarget::Existing(entry)));
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
        });
    }

    pub(super) fn clear_toast(&mut self) {
        self.toast = None;
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}
