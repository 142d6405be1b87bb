use crate::app::Model;
use crate::app::model::{EditTarget, PendingSave, Screen, ToastLevel};
use crate::editor::{Key, KeyOutcome};
use crate::store::clean_content;

/// Shown when a new entry is abandoned or committed without content.
pub const NOT_ADDED: &str = "Entry not added (cancelled or empty content)";

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editor
    /// A key for the active edit session
    EditorKey(Key),

    // Viewer
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Go to beginning of entry
    GoToTop,
    /// Go to end of entry
    GoToBottom,
    /// Edit the entry being viewed
    EditEntry,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Leave the application, discarding any open edit
    Quit,
}

/// Pure state transition. Store writes happen afterwards in the effects layer.
pub fn update(mut model: Model, msg: Message) -> Model {
    if !matches!(msg, Message::Resize(..)) {
        model.clear_toast();
    }

    match msg {
        Message::EditorKey(key) => {
            let Screen::Edit(session) = &mut model.screen else {
                return model;
            };
            match session.editor.feed_key(key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Commit(text) => commit(&mut model, &text),
                KeyOutcome::Cancel => leave_editor(&mut model, ToastLevel::Info, "Edit discarded"),
            }
        }

        Message::ScrollUp(n) => {
            if let Screen::View(viewer) = &mut model.screen {
                viewer.viewport.scroll_up(n);
            }
        }
        Message::ScrollDown(n) => {
            if let Screen::View(viewer) = &mut model.screen {
                viewer.viewport.scroll_down(n);
            }
        }
        Message::PageUp => {
            if let Screen::View(viewer) = &mut model.screen {
                viewer.viewport.page_up();
            }
        }
        Message::PageDown => {
            if let Screen::View(viewer) = &mut model.screen {
                viewer.viewport.page_down();
            }
        }
        Message::GoToTop => {
            if let Screen::View(viewer) = &mut model.screen {
                viewer.viewport.go_to_top();
            }
        }
        Message::GoToBottom => {
            if let Screen::View(viewer) = &mut model.screen {
                viewer.viewport.go_to_bottom();
            }
        }
        Message::EditEntry => {
            if let Screen::View(viewer) = &model.screen {
                let entry = viewer.entry.clone();
                model.open_editor(entry);
            }
        }

        Message::Resize(width, height) => {
            model.size = (width, height);
            let (viewer_width, viewer_height) = (model.viewer_width(), model.viewer_height());
            if let Screen::View(viewer) = &mut model.screen {
                viewer.resize(viewer_width, viewer_height);
            }
        }
        Message::Quit => {
            if let Screen::Edit(session) = &model.screen
                && matches!(session.target, EditTarget::New { .. })
            {
                model.exit_message = Some(NOT_ADDED.to_string());
            }
            model.screen = Screen::Closed;
            model.should_quit = true;
        }
    }

    model
}

fn commit(model: &mut Model, text: &str) {
    let Screen::Edit(session) = &model.screen else {
        return;
    };
    match clean_content(text) {
        Some(content) => {
            model.pending_save = Some(PendingSave {
                target: session.target.clone(),
                content,
            });
        }
        None => leave_editor(
            model,
            ToastLevel::Warning,
            "Entry left unchanged (empty content)",
        ),
    }
}

/// Close the editor without saving: back to the entry, or out of the app
/// for a new one.
fn leave_editor(model: &mut Model, level: ToastLevel, existing_notice: &str) {
    let Screen::Edit(session) = std::mem::take(&mut model.screen) else {
        return;
    };
    match session.target {
        EditTarget::Existing(entry) => {
            model.open_viewer(entry);
            model.show_toast(level, existing_notice);
        }
        EditTarget::New { .. } => {
            model.exit_message = Some(NOT_ADDED.to_string());
            model.should_quit = true;
        }
    }
}
