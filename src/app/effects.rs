use crate::app::model::{EditSession, EditTarget, PendingSave, Screen};
use crate::app::{App, Message, Model, ToastLevel};
use crate::editor::{Editor, Key};
use crate::store::{StoreError, title_from_content};

impl App {
    pub(super) fn handle_message_side_effects(&mut self, model: &mut Model, msg: &Message) {
        if let Message::EditorKey(Key::Commit) = msg
            && let Some(save) = model.pending_save.take()
        {
            self.save_entry(model, save);
        }
    }

    fn save_entry(&mut self, model: &mut Model, save: PendingSave) {
        let saved = match &save.target {
            EditTarget::New { title } => {
                let title = title
                    .clone()
                    .unwrap_or_else(|| title_from_content(&save.content));
                self.store.add(&title, &save.content)
            }
            EditTarget::Existing(entry) => self
                .store
                .update(entry.id, &save.content)
                .map(|()| entry.id),
        };
        let saved = saved.and_then(|id| {
            self.store
                .get(id)
                .cloned()
                .ok_or(StoreError::NotFound(id))
        });

        match saved {
            Ok(entry) => {
                let notice = match save.target {
                    EditTarget::New { .. } => format!("Entry {} added", entry.id),
                    EditTarget::Existing(_) => format!("Entry {} saved", entry.id),
                };
                model.open_viewer(entry);
                model.show_toast(ToastLevel::Info, notice);
            }
            Err(err) => {
                tracing::warn!(error = %err, "saving entry failed");
                let editor = Editor::open(Some(&save.content));
                model.screen = Screen::Edit(EditSession::new(editor, save.target));
                model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
            }
        }
    }
}
