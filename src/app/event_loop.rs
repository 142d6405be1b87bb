use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::model::{EditSession, EditTarget, Screen, ViewerState};
use crate::app::{App, Model, StartMode, update};
use crate::editor::Editor;
use crate::store::StoreError;
use crate::ui::style::Theme;

impl App {
    /// Run the main event loop.
    ///
    /// Returns the message to print once the terminal is restored, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting entry does not exist, the terminal
    /// cannot be initialized, or reading terminal events fails.
    pub fn run(&mut self) -> Result<Option<String>> {
        let size = crossterm::terminal::size().context("Failed to read terminal size")?;
        let mut model = self.initial_model(size)?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; jotter requires an interactive terminal")?;
        let result = self.event_loop(&mut terminal, &mut model);
        ratatui::restore();

        result?;
        Ok(model.exit_message.take())
    }

    /// Build the first screen for this app's start mode.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the start mode names a missing entry.
    pub fn initial_model(&self, size: (u16, u16)) -> Result<Model, StoreError> {
        let screen = match &self.start {
            StartMode::New { title } => Screen::Edit(EditSession::new(
                Editor::open(None),
                EditTarget::New {
                    title: title.clone(),
                },
            )),
            StartMode::Edit(id) => {
                let entry = self.store.get(*id).ok_or(StoreError::NotFound(*id))?;
                Screen::Edit(EditSession::new(
                    Editor::open(Some(&entry.content)),
                    EditTarget::Existing(entry.clone()),
                ))
            }
            StartMode::View(id) => {
                let entry = self.store.get(*id).ok_or(StoreError::NotFound(*id))?;
                Screen::View(ViewerState::new(entry.clone(), usize::from(size.0), 0))
            }
        };
        Ok(Model::new(screen, size).with_theme(Theme::for_mode(self.theme)))
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        while !model.should_quit {
            terminal.draw(|frame| Self::view(model, frame))?;

            let event = event::read().context("Failed to read terminal event")?;
            if let Some(msg) = Self::handle_event(&event, model) {
                tracing::debug!(?msg, "message");
                *model = update(std::mem::take(model), msg.clone());
                self.handle_message_side_effects(model, &msg);
            }
        }
        Ok(())
    }
}
