//! Main application loop and state.
//!
//! The shell follows the Elm pattern: a [`Model`] holding all state, a
//! [`Message`] enum for events, a pure [`update`] transition, and a view
//! rendered each cycle. Keystrokes pass through the structural router
//! before the ordinary editing bindings see them.

mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Direction, Message, update};

use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Settings;
use crate::document::{self, DocumentState};
use crate::editor::RopeBuffer;

/// The running application.
pub struct App {
    model: Model,
}

impl App {
    /// Build the app for a file path, loading it when it exists.
    pub fn open(path: PathBuf, settings: Settings) -> Result<Self> {
        let (buffer, doc) = if path.exists() {
            let text = document::load_file(&path)?;
            (RopeBuffer::from_text(&text), DocumentState::with_path(path))
        } else {
            // A new file: empty buffer, saved on Ctrl+S.
            (RopeBuffer::empty(), DocumentState::with_path(path))
        };
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        Ok(Self {
            model: Model::new(buffer, doc, settings, size),
        })
    }

    /// Start with an empty, untitled buffer.
    pub fn untitled(settings: Settings) -> Self {
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        Self {
            model: Model::new(RopeBuffer::empty(), DocumentState::new(), settings, size),
        }
    }

    /// Run the terminal event loop until the user quits.
    pub fn run(self) -> Result<()> {
        enable_raw_mode().context("enable raw mode")?;
        execute!(stdout(), EnterAlternateScreen).context("enter alt screen")?;
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend).context("create terminal")?;

        let result = event_loop(self.model, &mut terminal);

        // Restore the terminal even when the loop errored.
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        result
    }
}

fn event_loop(
    mut model: Model,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| crate::ui::render(&mut model, frame))
            .context("draw frame")?;

        if !event::poll(Duration::from_millis(250)).context("poll events")? {
            continue;
        }
        let event = event::read().context("read event")?;
        if let Some(message) = input::handle_event(&mut model, event) {
            model = update(model, message);
        }

        if model.should_quit {
            return Ok(());
        }
    }
}
