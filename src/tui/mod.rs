//! Built-in terminal editor for the journal (`lsq -t`)

pub mod textarea;
mod ui;

use crate::application::EditSession;
use crate::error::{LsqError, Result};
use crate::infrastructure::{select_editor_from_env, EditorSession};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use textarea::TextArea;

const STATUS_TIMEOUT: Duration = Duration::from_secs(2);
const PAGE_ROWS: usize = 10;

/// What the event loop has to do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    OpenExternalEditor,
    Quit,
}

/// State of the terminal editor
pub struct App {
    pub session: EditSession,
    pub textarea: TextArea,
    editor_token: String,
    status: Option<(String, Instant)>,
}

impl App {
    pub fn new(session: EditSession, editor_token: String) -> Self {
        let textarea = TextArea::new(session.buffer());
        App {
            session,
            textarea,
            editor_token,
            status: None,
        }
    }

    pub fn is_modified(&self) -> bool {
        self.session.is_modified() || self.textarea.text() != self.session.buffer()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|(msg, _)| msg.as_str())
    }

    fn set_status(&mut self, msg: &str) {
        self.status = Some((msg.to_string(), Instant::now()));
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self, now: Instant) {
        if let Some((_, since)) = &self.status {
            if now.duration_since(*since) >= STATUS_TIMEOUT {
                self.status = None;
            }
        }
    }

    fn sync_buffer(&mut self) {
        self.session.replace_buffer(self.textarea.text());
    }

    pub fn cycle_state(&mut self) {
        self.sync_buffer();
        if self.session.cycle_state_at(self.textarea.cursor_line()) {
            self.textarea.set_text(self.session.buffer());
        }
    }

    pub fn cycle_priority(&mut self) {
        self.sync_buffer();
        if self.session.cycle_priority_at(self.textarea.cursor_line()) {
            self.textarea.set_text(self.session.buffer());
        }
    }

    pub fn save(&mut self) {
        self.sync_buffer();
        match self.session.save() {
            Ok(()) => self.set_status("File saved successfully!"),
            Err(e) => {
                log::error!("Failed to save {}: {}", self.session.path().display(), e);
                self.set_status("Error saving file!");
            }
        }
    }

    /// Save pending edits, run the external editor and load its result
    pub fn edit_externally(&mut self) -> Result<()> {
        if self.is_modified() {
            self.sync_buffer();
            self.session.save()?;
        }

        let editor = EditorSession::new(select_editor_from_env(&self.editor_token));
        editor.open(self.session.path())?;

        self.session.reload()?;
        self.textarea.set_text(self.session.buffer());
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Continue;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return KeyOutcome::Quit,
                KeyCode::Char('s') => self.save(),
                KeyCode::Char('t') => self.cycle_state(),
                KeyCode::Char('p') => self.cycle_priority(),
                KeyCode::Char('e') => return KeyOutcome::OpenExternalEditor,
                _ => {}
            }
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Char(c) => self.textarea.insert_char(c),
            KeyCode::Tab => self.textarea.insert_char('\t'),
            KeyCode::Enter => self.textarea.insert_newline(),
            KeyCode::Backspace => self.textarea.backspace(),
            KeyCode::Delete => self.textarea.delete(),
            KeyCode::Left => self.textarea.move_left(),
            KeyCode::Right => self.textarea.move_right(),
            KeyCode::Up => self.textarea.move_up(1),
            KeyCode::Down => self.textarea.move_down(1),
            KeyCode::PageUp => self.textarea.move_up(PAGE_ROWS),
            KeyCode::PageDown => self.textarea.move_down(PAGE_ROWS),
            KeyCode::Home => self.textarea.move_home(),
            KeyCode::End => self.textarea.move_end(),
            _ => {}
        }
        KeyOutcome::Continue
    }
}

/// Run the terminal editor on a journal file until the user quits
pub fn run(session: EditSession, editor_token: &str) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enter_terminal()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(session, editor_token.to_string());
    let res = run_app(&mut terminal, app);

    restore_terminal()?;
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        app.expire_status(Instant::now());

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match app.handle_key(key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Quit => {
                    log::info!("Quit requested");
                    return Ok(());
                }
                KeyOutcome::OpenExternalEditor => {
                    restore_terminal()?;
                    let result = app.edit_externally();
                    enter_terminal()?;
                    terminal.clear()?;

                    if let Err(e) = result {
                        log::error!("External editor failed: {}", e);
                        app.set_status(&format!("Editor error: {}", e));
                    }
                }
            }
        }
    }
}

fn enter_terminal() -> Result<()> {
    enable_raw_mode().map_err(|e| LsqError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    execute!(io::stdout(), EnterAlternateScreen)
        .map_err(|e| LsqError::Terminal(format!("Failed to enter alternate screen: {}", e)))?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
