//! Editor: The owned session object that drives everything.
//!
//! The [`Editor`] receives one logical key at a time, routes it to the
//! active search, the save prompt or the current mode, and encodes a complete frame on
//! request. [`Editor::run`] is the blocking loop over a [`Terminal`].

mod cursor;
mod prompt;
mod session;
mod status;

pub use cursor::{Cursor, Step};
pub use prompt::{Prompt, PromptOutcome};
pub use session::Session;
pub use status::StatusMessage;

use crate::config::EditorConfig;
use crate::error::Result;
use crate::key::Key;
use crate::mode::{Mode, ModeKind, Transition};
use crate::render::{draw_frame, Frame, OutputBuffer, StatusBar};
use crate::search::{Search, SearchOutcome};
use crate::terminal::Terminal;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Startup hint shown on the message line.
pub const HELP_MESSAGE: &str = "HELP: i = insert | :w = save | :q = quit | / = find | Ctrl-S = save";

/// The editor: one session, its mode and an optional running search or
/// save prompt.
#[derive(Debug)]
pub struct Editor {
    session: Session,
    mode: Mode,
    search: Option<Search>,
    save_prompt: Option<Prompt>,
    quit_times_left: u32,
    output: OutputBuffer,
}

impl Editor {
    /// Create an editor with an empty document for a terminal of
    /// `rows` by `cols`.
    pub fn new(config: EditorConfig, rows: u16, cols: u16) -> Self {
        let quit_times_left = config.quit_times;
        let mut session = Session::new(config, rows, cols);
        session.set_message(HELP_MESSAGE);
        Self {
            session,
            mode: Mode::default(),
            search: None,
            save_prompt: None,
            quit_times_left,
            output: OutputBuffer::with_capacity(frame_capacity(rows, cols)),
        }
    }

    /// Open `path` for editing.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.session.open(path)
    }

    /// Shared state: document, cursor, viewport, message.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Current mode.
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The running search, if any.
    pub const fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    /// The file name prompt opened by Ctrl-S on an unnamed document.
    pub const fn save_prompt(&self) -> Option<&Prompt> {
        self.save_prompt.as_ref()
    }

    /// Whether the session asked to exit.
    pub const fn should_quit(&self) -> bool {
        self.session.should_quit
    }

    /// Adapt to a new terminal size.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.session.resize(rows, cols);
    }

    /// Handle one key press.
    pub fn process_key(&mut self, key: Key) {
        if let Some(search) = self.search.as_mut() {
            let outcome = search.handle_key(key, &mut self.session);
            if outcome != SearchOutcome::Continue {
                self.search = None;
            }
            return;
        }

        if let Some(prompt) = self.save_prompt.as_mut() {
            match prompt.handle_key(key) {
                PromptOutcome::Continue => {}
                PromptOutcome::Submitted(name) => {
                    self.save_prompt = None;
                    self.session.save(Some(Path::new(&name)));
                }
                PromptOutcome::Cancelled => {
                    self.save_prompt = None;
                    self.session.set_message("Save aborted");
                }
            }
            return;
        }

        if key == Key::Ctrl(b'q') {
            self.handle_quit();
            return;
        }
        self.quit_times_left = self.session.config.quit_times;

        match key {
            Key::Ctrl(b's') if self.session.filename().is_none() => {
                debug!("save as prompt");
                self.save_prompt = Some(Prompt::new("Save as: ", " (ESC to cancel)"));
            }
            Key::Ctrl(b's') => {
                self.session.save(None);
            }
            Key::Ctrl(b'f') => self.start_search(),
            _ => {
                let revision = self.session.status.revision();
                let transition = self.mode.handler_mut().handle_key(key, &mut self.session);
                self.apply(transition, revision);
            }
        }
    }

    /// Scroll to the cursor and encode a full frame.
    ///
    /// `now` decides whether the transient message is still shown.
    pub fn render_frame(&mut self, now: Instant) -> &[u8] {
        self.session.scroll();

        let session = &self.session;
        let document = session.document();
        let viewport = session.viewport();
        let cursor = session.cursor();
        let status = StatusBar::new(
            self.mode.kind().tag(),
            session.filename().map(|p| p.to_string_lossy()).as_deref(),
            document.len(),
            document.is_dirty(),
            document.syntax().map(|p| p.filetype),
            cursor.row,
        );

        let (message, prompt_col) = if let Some(search) = &self.search {
            (Some(search.prompt()), Some(search.prompt_cursor_col()))
        } else if let Some(prompt) = &self.save_prompt {
            (Some(prompt.text()), Some(prompt.cursor_col()))
        } else if let Some(line) = self.mode.command_line() {
            (Some(line.to_owned()), Some(line.len()))
        } else {
            let timeout = session.config().message_timeout();
            (session.status().visible_at(now, timeout).map(str::to_owned), None)
        };

        let screen_cursor = match prompt_col {
            Some(col) => (
                viewport.rows() + 1,
                col.min(viewport.cols().saturating_sub(1)),
            ),
            None => (
                cursor.row.saturating_sub(viewport.row_offset()),
                cursor.render_col.saturating_sub(viewport.col_offset()),
            ),
        };

        let frame = Frame {
            document,
            viewport,
            status: &status,
            message: message.as_deref(),
            cursor: screen_cursor,
            show_welcome: session.config().show_welcome,
        };
        draw_frame(&mut self.output, &frame);
        self.output.as_bytes()
    }

    /// Read keys and redraw until the session quits.
    ///
    /// The terminal size is queried before every frame so resizes take
    /// effect on the next key.
    pub fn run<T: Terminal>(&mut self, terminal: &mut T) -> Result<()> {
        info!("editor loop started");
        loop {
            let (rows, cols) = terminal.size()?;
            self.resize(rows, cols);
            let frame = self.render_frame(Instant::now());
            terminal.write_frame(frame)?;

            if self.should_quit() {
                break;
            }
            let key = terminal.read_key()?;
            self.process_key(key);
        }
        terminal.write_frame(b"\x1b[2J\x1b[H")?;
        info!("editor loop finished");
        Ok(())
    }

    fn handle_quit(&mut self) {
        if self.session.document.is_dirty() && self.quit_times_left > 0 {
            self.session.set_message(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                self.quit_times_left
            ));
            self.quit_times_left -= 1;
            return;
        }
        self.session.should_quit = true;
    }

    fn start_search(&mut self) {
        debug!("search started");
        self.search = Some(Search::start(&self.session));
    }

    fn apply(&mut self, transition: Transition, revision: u64) {
        match transition {
            Transition::Stay => {}
            Transition::Search => self.start_search(),
            Transition::Switch(kind) => {
                debug!(from = ?self.mode.kind(), to = ?kind, "mode change");
                self.mode = Mode::enter(kind);
                match kind {
                    // A command that reported something keeps its message.
                    ModeKind::Normal if self.session.status.revision() != revision => {}
                    ModeKind::Normal => self.session.set_message("-- NORMAL --"),
                    ModeKind::Insert => self.session.set_message("-- INSERT --"),
                    ModeKind::Command => {}
                }
            }
        }
    }
}

/// Initial frame buffer size: every cell twice over plus escape overhead.
fn frame_capacity(rows: u16, cols: u16) -> usize {
    usize::from(rows) * usize::from(cols) * 2 + 256
}
