//! Session: The document being edited plus everything positioned on it.

use super::{Cursor, StatusMessage, Step};
use crate::config::EditorConfig;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::fileio;
use crate::syntax::SyntaxProfile;
use crate::view::Viewport;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// State shared by every mode: document, cursor, viewport and messages.
#[derive(Debug)]
pub struct Session {
    pub(crate) document: Document,
    pub(crate) cursor: Cursor,
    pub(crate) viewport: Viewport,
    pub(crate) status: StatusMessage,
    pub(crate) filename: Option<PathBuf>,
    pub(crate) config: EditorConfig,
    pub(crate) should_quit: bool,
}

impl Session {
    /// Create an empty session for a terminal of `rows` by `cols`.
    pub fn new(config: EditorConfig, rows: u16, cols: u16) -> Self {
        Self {
            document: Document::new(config.tab_stop),
            cursor: Cursor::default(),
            viewport: Viewport::new(rows, cols),
            status: StatusMessage::default(),
            filename: None,
            config,
            should_quit: false,
        }
    }

    /// Load `path` into the session. A missing file starts an empty
    /// document that will be created on the first save.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let document = match fileio::read_lines(path) {
            Ok(lines) => Document::from_lines(lines, self.config.tab_stop),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "new file");
                Document::new(self.config.tab_stop)
            }
            Err(source) => {
                return Err(Error::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        self.document = document;
        self.cursor = Cursor::default();
        self.viewport.set_offsets(0, 0);
        self.set_filename(path.to_path_buf());
        info!(path = %path.display(), rows = self.document.len(), "opened");
        Ok(())
    }

    /// Name the file and pick the matching syntax profile.
    pub fn set_filename(&mut self, path: PathBuf) {
        let profile = SyntaxProfile::for_filename(&path.to_string_lossy());
        self.document.set_syntax(profile);
        self.filename = Some(path);
    }

    /// Write the document to `target`, or to the current file name.
    ///
    /// The outcome is reported on the message line. Returns whether the
    /// document is now saved.
    pub fn save(&mut self, target: Option<&Path>) -> bool {
        if let Some(path) = target {
            self.set_filename(path.to_path_buf());
        }
        let Some(path) = self.filename.as_deref() else {
            self.status.set("No file name (use :w <file>)");
            return false;
        };
        let bytes = self.document.to_bytes();
        match fileio::write_file(path, &bytes) {
            Ok(written) => {
                info!(path = %path.display(), bytes = written, "saved");
                self.document.mark_clean();
                self.status.set(format!("{written} bytes written to disk"));
                true
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "save failed");
                self.status.set(format!("Can't save! I/O error: {err}"));
                false
            }
        }
    }

    /// The document being edited.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Current cursor.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current viewport.
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current message.
    pub const fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// File being edited, if named.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Active configuration.
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Set the transient message.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.status.set(text);
    }

    /// Insert `byte` at the cursor, appending a row on the virtual last line.
    pub fn insert_byte(&mut self, byte: u8) {
        if self.cursor.row == self.document.len() {
            self.document.insert_row(self.document.len(), b"");
        }
        self.document.insert_char(self.cursor.row, self.cursor.col, byte);
        self.cursor.col += 1;
    }

    /// Split the row at the cursor and move to the start of the new row.
    pub fn insert_newline(&mut self) {
        self.document.split_row(self.cursor.row, self.cursor.col);
        self.cursor.row += 1;
        self.cursor.col = 0;
    }

    /// Delete the byte before the cursor, joining with the previous row at
    /// column 0.
    pub fn delete_before(&mut self) {
        let Cursor { row, col, .. } = self.cursor;
        if row >= self.document.len() || (row == 0 && col == 0) {
            return;
        }
        if col > 0 {
            self.document.delete_char(row, col - 1);
            self.cursor.col -= 1;
        } else {
            self.cursor.col = self.document.row_len(row - 1);
            self.document.join_with_next(row - 1);
            self.cursor.row -= 1;
        }
    }

    /// Delete the byte under the cursor, joining the next row at row end.
    pub fn delete_at(&mut self) {
        let Cursor { row, col, .. } = self.cursor;
        if row >= self.document.len() {
            return;
        }
        if col < self.document.row_len(row) {
            self.document.delete_char(row, col);
        } else {
            self.document.join_with_next(row);
        }
    }

    /// Delete the byte under the cursor without joining rows.
    pub fn delete_under(&mut self) {
        let Cursor { row, col, .. } = self.cursor;
        if col < self.document.row_len(row) {
            self.document.delete_char(row, col);
            self.cursor.clamp_col(&self.document);
        }
    }

    /// Free cursor movement (insert mode arrows).
    pub fn step(&mut self, step: Step) {
        self.cursor.step(step, &self.document);
    }

    /// Line-bound cursor movement (normal mode motions).
    pub fn nudge(&mut self, step: Step) {
        self.cursor.nudge(step, &self.document);
    }

    /// Move a screenful up or down.
    pub fn page(&mut self, up: bool) {
        let rows = self.viewport.rows();
        let step = if up {
            self.cursor.row = self.viewport.row_offset();
            Step::Up
        } else {
            self.cursor.row = (self.viewport.row_offset() + rows)
                .saturating_sub(1)
                .min(self.document.len());
            Step::Down
        };
        for _ in 0..rows {
            self.cursor.step(step, &self.document);
        }
    }

    /// Move a screenful without leaving the last row (normal mode).
    pub fn page_within(&mut self, up: bool) {
        self.page(up);
        self.cursor.row = self.cursor.row.min(self.document.len().saturating_sub(1));
        self.cursor.clamp_col(&self.document);
    }

    /// Move to the last row.
    pub fn goto_last_row(&mut self) {
        self.cursor.row = self.document.len().saturating_sub(1);
        self.cursor.clamp_col(&self.document);
    }

    /// Derive the render column and scroll the viewport to the cursor.
    pub fn scroll(&mut self) {
        self.cursor.clamp_col(&self.document);
        self.cursor.sync_render_col(&self.document);
        self.viewport.scroll(self.cursor.row, self.cursor.render_col);
    }

    /// Adapt to a new terminal size.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.viewport.resize(rows, cols);
    }
}
