//! Application model: the queue selection and what the UI last learned
//! about the transport.
//!
//! The selection is a UI concern. The queue never stores it; every reorder
//! command carries the selected index explicitly, and the selection then
//! follows the moved track.

use std::time::Duration;

use crate::player::{PlayerStatus, StatusHandle};

pub struct App {
    /// Selected row in the queue list.
    pub selected: usize,
    /// Transport status as last published by the transport.
    pub status: StatusHandle,
    /// Position polled from the transport on every tick.
    pub position: Duration,
    /// The last transport failure, shown until the next successful command.
    pub last_error: Option<String>,
    pub current_dir: Option<String>,
}

impl App {
    pub fn new(status: StatusHandle) -> Self {
        Self {
            selected: 0,
            status,
            position: Duration::ZERO,
            last_error: None,
            current_dir: None,
        }
    }

    /// Record the directory the library was scanned from.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    /// Clone of the most recently published status.
    pub fn status_snapshot(&self) -> PlayerStatus {
        self.status
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn set_position(&mut self, position: Duration) {
        self.position = position;
    }

    pub fn set_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Move the selection down one row, wrapping to the top.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Move the selection up one row, wrapping to the bottom.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if self.selected == 0 || self.selected >= len {
            len - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection on a track that the queue just moved.
    pub fn follow_move(&mut self, moved_to: Option<usize>) {
        if let Some(i) = moved_to {
            self.selected = i;
        }
    }

    /// Keep the selection inside a queue of `len` entries.
    pub fn clamp_selection(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
