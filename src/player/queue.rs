//! The play queue.
//!
//! The front of the queue is the next track to play. Starting a track
//! rotates it to the back, so the queue always reads as "up next" and wraps
//! around forever. Reordering takes an explicit index; the queue never
//! tracks a selection of its own.

use crate::library::Track;

#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
}

impl Queue {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// The queue in play order, front first.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The next track to play, without removing it.
    pub fn peek_front(&self) -> Option<&Track> {
        self.tracks.first()
    }

    /// Move the front track to the back; everything else moves up one.
    pub fn rotate_to_back(&mut self) {
        if !self.tracks.is_empty() {
            self.tracks.rotate_left(1);
        }
    }

    /// Swap `index` with the entry above it. Returns the new index of the
    /// moved track, or `None` if nothing moved.
    pub fn move_up(&mut self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.tracks.len() {
            return None;
        }
        self.tracks.swap(index, index - 1);
        Some(index - 1)
    }

    /// Swap `index` with the entry below it. Returns the new index of the
    /// moved track, or `None` if nothing moved.
    pub fn move_down(&mut self, index: usize) -> Option<usize> {
        if index >= self.tracks.len().saturating_sub(1) {
            return None;
        }
        self.tracks.swap(index, index + 1);
        Some(index + 1)
    }

    /// Move the entry at `index` to the front, shifting the entries before
    /// it down by one. Entries after `index` keep their positions.
    pub fn move_to_front(&mut self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.tracks.len() {
            return None;
        }
        self.tracks[..=index].rotate_right(1);
        Some(0)
    }
}
