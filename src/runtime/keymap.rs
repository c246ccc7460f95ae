//! Key bindings.
//!
//! F1/F2/F3 reorder the queue around the selected row; `K`/`J`/`T` do the
//! same for keyboards without handy function keys. Digits act as a position
//! slider in tenths of the track.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::PlayerCmd;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    Player(PlayerCmd),
}

/// What a key handler needs to turn relative input into absolute commands.
pub struct KeyContext {
    pub selected: usize,
    pub position: Duration,
    pub length: Duration,
    pub volume: f32,
    pub seek_seconds: u64,
    pub volume_step: f32,
}

fn step_volume(volume: f32, delta: f32) -> f32 {
    // Keep repeated steps on a clean percentage grid.
    ((volume + delta) * 100.0).round() / 100.0
}

pub fn map_key(key: KeyEvent, ctx: &KeyContext) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let seek = Duration::from_secs(ctx.seek_seconds);
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,
        KeyCode::Char('g') | KeyCode::Home => Action::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => Action::SelectLast,

        KeyCode::F(1) | KeyCode::Char('K') => Action::Player(PlayerCmd::MoveUp(ctx.selected)),
        KeyCode::F(2) | KeyCode::Char('J') => Action::Player(PlayerCmd::MoveDown(ctx.selected)),
        KeyCode::F(3) | KeyCode::Char('T') => {
            Action::Player(PlayerCmd::MoveToFront(ctx.selected))
        }

        KeyCode::Char(' ') | KeyCode::Char('p') => Action::Player(PlayerCmd::PlayPause),
        KeyCode::Enter => Action::Player(PlayerCmd::Play),
        KeyCode::Char('s') => Action::Player(PlayerCmd::Stop),
        KeyCode::Char('n') => Action::Player(PlayerCmd::Next),

        KeyCode::Char('h') | KeyCode::Left => {
            Action::Player(PlayerCmd::SeekTo(ctx.position.saturating_sub(seek)))
        }
        KeyCode::Char('l') | KeyCode::Right => {
            Action::Player(PlayerCmd::SeekTo(ctx.position.saturating_add(seek)))
        }
        KeyCode::Char(c @ '0'..='9') => {
            let tenths = c.to_digit(10)?;
            Action::Player(PlayerCmd::SeekTo(ctx.length * tenths / 10))
        }

        KeyCode::Char('+') | KeyCode::Char('=') => Action::Player(PlayerCmd::SetVolume(
            step_volume(ctx.volume, ctx.volume_step),
        )),
        KeyCode::Char('-') => Action::Player(PlayerCmd::SetVolume(step_volume(
            ctx.volume,
            -ctx.volume_step,
        ))),

        _ => return None,
    };
    Some(action)
}
