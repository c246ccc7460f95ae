//! UI rendering for the terminal user interface.
//!
//! Layout, top to bottom: header, transport status, progress gauge, the
//! queue, and the controls footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{PlayerStatus, Queue, TransportState};

const HINT: &str = " Use F1, F2 and F3 to move around the queue ";

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_seconds: u64) -> String {
    [
        "[j/k] select".to_string(),
        "[g/G] first/last".to_string(),
        "[space/p] play/pause".to_string(),
        "[s] stop".to_string(),
        "[n] next".to_string(),
        format!("[h/l] seek -/+{seek_seconds}s"),
        "[0-9] jump".to_string(),
        "[+/-] volume".to_string(),
        "[F1/F2 or K/J] move up/down".to_string(),
        "[F3 or T] play next".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn volume_text(volume: f32) -> String {
    format!("Volume: {:.0}%", (volume * 100.0).round())
}

/// Glyph for the play/pause button: what pressing it would do.
fn transport_glyph<'a>(state: TransportState, ui: &'a UiSettings) -> &'a str {
    match state {
        TransportState::Playing => &ui.pause_glyph,
        TransportState::Idle | TransportState::Paused => &ui.play_glyph,
    }
}

fn progress_ratio(position: Duration, length: Duration) -> f64 {
    if length.is_zero() {
        return 0.0;
    }
    (position.as_secs_f64() / length.as_secs_f64()).clamp(0.0, 1.0)
}

fn status_text(status: &PlayerStatus, app: &App) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = match status.state {
        TransportState::Idle => "Stopped",
        TransportState::Playing => "Playing",
        TransportState::Paused => "Paused",
    };
    match &status.title {
        Some(title) if status.state == TransportState::Idle => {
            parts.push(format!("Up next: {title}"))
        }
        Some(title) => parts.push(format!("Song: {title}")),
        None => parts.push("Queue empty".to_string()),
    }
    parts.push(state.to_string());
    parts.push(volume_text(status.volume));

    if let Some(dir) = &app.current_dir {
        parts.push(format!("Dir: {dir}"));
    }
    if let Some(err) = &app.last_error {
        parts.push(format!("Error: {err}"));
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    queue: &Queue,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" jukebox ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = app.status_snapshot();
    let status_par = Paragraph::new(status_text(&status, app))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(format!(" {} ", transport_glyph(status.state, ui_settings))),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    let progress = Gauge::default()
        .block(Block::bordered().title(" progress "))
        .gauge_style(if status.is_playing() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        })
        .ratio(progress_ratio(app.position, status.length))
        .label(format!(
            "{} / {}",
            format_mmss(app.position),
            format_mmss(status.length)
        ));
    frame.render_widget(progress, chunks[2]);

    // Queue
    {
        let items: Vec<ListItem> = queue
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let row = format!("{:>3}. {}", i + 1, t.display);
                if i == 0 && status.state == TransportState::Idle {
                    ListItem::new(row).bold()
                } else {
                    ListItem::new(row)
                }
            })
            .collect();

        let mut block = Block::default().borders(Borders::ALL).title(" queue ");
        if ui_settings.show_hint {
            block = block.title_bottom(Line::from(HINT).centered());
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !queue.is_empty() {
            state.select(Some(app.selected));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    let footer = Paragraph::new(controls_text(controls_settings.seek_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
