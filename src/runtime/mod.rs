use std::env;
use std::path::Path;
use std::sync::{Arc, Mutex, mpsc};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, warn};

use crate::app::App;
use crate::audio::RodioDevice;
use crate::library::scan;
use crate::logging;
use crate::player::{PlayerCmd, PlayerStatus, Queue, StatusHandle, Transport};

mod event_loop;
mod keymap;
mod notify;
mod settings;

use notify::Notifier;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();

    // Keep the guard alive so buffered log lines are flushed on exit. The
    // terminal is still in cooked mode here, so stderr is readable.
    let log_guard = match logging::init(&settings.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!(
                "jukebox: logging disabled, cannot write to {:?}: {e}",
                settings.logging.dir
            );
            None
        }
    };
    if let Some(problem) = config_problem {
        if log_guard.is_none() {
            eprintln!("jukebox: {problem}");
        }
        warn!("{problem}");
    }

    let dir = env::args()
        .nth(1)
        .unwrap_or_else(|| settings.library.dir.clone());

    let tracks = scan(Path::new(&dir), &settings.library)?;
    info!(dir = %dir, tracks = tracks.len(), "library loaded");

    let device = RodioDevice::open_default()?;

    let (inbox_tx, inbox_rx) = mpsc::channel::<PlayerCmd>();
    let mpris = crate::mpris::spawn_mpris(inbox_tx.clone());

    let status: StatusHandle = Arc::new(Mutex::new(PlayerStatus::default()));
    let notifier = Notifier {
        status: status.clone(),
        mpris,
    };
    let mut transport = Transport::new(
        device,
        Queue::new(tracks),
        settings.audio.initial_volume,
        inbox_tx,
        notifier,
    );

    let mut app = App::new(status);
    app.set_current_dir(dir);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result =
        event_loop::run(&mut terminal, &settings, &mut app, &mut transport, &inbox_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        error!(error = %e, "event loop failed");
    }
    run_result
}
