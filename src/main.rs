use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{env, error::Error, fs::File, io, sync::Mutex, time::Duration};

use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use owx::app::App;
use owx::cli::Args;
use owx::error::Error as OwxError;
use owx::owm::OpenWeatherMap;
use owx::prefs::{self, Preferences};
use owx::ui::run_app;

const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
const LOG_FILE: &str = "owx.log";

/// Logs go to a file in the config directory; stderr belongs to the TUI.
fn init_logging() -> io::Result<()> {
    let Some(dir) = prefs::config_dir() else {
        return Ok(());
    };
    std::fs::create_dir_all(&dir)?;
    let file = File::create(dir.join(LOG_FILE))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("owx=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging()?;

    let api_key = args
        .api_key
        .clone()
        .or_else(|| env::var(API_KEY_VAR).ok())
        .filter(|key| !key.is_empty())
        .ok_or(OwxError::MissingApiKey)?;

    let prefs_path = prefs::prefs_path();
    let saved = match prefs_path {
        Some(ref path) => Preferences::load(path).unwrap_or_else(|err| {
            warn!("ignoring saved preferences: {err}");
            Preferences::default()
        }),
        None => Preferences::default(),
    };

    let source = OpenWeatherMap::new(api_key, args.units)?;
    let mut app = App::new(source, saved, prefs_path, args.units);
    info!(units = ?args.units, "starting");
    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => app.fetch_by_location(lat, lon),
        _ => app.fetch_by_city_name(
            args.city.as_deref(),
            args.state.as_deref(),
            args.country.as_deref(),
        ),
    }

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, Duration::from_secs(args.interval));

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}
