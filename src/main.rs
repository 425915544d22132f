mod app;
mod color;
mod config;
mod driver;
mod input;
mod logging;
mod params;
mod renderer;
mod surface;
mod types;
mod ui;

use app::App;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const UI_TICK_RATE: Duration = Duration::from_millis(33); // ~30 fps redraw

/// Random hue-shifted dots painted onto a canvas, live.
#[derive(Debug, Parser)]
#[command(name = "huedots", version, about)]
struct Cli {
    /// Config file (JSON). Defaults to <config dir>/huedots/config.json.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible dot sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file. Defaults to <cache dir>/huedots/huedots.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path) {
        // Not fatal: run without a log.
        eprintln!("warning: {}", e);
    }

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let mut cfg = config::load_config(&config_path);
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
    log::info!(
        "starting: {}x{} surface, {} dots/frame, hue shift {:.1}, tick {} ms, seed {:?}",
        cfg.width,
        cfg.height,
        cfg.dots_per_frame,
        cfg.hue_shift,
        cfg.tick_millis,
        cfg.seed
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, App::new(cfg)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_tick = Instant::now();

    loop {
        // Run every frame that came due since the last pass.
        app.poll_frames();

        let size = terminal.size()?;
        app.viewport = Rect::new(0, 0, size.width, size.height);

        // Render
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll for events, waking up in time for the next frame
        let mut timeout = UI_TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if app.driver_state() == driver::DriverState::Running {
            timeout = timeout.min(app.config.tick());
        }

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release/repeat
                    if key.kind == KeyEventKind::Press {
                        // Ctrl+C always quits
                        if key.modifiers.contains(KeyModifiers::CONTROL)
                            && key.code == KeyCode::Char('c')
                        {
                            app.on_exit_requested();
                        } else {
                            input::handle_key(&mut app, key);
                        }
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        // Tick update
        if last_tick.elapsed() >= UI_TICK_RATE {
            app.tick = app.tick.wrapping_add(1);
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    app.teardown();
    Ok(())
}
