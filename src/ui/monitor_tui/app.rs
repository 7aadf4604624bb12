use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::plugins::Dashboard;

use super::event_handler::MonitorEvent;
use super::render::render_ui;

/// Monitor application state
pub struct MonitorApp {
    pub dashboard: Dashboard,
    pub should_quit: bool,
    pub show_help: bool,
    pub interval_ms: u64,
    pub last_update: Option<DateTime<Local>>,
}

impl MonitorApp {
    pub fn new(dashboard: Dashboard, config: MonitorAppConfig) -> Self {
        Self {
            dashboard,
            should_quit: false,
            show_help: false,
            interval_ms: config.interval_ms,
            last_update: None,
        }
    }

    /// Run one dashboard tick
    pub fn update_metrics(&mut self) {
        self.dashboard.tick();
        self.last_update = Some(Local::now());
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: MonitorEvent) {
        let mut options = self.dashboard.options();
        match event {
            MonitorEvent::Quit => self.should_quit = true,
            MonitorEvent::ToggleHelp => self.show_help = !self.show_help,
            MonitorEvent::ToggleBytes => options.byte = !options.byte,
            MonitorEvent::ToggleSum => options.sum = !options.sum,
            MonitorEvent::ToggleCumulative => options.cumulative = !options.cumulative,
            MonitorEvent::None => {}
        }
        self.dashboard.set_options(options);
    }
}

/// Configuration for the monitor app
#[derive(Debug, Clone)]
pub struct MonitorAppConfig {
    pub interval_ms: u64,
}

impl Default for MonitorAppConfig {
    fn default() -> Self {
        Self { interval_ms: 2000 }
    }
}

/// Run the monitor TUI application
pub fn run_monitor_app(dashboard: Dashboard, config: MonitorAppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = MonitorApp::new(dashboard, config);
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut MonitorApp,
) -> Result<()> {
    let tick_rate = Duration::from_millis(app.interval_ms);

    // Rates need a baseline sample
    app.update_metrics();
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| render_ui(frame, app))
            .context("Failed to draw frame")?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    if app.show_help {
                        // Any key closes the help overlay
                        app.show_help = false;
                    } else {
                        app.handle_event(MonitorEvent::from_key(key.code));
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            app.update_metrics();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
