mod clock;
mod logging;

use std::io::stdout;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use galaxy_config::{CliArgs, Config, DisplayConfig, default_config_dir, default_data_dir};
use galaxy_field::{FieldEngine, FieldHost, TerminalSurface};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};
use tracing::{info, warn};

use crate::clock::FrameClock;
use crate::logging::init_logging;

const ACCENT: Color = Color::Rgb(135, 206, 235);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => default_config_dir()?,
    };
    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    config.apply_cli_overrides(&args);

    if let Ok(data_dir) = default_data_dir() {
        init_logging(&data_dir, &config.log.level);
    }
    if let Some(err) = load_error {
        warn!(%err, dir = %config_dir.display(), "config unusable, using defaults");
    }
    info!(fps = config.field.target_fps, speed = %config.field.speed, "starting");

    let terminal = ratatui::init();
    with_restore(
        || execute!(stdout(), EnableMouseCapture, EnableFocusChange),
        || App::new(config).run(terminal),
        || {
            if let Err(err) = execute!(stdout(), DisableMouseCapture, DisableFocusChange) {
                warn!(%err, "failed to release mouse capture");
            }
            ratatui::restore();
        },
    )
}

/// Run `body` once `setup` succeeds; `restore` runs whether either of them failed.
fn with_restore<T>(
    setup: impl FnOnce() -> std::io::Result<()>,
    body: impl FnOnce() -> color_eyre::Result<T>,
    restore: impl FnOnce(),
) -> color_eyre::Result<T> {
    let result = setup()
        .map_err(color_eyre::Report::from)
        .and_then(|()| body());
    restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Redraw on the next loop even if no frame advanced.
    dirty: bool,
    host: FieldHost<FrameClock>,
    surface: TerminalSurface,
    display: DisplayConfig,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let interval = Duration::from_secs_f32(config.field.frame_interval_ms() / 1000.0);
        let display = config.display;
        let surface =
            TerminalSurface::with_cell_size(0, 0, display.cell_width, display.cell_height);
        Self {
            running: false,
            dirty: true,
            host: FieldHost::new(FieldEngine::new(config.field), FrameClock::new(interval)),
            surface,
            display,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.surface.resize(size.width, size.height);
        self.host.mount(self.surface.viewport());

        self.running = true;
        while self.running {
            let now = Instant::now();
            if let Some(handle) = self.host.scheduler_mut().take_due(now) {
                let timestamp = self.host.scheduler().timestamp_ms(now);
                if self.host.on_frame(handle, timestamp, &mut self.surface) {
                    self.dirty = true;
                }
            }
            if self.dirty {
                terminal.draw(|frame| self.render(frame))?;
                self.dirty = false;
            }
            let timeout = self.host.scheduler().time_until_due(Instant::now());
            self.handle_crossterm_events(timeout)?;
        }

        self.host.teardown();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        self.surface.render(frame);
        if !self.display.show_help {
            return;
        }

        let [_, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        let speed = self.host.engine().speed();
        let pause_label = if self.host.is_paused() { " resume  " } else { " pause  " };
        let help = Line::from(vec![
            "q".bold().fg(ACCENT),
            " quit  ".dark_gray(),
            "space".bold().fg(ACCENT),
            pause_label.dark_gray(),
            "+/-".bold().fg(ACCENT),
            format!(" speed ({speed})  ").dark_gray(),
            "r".bold().fg(ACCENT),
            " reseed".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, help_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most until the next frame is due.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.host.on_pointer_leave(),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.host.toggle_pause(),
            (_, KeyCode::Char('+') | KeyCode::Char('=')) => self.set_speed(true),
            (_, KeyCode::Char('-')) => self.set_speed(false),
            (_, KeyCode::Char('r')) => self.host.reseed(),
            _ => return,
        }
        self.dirty = true;
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Moved | MouseEventKind::Drag(_) = mouse.kind {
            let (x, y) = self.surface.cell_to_pixel(mouse.column, mouse.row);
            self.host.on_pointer_move(x, y);
        }
    }

    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.surface.resize(cols, rows);
        let viewport = self.surface.viewport();
        self.host.on_resize(viewport);
        // A terminal that started at zero size mounts once it has cells
        self.host.mount(viewport);
        self.dirty = true;
    }

    fn set_speed(&mut self, faster: bool) {
        let current = self.host.engine().speed();
        let speed = if faster { current.faster() } else { current.slower() };
        self.host.set_speed(speed);
        info!(%speed, "animation speed changed");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_still_restores() {
        let ran = Cell::new(false);
        let restored = Cell::new(false);
        let result = with_restore(
            || Err(std::io::Error::other("mouse capture unsupported")),
            || {
                ran.set(true);
                Ok(())
            },
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(!ran.get());
        assert!(restored.get());
    }

    #[test]
    fn test_body_result_returned_after_restore() {
        let restored = Cell::new(false);
        let result = with_restore(|| Ok(()), || Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(restored.get());

        let failed: color_eyre::Result<()> = with_restore(
            || Ok(()),
            || Err(color_eyre::eyre::eyre!("draw failed")),
            || {},
        );
        assert!(failed.is_err());
    }
}
