//! Main TUI application state and logic

use crate::engine::{Algorithm, RunStats};
use crate::playback::Playback;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Fastest auto-play tick
const MIN_PLAY_INTERVAL: Duration = Duration::from_millis(25);
/// Slowest auto-play tick
const MAX_PLAY_INTERVAL: Duration = Duration::from_millis(2000);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Bars,
    Info,
    Legend,
}

impl FocusedPane {
    /// Move focus to the next pane (bars -> info -> legend)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Bars => FocusedPane::Info,
            FocusedPane::Info => FocusedPane::Legend,
            FocusedPane::Legend => FocusedPane::Bars,
        }
    }
}

/// The main application state
pub struct App {
    /// The step history being replayed
    pub playback: Playback,

    /// The algorithm that produced the history
    pub algorithm: Algorithm,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Scroll offset for the info pane
    pub info_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between auto-play steps
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a generated step history
    pub fn new(playback: Playback, algorithm: Algorithm) -> Self {
        App {
            playback,
            algorithm,
            focused_pane: FocusedPane::Bars,
            info_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            play_interval: Duration::from_millis(400),
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                if self.playback.step_forward() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bars pane on the left, info/legend column on the right,
        // status bar at the bottom.
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[1]);

        if let Some(step) = self.playback.current() {
            super::panes::render_bars_pane(
                frame,
                columns[0],
                step,
                self.focused_pane == FocusedPane::Bars,
            );
        }

        let stats = RunStats::from_steps(self.playback.steps_so_far());
        super::panes::render_info_pane(
            frame,
            right_rows[0],
            self.algorithm.info(),
            stats,
            self.focused_pane == FocusedPane::Info,
            &mut self.info_scroll,
        );

        super::panes::render_legend_pane(
            frame,
            right_rows[1],
            self.focused_pane == FocusedPane::Legend,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.playback.position(),
            self.playback.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap() as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.playback.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Info {
                    self.info_scroll = self.info_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Info {
                    self.info_scroll = self.info_scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.play_interval)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.play_interval = (self.play_interval / 2).max(MIN_PLAY_INTERVAL);
                self.status_message = format!("Speed: {}ms/step", self.play_interval.as_millis());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.play_interval = (self.play_interval * 2).min(MAX_PLAY_INTERVAL);
                self.status_message = format!("Speed: {}ms/step", self.play_interval.as_millis());
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.playback.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Step forward in the history
    fn step_forward(&mut self) {
        if self.playback.step_forward() {
            self.status_message = "Stepped forward".to_string();
        } else {
            self.status_message = "Already at the end of the history".to_string();
        }
    }

    /// Step backward in the history
    fn step_backward(&mut self) {
        if self.playback.step_backward() {
            self.status_message = "Stepped backward".to_string();
        } else {
            self.status_message = "Already at the beginning of the history".to_string();
        }
    }
}
