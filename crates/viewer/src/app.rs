use std::collections::{HashMap, VecDeque};
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    ModifierKeyCode, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use stride::{ControllerConfig, FrameClock, KeyAction};

use crate::scene::{self, DemoScene, DemoSession};
use crate::tui;

/// Terminals without key-release reporting only resend key-down while a key
/// is held, so a key counts as released once repeats stop arriving. The
/// first repeat comes after the OS auto-repeat delay, later ones much sooner.
const FIRST_REPEAT_TIMEOUT: Duration = Duration::from_millis(650);
const HOLD_TIMEOUT: Duration = Duration::from_millis(180);
const MAX_LOG_LINES: usize = 64;

const ORBIT_STEP: f32 = 0.08;
const TILT_STEP: f32 = 0.05;
const ZOOM_STEP: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    last_seen: Instant,
    repeating: bool,
}

impl HeldKey {
    fn timeout(&self) -> Duration {
        if self.repeating {
            HOLD_TIMEOUT
        } else {
            FIRST_REPEAT_TIMEOUT
        }
    }
}

pub struct ViewerState {
    running: bool,
    release_events: bool,
    held: HashMap<&'static str, HeldKey>,
    log: VecDeque<(LogLevel, String)>,
}

impl ViewerState {
    fn new(release_events: bool) -> Self {
        Self {
            running: true,
            release_events,
            held: HashMap::new(),
            log: VecDeque::with_capacity(MAX_LOG_LINES),
        }
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn log_lines(&self) -> impl DoubleEndedIterator<Item = &(LogLevel, String)> {
        self.log.iter()
    }

    fn log_info(&mut self, message: impl Into<String>) {
        self.push_log(LogLevel::Info, message.into());
    }

    fn log_warn(&mut self, message: impl Into<String>) {
        self.push_log(LogLevel::Warn, message.into());
    }

    fn push_log(&mut self, level: LogLevel, message: String) {
        if self.log.len() == MAX_LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back((level, message));
    }

    fn handle_key(&mut self, key: KeyEvent, session: &mut DemoSession, now: Instant) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.key_pressed(key, session, now),
            KeyEventKind::Release => {
                if let Some(name) = key_name(key.code) {
                    session.key_up(name);
                    self.held.remove(name);
                }
            }
        }
    }

    fn key_pressed(&mut self, key: KeyEvent, session: &mut DemoSession, now: Instant) {
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Tab if key.kind == KeyEventKind::Press => {
                // Synthetic modifier edge for terminals that never report Shift alone.
                let action = session.key_down("shift");
                session.key_up("shift");
                self.log_toggle(action, session);
            }
            KeyCode::Char('q') => session.camera_mut().orbit(-ORBIT_STEP, 0.0),
            KeyCode::Char('e') => session.camera_mut().orbit(ORBIT_STEP, 0.0),
            KeyCode::Char('r') => session.camera_mut().orbit(0.0, -TILT_STEP),
            KeyCode::Char('f') => session.camera_mut().orbit(0.0, TILT_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => session.camera_mut().zoom(-ZOOM_STEP),
            KeyCode::Char('-') => session.camera_mut().zoom(ZOOM_STEP),
            code => {
                let Some(name) = key_name(code) else {
                    return;
                };
                let action = session.key_down(name);
                self.log_toggle(action, session);
                if name != "shift" {
                    // without release events a repeat arrives as another press
                    self.held
                        .entry(name)
                        .and_modify(|held| {
                            held.last_seen = now;
                            held.repeating = true;
                        })
                        .or_insert(HeldKey {
                            last_seen: now,
                            repeating: key.kind == KeyEventKind::Repeat,
                        });
                }
            }
        }
    }

    fn log_toggle(&mut self, action: Option<KeyAction>, session: &DemoSession) {
        if let Some(KeyAction::ToggleRun) = action {
            let mode = if session.controller().is_run_toggled() { "run" } else { "walk" };
            self.log_info(format!("switched to {mode} mode"));
        }
    }

    fn expire_held(&mut self, session: &mut DemoSession, now: Instant) {
        if self.release_events {
            return;
        }
        self.held.retain(|name, held| {
            let alive = now.saturating_duration_since(held.last_seen) < held.timeout();
            if !alive {
                session.key_up(name);
            }
            alive
        });
    }

    fn focus_lost(&mut self, session: &mut DemoSession) {
        session.release_all();
        self.held.clear();
    }
}

fn key_name(code: KeyCode) -> Option<&'static str> {
    let name = match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => "w",
            'a' => "a",
            's' => "s",
            'd' => "d",
            _ => return None,
        },
        KeyCode::Up => "arrowup",
        KeyCode::Down => "arrowdown",
        KeyCode::Left => "arrowleft",
        KeyCode::Right => "arrowright",
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => "shift",
        _ => return None,
    };
    Some(name)
}

/// Restores the terminal when dropped, on error paths too.
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self {
            keyboard_enhanced: false,
        };
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen, cursor::Show);
    }
}

pub fn run(config: ControllerConfig, fps: u32) -> Result<()> {
    let mut scene = scene::load(config)?;

    let mut guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
            )
        )?;
        guard.keyboard_enhanced = true;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut viewer = ViewerState::new(release_events);
    viewer.log_info("soldier loaded, monster idling at z = -10");
    if !release_events {
        viewer.log_warn("terminal lacks key-release events; use Tab to toggle run");
    }

    event_loop(&mut terminal, &mut scene, &mut viewer, fps)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    scene: &mut DemoScene,
    viewer: &mut ViewerState,
    fps: u32,
) -> Result<()> {
    let frame_budget = Duration::from_secs_f64(1.0 / fps as f64);
    let mut clock = FrameClock::default();

    while viewer.running {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => viewer.handle_key(key, &mut scene.session, frame_start),
                Event::FocusLost => viewer.focus_lost(&mut scene.session),
                _ => {}
            }
        }
        viewer.expire_held(&mut scene.session, frame_start);

        let before = scene.session.controller().current();
        scene.session.frame(clock.tick());
        let after = scene.session.controller().current();
        if before != after {
            viewer.log_info(format!("{before} -> {after}"));
        }

        terminal.draw(|frame| tui::render(frame, scene, viewer))?;

        let spent = frame_start.elapsed();
        if spent < frame_budget {
            // returns early on input; the next frame picks it up
            event::poll(frame_budget - spent)?;
        }
    }

    Ok(())
}
