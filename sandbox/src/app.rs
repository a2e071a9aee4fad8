//! Interactive state: cursor, algorithm selection, pacing, input handling.

use std::time::Duration;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use pathlab_grid::{CellKind, Coord};
use pathlab_search::{Algorithm, Engine, EngineError, RunStatus, StepReport};
use rand::rngs::StdRng;

use crate::scatter;

const MIN_TICK: Duration = Duration::from_millis(10);
const MAX_TICK: Duration = Duration::from_millis(640);

/// Everything the sandbox tracks between events.
pub struct App {
    pub engine: Engine,
    /// Keyboard cursor; mouse edits move it too.
    pub cursor: Coord,
    /// Algorithm armed for the next run.
    pub algorithm: Algorithm,
    /// Animation interval between expansions.
    pub tick: Duration,
    pub paused: bool,
    /// One-line feedback shown under the help line.
    pub note: Option<String>,
    /// Whether the whole screen needs repainting.
    pub dirty: bool,
    pub quit: bool,
    rng: StdRng,
}

impl App {
    pub fn new(side: usize, rng: StdRng) -> Self {
        Self {
            engine: Engine::new(side),
            cursor: Coord::ZERO,
            algorithm: Algorithm::Bfs,
            tick: Duration::from_millis(40),
            paused: false,
            note: None,
            dirty: true,
            quit: false,
            rng,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') => self.run_or_pause(),
            KeyCode::Char('r') => {
                self.engine.reset_run();
                self.paused = false;
                self.note = None;
                self.dirty = true;
            }
            KeyCode::Char('c') => {
                // Cancel first so the wipe cannot be rejected as busy.
                self.engine.reset_run();
                let _ = self.engine.clear_board();
                self.paused = false;
                self.note = None;
                self.dirty = true;
            }
            KeyCode::Char('d') => {
                let config = self.engine.config_mut();
                config.diagonal_priority = !config.diagonal_priority;
                self.dirty = true;
            }
            KeyCode::Char('x') => self.scatter(),
            KeyCode::Char('q') => self.place_at_cursor(CellKind::Start),
            KeyCode::Char('e') => self.place_at_cursor(CellKind::End),
            KeyCode::Char(ch @ '1'..='4') => {
                self.algorithm = Algorithm::ALL[ch as usize - '1' as usize];
                self.dirty = true;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.set_tick(self.tick / 2),
            KeyCode::Char('-') => self.set_tick(self.tick * 2),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            _ => {}
        }
    }

    /// Left paints obstacles, right erases; dragging keeps painting.
    pub fn handle_mouse(&mut self, ev: MouseEvent) {
        let c = Coord::new(ev.row as i32, ev.column as i32);
        match ev.kind {
            MouseEventKind::Down(btn) | MouseEventKind::Drag(btn) => {
                if self.engine.board().index_of(c).is_none() {
                    return;
                }
                self.cursor = c;
                let result = match btn {
                    MouseButton::Left => self.engine.place(c, CellKind::Obstacle),
                    MouseButton::Right => self.engine.erase(c),
                    MouseButton::Middle => return,
                };
                match result {
                    Ok(()) => self.dirty = true,
                    Err(e) => self.set_note(e.to_string()),
                }
            }
            _ => {}
        }
    }

    /// Whether the animation loop should step the engine this tick.
    pub fn should_step(&self) -> bool {
        self.engine.is_running() && !self.paused
    }

    /// Advance one expansion; the caller draws the returned deltas.
    pub fn advance(&mut self) -> Option<StepReport> {
        if !self.should_step() {
            return None;
        }
        match self.engine.step() {
            Ok(report) => {
                if report.status.is_terminal() {
                    // Status line changes; the deltas alone do not cover it.
                    self.dirty = true;
                }
                Some(report)
            }
            Err(e) => {
                self.set_note(e.to_string());
                None
            }
        }
    }

    fn run_or_pause(&mut self) {
        if self.engine.status() == RunStatus::Running {
            self.paused = !self.paused;
            self.dirty = true;
            return;
        }
        match self.engine.start(self.algorithm) {
            Ok(()) => {
                self.paused = false;
                self.note = None;
                self.dirty = true;
            }
            Err(e) => self.set_note(e.to_string()),
        }
    }

    fn scatter(&mut self) {
        if self.engine.is_running() {
            self.set_note(EngineError::Busy.to_string());
            return;
        }
        self.engine.reset_run();
        scatter::sprinkle(&mut self.engine, &mut self.rng);
        self.dirty = true;
    }

    fn place_at_cursor(&mut self, kind: CellKind) {
        match self.engine.place(self.cursor, kind) {
            Ok(()) => self.dirty = true,
            Err(e) => self.set_note(e.to_string()),
        }
    }

    fn move_cursor(&mut self, drow: i32, dcol: i32) {
        let next = self.cursor.shift(drow, dcol);
        if self.engine.board().index_of(next).is_some() {
            self.cursor = next;
            self.dirty = true;
        }
    }

    fn set_tick(&mut self, tick: Duration) {
        self.tick = tick.clamp(MIN_TICK, MAX_TICK);
        self.dirty = true;
    }

    fn set_note(&mut self, msg: String) {
        self.note = Some(msg);
        self.dirty = true;
    }
}
