//! Terminal painting. A full repaint covers the board plus the status
//! lines; mid-run frames only touch the cells a step changed.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
    terminal::{self, ClearType},
};
use pathlab_grid::{CellKind, Coord};
use pathlab_search::{CellDelta, RunStatus};

use crate::app::App;

pub fn full(out: &mut impl Write, app: &App) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    let board = app.engine.board();
    for (idx, &kind) in board.cells().iter().enumerate() {
        put_cell(out, app, board.coord_of(idx), kind)?;
    }
    footer(out, app, board.side() as u16)?;
    out.flush()
}

pub fn deltas(out: &mut impl Write, app: &App, changed: &[CellDelta]) -> io::Result<()> {
    for delta in changed {
        put_cell(out, app, delta.coord, delta.kind)?;
    }
    out.flush()
}

fn put_cell(out: &mut impl Write, app: &App, c: Coord, kind: CellKind) -> io::Result<()> {
    let bg = if c == app.cursor {
        Color::DarkGreen
    } else {
        Color::Reset
    };
    queue!(
        out,
        cursor::MoveTo(c.col as u16, c.row as u16),
        style::SetForegroundColor(ink(kind)),
        style::SetBackgroundColor(bg),
        style::Print(kind.glyph()),
    )
}

fn ink(kind: CellKind) -> Color {
    match kind {
        CellKind::Blank => Color::DarkGrey,
        CellKind::Obstacle => Color::White,
        CellKind::Start => Color::Green,
        CellKind::End => Color::Red,
        CellKind::Frontier => Color::Cyan,
        CellKind::Visited => Color::Blue,
        CellKind::Path => Color::Magenta,
    }
}

fn footer(out: &mut impl Write, app: &App, side: u16) -> io::Result<()> {
    let algorithm = if app.engine.is_running() {
        app.engine.algorithm().unwrap_or(app.algorithm)
    } else {
        app.algorithm
    };
    let status = match app.engine.status() {
        RunStatus::Running if app.paused => "paused",
        RunStatus::Running => "running",
        RunStatus::Idle => "idle",
        RunStatus::Succeeded => "done",
        RunStatus::Failed => "no path",
    };
    let heuristic = if app.engine.config().diagonal_priority {
        "diagonal"
    } else {
        "manhattan"
    };
    let mut line = format!(
        "[{}] {}  {} ms/step  {}",
        algorithm.label(),
        status,
        app.tick.as_millis(),
        heuristic,
    );
    if let Some(stats) = app.engine.stats() {
        line.push_str(&format!(
            "  visited {}  path {}",
            stats.visited_count, stats.path_length
        ));
    }
    queue!(
        out,
        style::ResetColor,
        cursor::MoveTo(0, side + 1),
        style::Print(line),
        cursor::MoveTo(0, side + 2),
        style::Print(
            "space run/pause  1-4 algorithm  q/e ends  click/drag draw  x scatter  \
             d heuristic  r reset  c clear  +/- speed  esc quit"
        ),
    )?;
    if let Some(note) = &app.note {
        queue!(
            out,
            cursor::MoveTo(0, side + 3),
            style::SetForegroundColor(Color::Yellow),
            style::Print(note),
            style::ResetColor,
        )?;
    }
    Ok(())
}
