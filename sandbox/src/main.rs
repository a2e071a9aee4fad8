//! pathlab — an interactive path-search sandbox in the terminal.
//!
//! Draw obstacles with the mouse, drop the endpoints, pick an algorithm
//! and watch it explore the board one expansion per animation tick.

mod app;
mod draw;
mod scatter;

use std::io;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use app::App;

/// Board side length, in cells.
const BOARD_SIDE: usize = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_nanos() as u64;
    let mut app = App::new(BOARD_SIDE, StdRng::seed_from_u64(seed));
    init()?;
    let result = run(&mut app);
    close();
    result
}

fn init() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All),
        event::EnableMouseCapture
    )?;
    Ok(())
}

fn close() {
    let mut stdout = io::stdout();
    let _ = execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}

fn run(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    draw::full(&mut stdout, app)?;
    app.dirty = false;

    let mut next_tick = Instant::now() + app.tick;
    loop {
        let wait = next_tick.saturating_duration_since(Instant::now());
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => app.handle_key(code),
                Event::Mouse(me) => app.handle_mouse(me),
                Event::Resize(_, _) => app.dirty = true,
                _ => {}
            }
        }
        if Instant::now() >= next_tick {
            next_tick = Instant::now() + app.tick;
            if let Some(report) = app.advance() {
                draw::deltas(&mut stdout, app, &report.changed)?;
            }
        }
        if app.quit {
            return Ok(());
        }
        if app.dirty {
            draw::full(&mut stdout, app)?;
            app.dirty = false;
        }
    }
}
