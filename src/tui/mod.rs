//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` and `views` so the picker core never depends on terminal crates.

pub mod crossterm;
pub mod terminal_guard;

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::app::DemoHost;
use crate::ui::backend::terminal::RatatuiTerminal;

use self::crossterm::into_input_event;
use self::terminal_guard::{TerminalGuard, TerminationSignal};

const FRAME: Duration = Duration::from_millis(16);

/// Runs the host until it quits or a termination signal arrives; the signal is returned so
/// the caller can exit with the matching status once the terminal is restored.
pub fn run(host: &mut DemoHost) -> io::Result<Option<TerminationSignal>> {
    let guard = TerminalGuard::new()?;
    let (tx, rx) = mpsc::channel();
    #[cfg(unix)]
    let _watcher = terminal_guard::install_termination_signals(guard.restorer(), tx)?;
    #[cfg(not(unix))]
    drop(tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut dirty = true;
    let signal = loop {
        if let Ok(signal) = rx.try_recv() {
            break Some(signal);
        }
        if dirty {
            terminal.draw(|backend, area| host.render(backend, area))?;
            dirty = false;
        }
        if ::crossterm::event::poll(FRAME)? {
            if let Some(event) = into_input_event(::crossterm::event::read()?) {
                dirty |= host.handle_input(&event, Instant::now());
            }
        }
        dirty |= host.tick(Instant::now());
        if host.should_quit() {
            break None;
        }
    };

    drop(guard);
    Ok(signal)
}
