//! Terminal animation of a running search.
//!
//! [`TerminalAnimator`] is a [`StepObserver`]: after every expansion it redraws
//! the maze with the explored nodes and the current node, then waits for the
//! configured delay. While waiting it listens for Esc, `q`, `s` or Ctrl+C and
//! interrupts the search when one is pressed.

use std::io::{self, Stdout, Write};
use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, ClearType},
};
use log::{debug, warn};

use crate::config::RunConfig;
use crate::geometry::Position;
use crate::graph_algos::{Algorithm, StepObserver};
use crate::grid::Grid;
use crate::render::{Markers, Snapshot};
use crate::report::title_box;


/// Keys that skip the rest of an animation
fn is_skip_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('s') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}


/// Draws each search step to a terminal
pub struct TerminalAnimator<'g, W: Write> {
    out: W,
    grid: &'g Grid,
    title: String,
    delay: Duration,
    markers: Markers,
    listening: bool, // raw mode enabled, keys are read while waiting
}

impl<'g> TerminalAnimator<'g, Stdout> {

    /// Animator on stdout that listens for skip keys
    /// Raw mode stays enabled until the animator is dropped
    pub fn stdout(grid: &'g Grid, algorithm: Algorithm, config: &RunConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut animator = Self::new(io::stdout(), grid, algorithm, config.delay, config.markers);
        animator.listening = true;
        queue!(animator.out, cursor::Hide)?;
        Ok(animator)
    }
}

impl<'g, W: Write> TerminalAnimator<'g, W> {

    /// Animator on any writer, sleeps between frames without reading keys
    pub fn new(out: W, grid: &'g Grid, algorithm: Algorithm, delay: Duration, markers: Markers) -> Self {
        Self {
            out,
            grid,
            title: algorithm.name().to_string(),
            delay,
            markers,
            listening: false,
        }
    }

    /// Clear the screen and draw the title and the maze
    /// Every line is placed with an explicit cursor move, raw mode does not translate newlines
    pub fn draw_frame(&mut self, current: Position, visited: &[Position]) -> io::Result<()> {
        let snapshot = Snapshot::in_progress(self.grid, visited, current, self.markers);

        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let title = title_box(&self.title);
        let lines = title
            .lines()
            .map(str::to_string)
            .chain(std::iter::once(String::new()))
            .chain(snapshot.lines());

        for (row, line) in lines.enumerate() {
            let row = u16::try_from(row).unwrap_or(u16::MAX);
            queue!(self.out, cursor::MoveTo(0, row), Print(line))?;
        }
        self.out.flush()
    }

    /// Wait out the frame delay, returns true if a skip key was pressed
    fn wait(&self) -> io::Result<bool> {
        if !self.listening {
            thread::sleep(self.delay);
            return Ok(false);
        }

        let deadline = Instant::now() + self.delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(false);
            }
            if let Event::Key(key) = event::read()? {
                if is_skip_key(&key) {
                    return Ok(true);
                }
            }
            if remaining.is_zero() {
                return Ok(false);
            }
        }
    }
}

impl<W: Write> StepObserver for TerminalAnimator<'_, W> {
    fn on_step(&mut self, current: Position, visited: &[Position]) -> ControlFlow<()> {
        match self.draw_frame(current, visited).and_then(|()| self.wait()) {
            Ok(false) => ControlFlow::Continue(()),
            Ok(true) => {
                debug!("{}: animation skipped at {current}", self.title);
                ControlFlow::Break(())
            }
            Err(e) => {
                warn!("{}: animation stopped, terminal error: {e}", self.title);
                ControlFlow::Break(())
            }
        }
    }
}

impl<W: Write> Drop for TerminalAnimator<'_, W> {
    fn drop(&mut self) {
        if self.listening {
            let _ = queue!(self.out, cursor::Show);
            let _ = self.out.flush();
            if let Err(e) = terminal::disable_raw_mode() {
                warn!("unable to leave raw mode: {e}");
            }
        }
    }
}
