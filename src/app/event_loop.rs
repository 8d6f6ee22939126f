use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::{self, DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::app::{App, Message, Model, update};
use crate::demo::TickContext;

/// Longest the loop sleeps when no timer is pending.
pub(super) const MAX_WAIT_MS: u64 = 250;

/// How long to wait for input before the next timer is due.
pub(super) fn poll_timeout(deadline: Option<u64>, now_ms: u64) -> Duration {
    let wait = deadline.map_or(MAX_WAIT_MS, |at| at.saturating_sub(now_ms).min(MAX_WAIT_MS));
    Duration::from_millis(wait)
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn tick(start: Instant) -> TickContext {
    TickContext::new(elapsed_ms(start), Local::now().time())
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or event I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; segmatrix requires an interactive terminal")?;
        let focus_reporting = execute!(stdout(), EnableFocusChange).is_ok();

        let start = Instant::now();
        let mut model = Model::with_demos(&self.demos, &tick(start));
        info!(matrices = model.registry.len(), "host started");

        let result = Self::event_loop(&mut terminal, &mut model, start);

        if focus_reporting {
            let _ = execute!(stdout(), DisableFocusChange);
        }
        ratatui::restore();
        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model, start: Instant) -> Result<()> {
        loop {
            if model.dirty {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                model.dirty = false;
            }
            if model.should_quit {
                break;
            }

            let wait = poll_timeout(model.registry.next_deadline(), elapsed_ms(start));
            let mut messages = Vec::new();
            if event::poll(wait)? {
                messages.extend(Self::handle_event(&event::read()?));
                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::ZERO)? {
                    messages.extend(Self::handle_event(&event::read()?));
                }
            }

            *model = update(std::mem::take(model), Message::Tick(tick(start)));
            for msg in messages {
                debug!(?msg, "message");
                *model = update(std::mem::take(model), msg);
            }
        }
        info!("host stopped");
        Ok(())
    }
}
