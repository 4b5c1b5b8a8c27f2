//! Terminal renderer and event loop for `fids run`.
//!
//! One current-thread loop owns the [`BoardRuntime`]. It wakes on the next
//! timer deadline, on fetch completions, on terminal input and on a frame
//! tick, then redraws. Fetches run as tasks and only report back through a
//! channel, so the store is written inside the loop before the next draw.

use std::fmt::Display;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fids_runtime::{BoardRuntime, FeedClient, spawn_fetches};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::presentation::presenter::present_board;
use crate::presentation::views::{BoardLayout, BoardScreenView};

const FRAME_PERIOD: Duration = Duration::from_millis(250);
/// Upper bound on a sleep when no timer is pending
const IDLE_WAKE: Duration = Duration::from_secs(1);

pub struct TuiRenderer {
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    /// Take over the terminal and run the board until quit.
    pub async fn run<Tz>(
        mut self,
        mut runtime: BoardRuntime<Tz>,
        client: Arc<dyn FeedClient>,
    ) -> Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, &mut runtime, client).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<Tz>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        runtime: &mut BoardRuntime<Tz>,
        client: Arc<dyn FeedClient>,
    ) -> Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel();
        let (input_tx, mut input_rx) = mpsc::channel::<Event>(64);

        tokio::task::spawn_blocking(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if input_tx.blocking_send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        let mut frame_tick = tokio::time::interval(FRAME_PERIOD);
        frame_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let origin = Instant::now();
        runtime.start(Utc::now());
        info!("board loop started");

        loop {
            let feeds = runtime.advance(origin.elapsed(), Utc::now());
            if !feeds.is_empty() {
                debug!(?feeds, "requesting feeds");
                spawn_fetches(&client, feeds, &fetch_tx);
            }

            let size = terminal.size()?;
            runtime.set_viewport_rows(BoardLayout::table_viewport_rows(Rect::new(
                0,
                0,
                size.width,
                size.height,
            )));

            let model = present_board(runtime, Utc::now());
            terminal.draw(|f| f.render_widget(BoardScreenView::new(&model), f.area()))?;

            if self.should_quit {
                break;
            }

            let wake = match runtime.next_deadline() {
                Some(deadline) => origin + deadline,
                None => Instant::now() + IDLE_WAKE,
            };

            tokio::select! {
                _ = tokio::time::sleep_until(wake) => {}
                Some(outcome) = fetch_rx.recv() => {
                    runtime.apply(outcome, Utc::now());
                }
                Some(ev) = input_rx.recv() => {
                    self.handle_event(ev);
                }
                _ = frame_tick.tick() => {}
            }
        }

        info!("board loop stopped");
        Ok(())
    }

    fn handle_event(&mut self, ev: Event) {
        if let Event::Key(key) = ev {
            self.handle_key_event(key);
        }
    }

    /// The board needs no input; keys only stop it
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
