use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::celebration::Bounce;
use crate::config::{resolve_difficulty, save_difficulty};
use crate::difficulty::Difficulty;
use crate::quotes::QuoteBank;
use crate::scores::BestScoreStore;
use crate::session::{Completion, Session};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Contents of the completion dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub difficulty: Difficulty,
    pub elapsed_secs: u64,
    pub wpm: u32,
    pub accuracy: u32,
    pub new_best: bool,
}

/// What the event loop should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the trainer needs between events: the current session, the
/// selected tier and the best scores.
#[derive(Debug)]
pub struct App<S: KeyValueStore> {
    bank: QuoteBank,
    difficulty: Difficulty,
    session: Session,
    scores: BestScoreStore<S>,
    summary: Option<Summary>,
    pub celebration: Bounce,
    pub theme: Theme,
}

impl<S: KeyValueStore> App<S> {
    /// `requested` overrides the persisted difficulty and becomes the new
    /// persisted value.
    pub fn new(bank: QuoteBank, store: S, requested: Option<Difficulty>) -> Self {
        let difficulty = resolve_difficulty(&store, requested);
        let mut scores = BestScoreStore::new(store);

        if requested.is_some() {
            if let Err(e) = save_difficulty(scores.backing_mut(), difficulty) {
                log::warn!("failed to persist difficulty: {e}");
            }
        }

        let session = Session::new(bank.pick_quote(difficulty));
        log::info!("starting on {difficulty}");

        Self {
            bank,
            difficulty,
            session,
            scores,
            summary: None,
            celebration: Bounce::new(),
            theme: Theme::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn best(&self) -> u32 {
        self.scores.get(self.difficulty)
    }

    pub fn scores(&self) -> &BestScoreStore<S> {
        &self.scores
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Fresh random quote from the current tier.
    pub fn load_new_quote(&mut self) {
        let quote = self.bank.pick_quote(self.difficulty);
        log::debug!("loaded {} quote: {quote:?}", self.difficulty);
        self.session = Session::new(quote);
        self.clear_overlays();
    }

    /// Same quote, back to idle.
    pub fn restart(&mut self) {
        self.session.reset();
        self.clear_overlays();
    }

    pub fn next_quote(&mut self) {
        self.load_new_quote();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if let Err(e) = save_difficulty(self.scores.backing_mut(), difficulty) {
            log::warn!("failed to persist difficulty: {e}");
        }
        log::info!("difficulty changed to {difficulty}");
        self.load_new_quote();
    }

    pub fn cycle_difficulty(&mut self) {
        self.set_difficulty(self.difficulty.next());
    }

    pub fn close_summary(&mut self) {
        self.summary = None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Full text replacement, as a text field reports it.
    pub fn set_input(&mut self, typed: &str) {
        if let Some(done) = self.session.set_input(typed) {
            self.finish(done);
        }
    }

    pub fn write(&mut self, c: char) {
        if let Some(done) = self.session.write(c) {
            self.finish(done);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(done) = self.session.backspace() {
            self.finish(done);
        }
    }

    pub fn on_tick(&mut self, dt: Duration) {
        self.session.on_tick(dt);
        self.celebration.update(dt);
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Flow {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if ctrl => return Flow::Quit,
            _ => {}
        }

        if self.summary.is_some() {
            match key.code {
                KeyCode::Char('n') => self.next_quote(),
                KeyCode::Char('r') => self.restart(),
                KeyCode::Char('c') => self.close_summary(),
                _ => {}
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.write(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => self.restart(),
            KeyCode::Right => self.next_quote(),
            KeyCode::Tab => self.cycle_difficulty(),
            _ => {}
        }
        Flow::Continue
    }

    fn finish(&mut self, done: Completion) {
        let new_best = self
            .scores
            .record_if_better(self.difficulty, done.metrics.wpm);

        log::info!(
            "completed {} quote in {}s: {} wpm, {}% acc",
            self.difficulty,
            done.elapsed_secs,
            done.metrics.wpm,
            done.metrics.accuracy
        );

        self.summary = Some(Summary {
            difficulty: self.difficulty,
            elapsed_secs: done.elapsed_secs,
            wpm: done.metrics.wpm,
            accuracy: done.metrics.accuracy,
            new_best,
        });

        if new_best {
            self.celebration.start();
        }
    }

    fn clear_overlays(&mut self) {
        self.summary = None;
        self.celebration.stop();
    }
}
