//! The story page: an auto-advancing reel of lines and the yes/no prompt
//! that takes over the forward control.

use std::time::Duration;

use tokio::time::Instant;

use crate::content::{MODAL_NO, MODAL_YES, STORY_LINES};

/// Walks through [`STORY_LINES`], one step per `step` interval.
#[derive(Debug, Clone)]
pub struct StoryReel {
    index: usize,
    step: Duration,
    next_at: Option<Instant>,
}

impl StoryReel {
    pub fn new(step: Duration) -> Self {
        Self {
            index: 0,
            step,
            next_at: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn visible_lines(&self) -> &'static [&'static str] {
        &STORY_LINES[..=self.index]
    }

    /// The continue prompt shows once the last line is reached.
    pub fn is_finished(&self) -> bool {
        self.index + 1 == STORY_LINES.len()
    }

    /// Restarts from the first line.
    pub fn start(&mut self, now: Instant) {
        self.index = 0;
        self.schedule(now);
    }

    pub fn stop(&mut self) {
        self.next_at = None;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_at
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_at {
            Some(deadline) if now >= deadline => {
                self.index = (self.index + 1).min(STORY_LINES.len() - 1);
                self.schedule(deadline);
                true
            }
            _ => false,
        }
    }

    pub fn step_forward(&mut self, now: Instant) {
        self.index = (self.index + 1).min(STORY_LINES.len() - 1);
        self.schedule(now);
    }

    pub fn step_back(&mut self, now: Instant) {
        self.index = self.index.saturating_sub(1);
        self.schedule(now);
    }

    fn schedule(&mut self, from: Instant) {
        self.next_at = (!self.is_finished()).then(|| from + self.step);
    }
}

/// The "do you know about space weather?" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryModal {
    selected_yes: bool,
    answer: Option<&'static str>,
    redirect_at: Option<Instant>,
}

impl Default for StoryModal {
    fn default() -> Self {
        Self {
            selected_yes: true,
            answer: None,
            redirect_at: None,
        }
    }
}

impl StoryModal {
    pub fn selected_yes(&self) -> bool {
        self.selected_yes
    }

    pub fn toggle(&mut self) {
        if self.answer.is_none() {
            self.selected_yes = !self.selected_yes;
        }
    }

    pub fn answer(&self) -> Option<&'static str> {
        self.answer
    }

    /// Records the highlighted answer and schedules the redirect. Ignored
    /// once an answer has been given.
    pub fn confirm(&mut self, now: Instant, delay: Duration) {
        if self.answer.is_some() {
            return;
        }
        self.answer = Some(if self.selected_yes { MODAL_YES } else { MODAL_NO });
        self.redirect_at = Some(now + delay);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.redirect_at
    }

    /// True once the redirect delay has run out.
    pub fn redirect_due(&self, now: Instant) -> bool {
        self.redirect_at.is_some_and(|at| now >= at)
    }
}
