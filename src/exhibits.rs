//! Interactive state for the info pages: the rotating prediction monitor,
//! the impact analysis board and the art challenge likes.

use std::time::Duration;

use tokio::time::Instant;

use crate::content::{IMPACT_CATEGORIES, IMPACT_METRICS, PREDICTION_PHASES, SOLAR_ACTIVITY_READINGS};

/// Cycles through [`PREDICTION_PHASES`] forever, one step per interval, and
/// takes a fresh solar activity reading on every step.
#[derive(Debug, Clone)]
pub struct PredictionReel {
    steps: usize,
    step: Duration,
    next_at: Option<Instant>,
}

impl PredictionReel {
    pub fn new(step: Duration) -> Self {
        Self {
            steps: 0,
            step,
            next_at: None,
        }
    }

    pub fn phase(&self) -> usize {
        self.steps % PREDICTION_PHASES.len()
    }

    pub fn solar_activity(&self) -> u8 {
        SOLAR_ACTIVITY_READINGS[self.steps % SOLAR_ACTIVITY_READINGS.len()]
    }

    /// Restarts from the first phase.
    pub fn start(&mut self, now: Instant) {
        self.steps = 0;
        self.next_at = Some(now + self.step);
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
                self.steps += 1;
                self.next_at = Some(deadline + self.step);
                true
            }
            _ => false,
        }
    }
}

/// Cursor over the impact metrics and categories, with at most one
/// category expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpactBoard {
    metric: usize,
    category: usize,
    expanded: Option<usize>,
}

impl ImpactBoard {
    pub fn metric(&self) -> usize {
        self.metric
    }

    pub fn category(&self) -> usize {
        self.category
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn next_metric(&mut self) {
        self.metric = (self.metric + 1) % IMPACT_METRICS.len();
    }

    pub fn previous_metric(&mut self) {
        self.metric = (self.metric + IMPACT_METRICS.len() - 1) % IMPACT_METRICS.len();
    }

    pub fn next_category(&mut self) {
        self.category = (self.category + 1) % IMPACT_CATEGORIES.len();
    }

    pub fn previous_category(&mut self) {
        self.category = (self.category + IMPACT_CATEGORIES.len() - 1) % IMPACT_CATEGORIES.len();
    }

    /// Expands the category under the cursor, or collapses it if it is
    /// already open.
    pub fn toggle(&mut self) {
        self.expanded = match self.expanded {
            Some(open) if open == self.category => None,
            _ => Some(self.category),
        };
    }
}

/// Like counts for the art challenge selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtBoard {
    likes: Vec<u32>,
    selected: usize,
}

impl ArtBoard {
    pub fn new(artworks: usize) -> Self {
        Self {
            likes: vec![0; artworks],
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.likes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn likes(&self, index: usize) -> u32 {
        self.likes.get(index).copied().unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        if !self.likes.is_empty() {
            self.selected = (self.selected + 1) % self.likes.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.likes.is_empty() {
            let len = self.likes.len();
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn like_selected(&mut self) {
        if let Some(count) = self.likes.get_mut(self.selected) {
            *count += 1;
        }
    }

    /// The artwork with the most likes. Ties go to the earliest one, so
    /// before any likes this is the first artwork.
    pub fn most_loved(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, &count) in self.likes.iter().enumerate() {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((index, count));
            }
        }
        best.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_prediction_reel_cycles_phases() {
        let start = Instant::now();
        let mut reel = PredictionReel::new(ms(4000));
        assert_eq!(reel.next_deadline(), None);

        reel.start(start);
        assert_eq!(reel.phase(), 0);
        assert!(!reel.tick(start + ms(3999)));

        let mut now = start;
        let mut seen = Vec::new();
        for _ in 0..5 {
            now += ms(4000);
            assert!(reel.tick(now));
            seen.push(reel.phase());
        }
        assert_eq!(seen, [1, 2, 3, 0, 1]);
        assert_eq!(reel.next_deadline(), Some(now + ms(4000)));
    }

    #[test]
    fn test_prediction_reading_changes_each_phase() {
        let start = Instant::now();
        let mut reel = PredictionReel::new(ms(4000));
        reel.start(start);

        let first = reel.solar_activity();
        reel.tick(start + ms(4000));
        assert_ne!(reel.solar_activity(), first);
    }

    #[test]
    fn test_stopped_reel_never_advances() {
        let start = Instant::now();
        let mut reel = PredictionReel::new(ms(4000));
        reel.start(start);
        reel.stop();
        assert!(!reel.tick(start + ms(60_000)));
        assert_eq!(reel.phase(), 0);
    }

    #[test]
    fn test_impact_toggle_expands_one_category() {
        let mut board = ImpactBoard::default();
        board.toggle();
        assert_eq!(board.expanded(), Some(0));

        board.next_category();
        board.toggle();
        assert_eq!(board.expanded(), Some(1));
        board.toggle();
        assert_eq!(board.expanded(), None);

        board.previous_metric();
        assert_eq!(board.metric(), IMPACT_METRICS.len() - 1);
    }

    #[test]
    fn test_most_loved_prefers_earliest_on_tie() {
        let mut board = ArtBoard::new(4);
        assert_eq!(board.most_loved(), Some(0));

        board.select_next();
        board.select_next();
        board.like_selected();
        assert_eq!(board.most_loved(), Some(2));

        board.select_previous();
        board.like_selected();
        assert_eq!(board.likes(1), 1);
        assert_eq!(board.most_loved(), Some(1));

        board.like_selected();
        assert_eq!(board.most_loved(), Some(1));
        assert_eq!(ArtBoard::new(0).most_loved(), None);
    }
}
