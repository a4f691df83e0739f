use serde::Deserialize;

/// Coarse feedback for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    NeedsReview,
}

impl Tier {
    pub fn headline(self, character_name: &str) -> String {
        match self {
            Tier::Excellent => format!("Congratulations! You Saved the {}!", character_name),
            Tier::Good => format!("Good Job! The {} is Safer!", character_name),
            Tier::NeedsReview => format!("The {} Needs More Protection!", character_name),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent Knowledge!",
            Tier::Good => "Good Knowledge!",
            Tier::NeedsReview => "Review Needed",
        }
    }
}

/// Tier boundaries as percentages of the question count.
///
/// The defaults reproduce the five-question design: 4 or more correct is
/// excellent, exactly 3 is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub excellent_percent: u32,
    pub good_percent: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            excellent_percent: 80,
            good_percent: 60,
        }
    }
}

impl Thresholds {
    pub fn classify(&self, score: usize, total: usize) -> Tier {
        if total == 0 {
            return Tier::NeedsReview;
        }

        // score / total >= percent / 100, kept in integers so boundaries are exact
        let reaches = |percent: u32| score * 100 >= percent as usize * total;

        if reaches(self.excellent_percent) {
            Tier::Excellent
        } else if reaches(self.good_percent) {
            Tier::Good
        } else {
            Tier::NeedsReview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_question_boundaries() {
        let thresholds = Thresholds::default();

        assert_eq!(thresholds.classify(5, 5), Tier::Excellent);
        assert_eq!(thresholds.classify(4, 5), Tier::Excellent);
        assert_eq!(thresholds.classify(3, 5), Tier::Good);
        assert_eq!(thresholds.classify(2, 5), Tier::NeedsReview);
        assert_eq!(thresholds.classify(0, 5), Tier::NeedsReview);
    }

    #[test]
    fn test_scales_with_question_count() {
        let thresholds = Thresholds::default();

        assert_eq!(thresholds.classify(8, 10), Tier::Excellent);
        assert_eq!(thresholds.classify(7, 10), Tier::Good);
        assert_eq!(thresholds.classify(6, 10), Tier::Good);
        assert_eq!(thresholds.classify(5, 10), Tier::NeedsReview);
        assert_eq!(thresholds.classify(2, 3), Tier::Good);
        assert_eq!(thresholds.classify(3, 3), Tier::Excellent);
    }

    #[test]
    fn test_empty_run_needs_review() {
        assert_eq!(Thresholds::default().classify(0, 0), Tier::NeedsReview);
    }

    #[test]
    fn test_headline_mentions_character() {
        assert_eq!(
            Tier::Good.headline("Farmer"),
            "Good Job! The Farmer is Safer!"
        );
    }
}
