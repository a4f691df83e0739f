use tokio::time::Instant;
use tracing::{debug, warn};

use crate::config::{Timings, TourConfig};
use crate::content::{ARTWORKS, GALLERY};
use crate::data::QuestionBank;
use crate::exhibits::{ArtBoard, ImpactBoard, PredictionReel};
use crate::models::{Character, PageId};
use crate::nav::{Edge, NavEvent, NavOutcome, Navigator, TourGraph};
use crate::quiz::{AnswerFeedback, QuizError, QuizProgress, QuizRun, Thresholds, Tier};
use crate::storm::{self, DEFAULT_INTENSITY, StormSliders};
use crate::story::{StoryModal, StoryReel};

/// A running quiz plus the option the cursor is on.
pub struct QuizView {
    run: QuizRun,
    selected_option: usize,
}

impl QuizView {
    pub fn run(&self) -> &QuizRun {
        &self.run
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }
}

pub struct App {
    navigator: Navigator,
    roster: Vec<Character>,
    bank: QuestionBank,
    timings: Timings,
    thresholds: Thresholds,
    story: StoryReel,
    modal: Option<StoryModal>,
    gallery_index: usize,
    selected_character: usize,
    intensity: u8,
    quiz: Option<QuizView>,
    impact: ImpactBoard,
    sliders: StormSliders,
    prediction: PredictionReel,
    art: ArtBoard,
    notice: Option<String>,
}

impl App {
    pub fn new(roster: Vec<Character>, bank: QuestionBank, config: &TourConfig, now: Instant) -> Self {
        let mut navigator = Navigator::new(TourGraph::stellar_tour(), config.timings.nav(), now);
        // The story page answers the forward control with its yes/no prompt.
        navigator.register_next_intercept(PageId::Story);

        Self {
            navigator,
            roster,
            bank,
            timings: config.timings,
            thresholds: config.thresholds,
            story: StoryReel::new(config.timings.story_step()),
            modal: None,
            gallery_index: 0,
            selected_character: 0,
            intensity: DEFAULT_INTENSITY,
            quiz: None,
            impact: ImpactBoard::default(),
            sliders: StormSliders::default(),
            prediction: PredictionReel::new(config.timings.prediction_step()),
            art: ArtBoard::new(ARTWORKS.len()),
            notice: None,
        }
    }

    pub fn current_page(&self) -> PageId {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn is_loading(&self) -> bool {
        self.navigator.is_loading()
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    /// Pages only take input once loading is over and no transition runs.
    pub fn is_interactive(&self) -> bool {
        !self.is_loading() && !self.is_transitioning()
    }

    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.roster.get(self.selected_character)
    }

    pub fn selected_character_index(&self) -> usize {
        self.selected_character
    }

    /// Characters shown on the detail page: the one it was opened for, or
    /// the whole roster when it was reached some other way.
    pub fn detail_characters(&self) -> Vec<&Character> {
        match self.navigator.context() {
            Some(selected) => self.roster.iter().filter(|c| c.id == selected.id).collect(),
            None => self.roster.iter().collect(),
        }
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn story(&self) -> &StoryReel {
        &self.story
    }

    pub fn modal(&self) -> Option<&StoryModal> {
        self.modal.as_ref()
    }

    pub fn gallery_index(&self) -> usize {
        self.gallery_index
    }

    pub fn quiz(&self) -> Option<&QuizView> {
        self.quiz.as_ref()
    }

    pub fn impact(&self) -> &ImpactBoard {
        &self.impact
    }

    pub fn sliders(&self) -> &StormSliders {
        &self.sliders
    }

    pub fn prediction(&self) -> &PredictionReel {
        &self.prediction
    }

    pub fn art(&self) -> &ArtBoard {
        &self.art
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn quiz_tier(&self) -> Option<Tier> {
        self.quiz.as_ref()?.run.tier(&self.thresholds)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    // Navigation

    pub fn go_next(&mut self, now: Instant) -> NavOutcome {
        let outcome = self.navigator.next(now);
        if let NavOutcome::Intercepted(PageId::Story) = outcome {
            self.open_modal();
        }
        self.note_outcome(outcome)
    }

    pub fn go_back(&mut self, now: Instant) -> NavOutcome {
        let outcome = self.navigator.back(now);
        self.note_outcome(outcome)
    }

    pub fn follow(&mut self, edge: Edge, now: Instant) -> NavOutcome {
        let outcome = self.navigator.follow(edge, now);
        self.note_outcome(outcome)
    }

    pub fn jump_to(&mut self, index: usize, now: Instant) -> NavOutcome {
        let outcome = self.navigator.navigate_to_index(index, now);
        self.note_outcome(outcome)
    }

    /// Opens the detail page for the highlighted character.
    pub fn open_detail(&mut self, now: Instant) -> NavOutcome {
        let Some(character) = self.selected_character() else {
            return NavOutcome::NoRoute;
        };
        let outcome = self.navigator.open_detail(character.to_ref(), now);
        self.note_outcome(outcome)
    }

    fn note_outcome(&mut self, outcome: NavOutcome) -> NavOutcome {
        if outcome == NavOutcome::Busy {
            self.notice = Some("Still travelling, hold on...".to_string());
        }
        outcome
    }

    // Timers

    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.navigator.next_deadline(),
            self.story.next_deadline(),
            self.prediction.next_deadline(),
            self.modal.as_ref().and_then(StoryModal::next_deadline),
            self.quiz.as_ref().and_then(|q| q.run.next_deadline()),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Applies everything that has come due by `now`.
    pub fn tick(&mut self, now: Instant) {
        for event in self.navigator.tick(now) {
            match event {
                NavEvent::Committed { from, to } => {
                    self.leave_page(from);
                    self.enter_page(to, now);
                }
                NavEvent::LoadingFinished | NavEvent::Settled(_) => {}
            }
        }

        match self.current_page() {
            PageId::Story => {
                self.story.tick(now);
            }
            PageId::Prediction => {
                self.prediction.tick(now);
            }
            _ => {}
        }

        if self.modal.as_ref().is_some_and(|m| m.redirect_due(now)) {
            self.modal = None;
            self.follow(Edge::Skip, now);
        }

        if let Some(quiz) = &mut self.quiz {
            if let Some(QuizProgress::Advanced(_)) = quiz.run.tick(now) {
                quiz.selected_option = 0;
            }
        }
    }

    /// Drops everything scoped to `page`, pending timers included.
    fn leave_page(&mut self, page: PageId) {
        self.notice = None;
        match page {
            PageId::Story => {
                self.story.stop();
                self.modal = None;
            }
            PageId::DamageSimulator => {
                if self.quiz.take().is_some() {
                    debug!("quiz closed by navigation");
                }
            }
            PageId::Prediction => self.prediction.stop(),
            _ => {}
        }
    }

    fn enter_page(&mut self, page: PageId, now: Instant) {
        match page {
            PageId::Story => self.story.start(now),
            PageId::Gallery => self.gallery_index = 0,
            PageId::ImpactAnalysis => self.impact = ImpactBoard::default(),
            PageId::StormSliders => self.sliders = StormSliders::default(),
            PageId::Prediction => self.prediction.start(now),
            PageId::ArtChallenge => self.art = ArtBoard::new(ARTWORKS.len()),
            _ => {}
        }
    }

    // Story page

    pub fn open_modal(&mut self) {
        if self.modal.is_none() {
            self.modal = Some(StoryModal::default());
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn toggle_modal_choice(&mut self) {
        if let Some(modal) = &mut self.modal {
            modal.toggle();
        }
    }

    pub fn confirm_modal(&mut self, now: Instant) {
        let delay = self.timings.redirect();
        if let Some(modal) = &mut self.modal {
            modal.confirm(now, delay);
        }
    }

    pub fn story_forward(&mut self, now: Instant) {
        self.story.step_forward(now);
    }

    pub fn story_back(&mut self, now: Instant) {
        self.story.step_back(now);
    }

    // Gallery

    pub fn gallery_next(&mut self) {
        self.gallery_index = (self.gallery_index + 1) % GALLERY.len();
    }

    pub fn gallery_previous(&mut self) {
        self.gallery_index = (self.gallery_index + GALLERY.len() - 1) % GALLERY.len();
    }

    // Damage simulator

    pub fn select_next_character(&mut self) {
        if !self.roster.is_empty() {
            self.selected_character = (self.selected_character + 1) % self.roster.len();
        }
    }

    pub fn select_previous_character(&mut self) {
        if !self.roster.is_empty() {
            let len = self.roster.len();
            self.selected_character = (self.selected_character + len - 1) % len;
        }
    }

    pub fn raise_intensity(&mut self) {
        self.intensity = storm::raise(self.intensity);
    }

    pub fn lower_intensity(&mut self) {
        self.intensity = storm::lower(self.intensity);
    }

    // Impact analysis

    pub fn next_metric(&mut self) {
        self.impact.next_metric();
    }

    pub fn previous_metric(&mut self) {
        self.impact.previous_metric();
    }

    pub fn next_category(&mut self) {
        self.impact.next_category();
    }

    pub fn previous_category(&mut self) {
        self.impact.previous_category();
    }

    pub fn toggle_category(&mut self) {
        self.impact.toggle();
    }

    // Storm sliders

    pub fn select_next_source(&mut self) {
        self.sliders.select_next();
    }

    pub fn select_previous_source(&mut self) {
        self.sliders.select_previous();
    }

    pub fn raise_source(&mut self) {
        self.sliders.raise_selected();
    }

    pub fn lower_source(&mut self) {
        self.sliders.lower_selected();
    }

    // Art challenge

    pub fn select_next_artwork(&mut self) {
        self.art.select_next();
    }

    pub fn select_previous_artwork(&mut self) {
        self.art.select_previous();
    }

    pub fn like_artwork(&mut self) {
        self.art.like_selected();
        debug!(artwork = self.art.selected(), "artwork liked");
    }

    /// Starts a quiz for the highlighted character.
    pub fn start_quiz(&mut self) -> Result<(), QuizError> {
        let Some(character) = self.selected_character() else {
            return Err(QuizError::NoCharacter);
        };
        let run = QuizRun::start(&self.bank, &character.id, self.timings.reveal())?;
        self.quiz = Some(QuizView {
            run,
            selected_option: 0,
        });
        Ok(())
    }

    pub fn close_quiz(&mut self) {
        self.quiz = None;
    }

    pub fn retry_quiz(&mut self) {
        if let Some(quiz) = &mut self.quiz {
            quiz.run.reset();
            quiz.selected_option = 0;
        }
    }

    pub fn select_next_option(&mut self) {
        if let Some(quiz) = &mut self.quiz {
            let options = quiz.run.current_question().options.len();
            quiz.selected_option = (quiz.selected_option + 1) % options;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(quiz) = &mut self.quiz {
            let options = quiz.run.current_question().options.len();
            quiz.selected_option = (quiz.selected_option + options - 1) % options;
        }
    }

    pub fn submit_answer(&mut self, now: Instant) -> Result<AnswerFeedback, QuizError> {
        let Some(quiz) = &mut self.quiz else {
            warn!("answer submitted without a running quiz");
            return Err(QuizError::NotRunning);
        };
        quiz.run.submit_answer(quiz.selected_option, now)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::data::{default_questions, default_roster};
    use crate::storm::StormSource;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn app() -> (App, Instant) {
        let start = Instant::now();
        let bank = QuestionBank::new(default_questions().unwrap());
        let mut app = App::new(default_roster().unwrap(), bank, &TourConfig::default(), start);
        let now = start + ms(2000);
        app.tick(now);
        (app, now)
    }

    fn arrive(app: &mut App, now: Instant) -> Instant {
        let now = now + ms(400);
        app.tick(now);
        now
    }

    #[test]
    fn test_next_on_story_opens_modal() {
        let (mut app, now) = app();
        app.go_next(now);
        let now = arrive(&mut app, now);
        assert_eq!(app.current_page(), PageId::Story);

        assert_eq!(app.go_next(now), NavOutcome::Intercepted(PageId::Story));
        assert!(app.modal().is_some());
        assert_eq!(app.current_page(), PageId::Story);
    }

    #[test]
    fn test_modal_answer_redirects_to_gallery() {
        let (mut app, now) = app();
        app.go_next(now);
        let now = arrive(&mut app, now);

        app.open_modal();
        app.confirm_modal(now);
        app.tick(now + ms(1999));
        assert!(app.modal().is_some());

        app.tick(now + ms(2000));
        assert!(app.modal().is_none());
        assert!(app.is_transitioning());
        arrive(&mut app, now + ms(2000));
        assert_eq!(app.current_page(), PageId::Gallery);
    }

    #[test]
    fn test_leaving_story_cancels_redirect() {
        let (mut app, now) = app();
        app.go_next(now);
        let now = arrive(&mut app, now);

        app.open_modal();
        app.confirm_modal(now);
        app.go_back(now);
        let now = arrive(&mut app, now);
        assert_eq!(app.current_page(), PageId::Welcome);
        assert!(app.modal().is_none());
        assert_eq!(app.next_deadline(), None);

        app.tick(now + ms(5000));
        assert_eq!(app.current_page(), PageId::Welcome);
    }

    #[test]
    fn test_leaving_simulator_drops_quiz_timer() {
        let (mut app, now) = app();
        app.jump_to(PageId::DamageSimulator.index(), now);
        let now = arrive(&mut app, now);

        app.start_quiz().unwrap();
        app.submit_answer(now).unwrap();
        assert!(app.next_deadline().is_some());

        app.go_next(now);
        arrive(&mut app, now);
        assert_eq!(app.current_page(), PageId::ImpactAnalysis);
        assert!(app.quiz().is_none());
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_detail_shows_selected_character_only() {
        let (mut app, now) = app();
        app.jump_to(PageId::DamageSimulator.index(), now);
        let now = arrive(&mut app, now);

        app.select_next_character();
        app.open_detail(now);
        let now = arrive(&mut app, now);
        assert_eq!(app.current_page(), PageId::Detail);
        let shown: Vec<_> = app.detail_characters().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(shown, ["fisherman"]);

        app.go_next(now);
        let now = arrive(&mut app, now);
        app.go_back(now);
        arrive(&mut app, now);
        assert_eq!(app.current_page(), PageId::Detail);
        assert_eq!(app.detail_characters().len(), 4);
    }

    #[test]
    fn test_quiz_flow_reaches_tier() {
        let (mut app, now) = app();
        app.jump_to(PageId::DamageSimulator.index(), now);
        let mut now = arrive(&mut app, now);

        app.start_quiz().unwrap();
        for _ in 0..5 {
            app.select_next_option();
            app.submit_answer(now).unwrap();
            assert!(matches!(
                app.submit_answer(now),
                Err(QuizError::AlreadyAnswered(_))
            ));
            now += ms(2000);
            app.tick(now);
        }

        assert_eq!(app.quiz().unwrap().run().score(), 5);
        assert_eq!(app.quiz_tier(), Some(Tier::Excellent));

        app.retry_quiz();
        assert_eq!(app.quiz_tier(), None);
        assert_eq!(app.quiz().unwrap().run().score(), 0);
    }

    #[test]
    fn test_busy_navigation_sets_notice() {
        let (mut app, now) = app();
        app.go_next(now);
        assert_eq!(app.jump_to(5, now), NavOutcome::Busy);
        assert!(app.notice().is_some());
        arrive(&mut app, now);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_prediction_reel_runs_only_on_its_page() {
        let (mut app, now) = app();
        assert_eq!(app.prediction().next_deadline(), None);

        app.jump_to(PageId::Prediction.index(), now);
        let now = arrive(&mut app, now);
        assert_eq!(app.prediction().phase(), 0);

        app.tick(now + ms(4000));
        assert_eq!(app.prediction().phase(), 1);

        app.go_back(now + ms(4000));
        arrive(&mut app, now + ms(4000));
        assert_eq!(app.current_page(), PageId::StormSliders);
        assert_eq!(app.prediction().next_deadline(), None);
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_page_state_resets_on_entry() {
        let (mut app, now) = app();
        app.jump_to(PageId::StormSliders.index(), now);
        let now = arrive(&mut app, now);
        app.raise_source();
        assert_eq!(app.sliders().level(StormSource::SolarFlare), 5);
        assert_eq!(app.intensity(), DEFAULT_INTENSITY);

        app.go_next(now);
        let now = arrive(&mut app, now);
        app.jump_to(PageId::ArtChallenge.index(), now);
        let now = arrive(&mut app, now);
        app.select_next_artwork();
        app.like_artwork();
        assert_eq!(app.art().most_loved(), Some(1));

        app.jump_to(PageId::StormSliders.index(), now);
        let now = arrive(&mut app, now);
        assert_eq!(app.sliders().level(StormSource::SolarFlare), 0);
        app.jump_to(PageId::ArtChallenge.index(), now);
        arrive(&mut app, now);
        assert_eq!(app.art().most_loved(), Some(0));
        assert_eq!(app.art().likes(1), 0);
    }

    #[test]
    fn test_start_quiz_without_roster() {
        let start = Instant::now();
        let bank = QuestionBank::new(default_questions().unwrap());
        let mut app = App::new(Vec::new(), bank, &TourConfig::default(), start);
        assert_eq!(app.start_quiz(), Err(QuizError::NoCharacter));
        assert!(app.quiz().is_none());
    }

    #[test]
    fn test_gallery_wraps() {
        let (mut app, _) = app();
        app.gallery_previous();
        assert_eq!(app.gallery_index(), GALLERY.len() - 1);
        app.gallery_next();
        assert_eq!(app.gallery_index(), 0);
    }
}
