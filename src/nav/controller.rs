use std::collections::HashSet;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::models::{CharacterRef, PageId};

use super::graph::{Edge, TourGraph};

/// Delays that shape the page lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTimings {
    /// How long the loading screen stays up after start.
    pub warmup: Duration,
    /// From a navigation request until the new page is committed.
    pub fade_out: Duration,
    /// From the commit until the page becomes interactive again.
    pub fade_in: Duration,
}

impl Default for NavTimings {
    fn default() -> Self {
        Self {
            warmup: Duration::from_millis(2000),
            fade_out: Duration::from_millis(300),
            fade_in: Duration::from_millis(100),
        }
    }
}

/// A navigation target together with the context it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub target: PageId,
    pub payload: Option<CharacterRef>,
}

impl PageRequest {
    pub fn to(target: PageId) -> Self {
        Self {
            target,
            payload: None,
        }
    }

    pub fn detail(character: CharacterRef) -> Self {
        Self {
            target: PageId::Detail,
            payload: Some(character),
        }
    }
}

/// Answer to a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Started { from: PageId, to: PageId },
    /// The target is the page already shown.
    AlreadyThere,
    /// Another transition is still running; the request was dropped.
    Busy,
    /// The current page claimed the forward control for itself.
    Intercepted(PageId),
    /// The current page has no edge of the requested kind.
    NoRoute,
}

/// Something the clock caused, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    LoadingFinished,
    Committed { from: PageId, to: PageId },
    Settled(PageId),
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Leaving {
        request: PageRequest,
        commit_at: Instant,
    },
    Arriving {
        settle_at: Instant,
    },
}

/// Owns the current page and serializes every page change.
///
/// A change runs in two phases: the old page fades out until `fade_out`
/// has passed, then the new page is committed and fades in for `fade_in`.
/// Only one change runs at a time.
#[derive(Debug, Clone)]
pub struct Navigator {
    graph: TourGraph,
    timings: NavTimings,
    current: PageId,
    context: Option<CharacterRef>,
    phase: Phase,
    loading_until: Option<Instant>,
    next_intercepts: HashSet<PageId>,
}

impl Navigator {
    pub fn new(graph: TourGraph, timings: NavTimings, now: Instant) -> Self {
        Self {
            graph,
            timings,
            current: PageId::Welcome,
            context: None,
            phase: Phase::Idle,
            loading_until: Some(now + timings.warmup),
            next_intercepts: HashSet::new(),
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    /// The character the current page was opened for, if any.
    pub fn context(&self) -> Option<&CharacterRef> {
        self.context.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading_until.is_some()
    }

    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// The page a running transition is heading to.
    pub fn pending_target(&self) -> Option<PageId> {
        match &self.phase {
            Phase::Leaving { request, .. } => Some(request.target),
            _ => None,
        }
    }

    pub fn graph(&self) -> &TourGraph {
        &self.graph
    }

    /// Lets `page` take over the forward control: while it is current,
    /// [`Navigator::next`] reports [`NavOutcome::Intercepted`] instead of
    /// moving on.
    pub fn register_next_intercept(&mut self, page: PageId) {
        self.next_intercepts.insert(page);
    }

    pub fn clear_next_intercept(&mut self, page: PageId) {
        self.next_intercepts.remove(&page);
    }

    pub fn navigate(&mut self, request: PageRequest, now: Instant) -> NavOutcome {
        if request.target == self.current {
            return NavOutcome::AlreadyThere;
        }

        if self.is_transitioning() {
            debug!(to = %request.target, pending = ?self.pending_target(), "navigation rejected, transition in flight");
            return NavOutcome::Busy;
        }

        let from = self.current;
        let to = request.target;
        debug!(%from, %to, "transition started");

        self.phase = Phase::Leaving {
            request,
            commit_at: now + self.timings.fade_out,
        };

        NavOutcome::Started { from, to }
    }

    /// Navigates to a raw page index. Indices outside the tour land on the
    /// welcome page.
    pub fn navigate_to_index(&mut self, index: usize, now: Instant) -> NavOutcome {
        self.navigate(PageRequest::to(PageId::resolve(index)), now)
    }

    pub fn follow(&mut self, edge: Edge, now: Instant) -> NavOutcome {
        match self.graph.target(self.current, edge) {
            Some(target) => self.navigate(PageRequest::to(target), now),
            None => NavOutcome::NoRoute,
        }
    }

    pub fn next(&mut self, now: Instant) -> NavOutcome {
        if self.is_transitioning() {
            return NavOutcome::Busy;
        }
        if self.next_intercepts.contains(&self.current) {
            return NavOutcome::Intercepted(self.current);
        }
        self.follow(Edge::Next, now)
    }

    pub fn back(&mut self, now: Instant) -> NavOutcome {
        self.follow(Edge::Back, now)
    }

    /// Opens the detail page for `character`.
    pub fn open_detail(&mut self, character: CharacterRef, now: Instant) -> NavOutcome {
        self.navigate(PageRequest::detail(character), now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        let phase_deadline = match &self.phase {
            Phase::Idle => None,
            Phase::Leaving { commit_at, .. } => Some(*commit_at),
            Phase::Arriving { settle_at } => Some(*settle_at),
        };

        match (self.loading_until, phase_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Applies every deadline that has passed by `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<NavEvent> {
        let mut events = Vec::new();

        if self.loading_until.is_some_and(|until| now >= until) {
            self.loading_until = None;
            info!("loading finished");
            events.push(NavEvent::LoadingFinished);
        }

        let commit_due = matches!(&self.phase, Phase::Leaving { commit_at, .. } if now >= *commit_at);
        if commit_due {
            if let Phase::Leaving { request, commit_at } =
                std::mem::replace(&mut self.phase, Phase::Idle)
            {
                let from = self.current;
                self.current = request.target;
                self.context = request.payload;
                self.phase = Phase::Arriving {
                    settle_at: commit_at + self.timings.fade_in,
                };

                info!(%from, to = %self.current, "page committed");
                events.push(NavEvent::Committed {
                    from,
                    to: self.current,
                });
            }
        }

        if let Phase::Arriving { settle_at } = self.phase {
            if now >= settle_at {
                self.phase = Phase::Idle;
                events.push(NavEvent::Settled(self.current));
            }
        }

        events
    }
}
