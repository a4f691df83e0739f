use std::collections::HashMap;

use crate::models::PageId;

/// A named transition out of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The global forward control.
    Next,
    /// The global previous control.
    Back,
    /// A page-local shortcut past the default order.
    Skip,
    /// A page-local way back to the page it was entered from.
    Return,
}

/// The tour as a directed graph of pages.
#[derive(Debug, Clone, Default)]
pub struct TourGraph {
    edges: HashMap<(PageId, Edge), PageId>,
}

impl TourGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge(mut self, from: PageId, edge: Edge, to: PageId) -> Self {
        self.edges.insert((from, edge), to);
        self
    }

    pub fn target(&self, from: PageId, edge: Edge) -> Option<PageId> {
        self.edges.get(&(from, edge)).copied()
    }

    /// The Stellar X tour: mostly linear, with the detail page kept out of
    /// the forward flow and the art challenge looping back to the start.
    pub fn stellar_tour() -> Self {
        use PageId::*;

        let mut graph = Self::new();

        for pair in PageId::ALL.windows(2) {
            graph = graph
                .with_edge(pair[0], Edge::Next, pair[1])
                .with_edge(pair[1], Edge::Back, pair[0]);
        }

        graph
            .with_edge(Welcome, Edge::Back, Welcome)
            .with_edge(Prediction, Edge::Next, ArtChallenge)
            .with_edge(ArtChallenge, Edge::Next, Welcome)
            .with_edge(Story, Edge::Skip, Gallery)
            .with_edge(Detail, Edge::Skip, AuroraPainter)
            .with_edge(Gallery, Edge::Return, Story)
            .with_edge(DamageSimulator, Edge::Return, LegacyStories)
            .with_edge(ImpactAnalysis, Edge::Return, DamageSimulator)
            .with_edge(StormSliders, Edge::Return, AuroraPainter)
            .with_edge(Prediction, Edge::Return, StormSliders)
            .with_edge(Detail, Edge::Return, DamageSimulator)
    }
}
