/// Identifies one top-level page of the tour.
///
/// The numeric index of each variant is stable and matches the order in
/// which the tour was first laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    Welcome,
    Story,
    Gallery,
    LegacyStories,
    DamageSimulator,
    ImpactAnalysis,
    AuroraPainter,
    StormSliders,
    Prediction,
    Detail,
    ArtChallenge,
}

impl PageId {
    pub const ALL: [PageId; 11] = [
        PageId::Welcome,
        PageId::Story,
        PageId::Gallery,
        PageId::LegacyStories,
        PageId::DamageSimulator,
        PageId::ImpactAnalysis,
        PageId::AuroraPainter,
        PageId::StormSliders,
        PageId::Prediction,
        PageId::Detail,
        PageId::ArtChallenge,
    ];

    /// Pages shown in the progress dots. The detail page is only reachable
    /// by drilling into a character, so it has no dot.
    pub const DOTS: [PageId; 10] = [
        PageId::Welcome,
        PageId::Story,
        PageId::Gallery,
        PageId::LegacyStories,
        PageId::DamageSimulator,
        PageId::ImpactAnalysis,
        PageId::AuroraPainter,
        PageId::StormSliders,
        PageId::Prediction,
        PageId::ArtChallenge,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<PageId> {
        Self::ALL.get(index).copied()
    }

    /// Maps any index to a renderable page. Unknown indices fall back to the
    /// welcome page.
    pub fn resolve(index: usize) -> PageId {
        Self::from_index(index).unwrap_or(PageId::Welcome)
    }

    pub fn title(self) -> &'static str {
        match self {
            PageId::Welcome => "Stellar X",
            PageId::Story => "A Fisherman's Story",
            PageId::Gallery => "What Is Space Weather?",
            PageId::LegacyStories => "Stellar Stories",
            PageId::DamageSimulator => "Space Weather Damage Simulator",
            PageId::ImpactAnalysis => "Solar Weather Impact Analysis",
            PageId::AuroraPainter => "Aurora Painter",
            PageId::StormSliders => "Storm Sliders",
            PageId::Prediction => "Predicting Space Weather",
            PageId::Detail => "Detailed Impact",
            PageId::ArtChallenge => "Art Challenge",
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title(), self.index())
    }
}
