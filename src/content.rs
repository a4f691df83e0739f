//! Static text shown on the tour pages.

pub const TAGLINE: &str = "A Child's Journey to Discover Space Weather";

pub const STORY_LINES: [&str; 6] = [
    "My father was a fisherman. One day, he went fishing in the deep ocean.",
    "But something strange happened. He never came back. His GPS stopped working, and he lost his path in the vast sea.",
    "For years, I wondered why this happened. Later, I discovered the truth: it was caused by Space Weather.",
    "A powerful space storm disrupted his navigation system.",
    "I realized many lives, fishermen, farmers, pilots, even power operators, can be affected by space weather.",
    "I decided to create this journey to help people understand and prepare.",
];

pub const MODAL_QUESTION: &str = "Do you know about Space Weather?";
pub const MODAL_YES: &str = "Wow! Let's know more";
pub const MODAL_NO: &str = "Okay, no problem! Let's learn about Space Weather";

pub struct GalleryItem {
    pub title: &'static str,
    pub description: &'static str,
}

pub const GALLERY: [GalleryItem; 5] = [
    GalleryItem {
        title: "What Is Space Weather?",
        description: "Space weather refers to the changing conditions in space driven by solar activity. It includes solar flares, coronal mass ejections, and the solar wind interacting with Earth's magnetic field. Understanding these basics is the first step to mastering space weather.",
    },
    GalleryItem {
        title: "Where Does It Come From?",
        description: "Space weather originates from the Sun: sunspots, magnetic reconnection, solar flares, and coronal mass ejections release energy and charged particles. These travel through the solar system and can reach Earth within hours to days depending on speed and direction.",
    },
    GalleryItem {
        title: "How Can It Affect Earth?",
        description: "Impacts range from beautiful auroras to serious technological disruptions. Satellites may experience radiation damage, GPS accuracy can degrade, radio communications may fade, and in extreme cases geomagnetic storms can stress power grids.",
    },
    GalleryItem {
        title: "How Do We Monitor It?",
        description: "Scientists monitor the Sun with ground-based telescopes and spacecraft such as SOHO, SDO and DSCOVR. Instruments track X-rays, magnetic fields, particle flux, and solar wind speed. Forecast centers analyze this data to predict storm arrival and intensity.",
    },
    GalleryItem {
        title: "Why Does It Matter?",
        description: "Space weather awareness protects modern life. Reliable forecasts help airlines plan polar routes, grid operators manage risk, satellite teams safeguard assets, and mission planners time launches.",
    },
];

pub const LEGACY_STORIES: &[&str] = &[
    "Stellar Stories collects the voices of people who met space weather first hand.",
    "Pilots rerouted away from the poles, ham radio operators listening to static, and engineers watching transformers hum.",
];

/// Headline figures on the impact analysis page: title, value, description.
pub const IMPACT_METRICS: [(&str, &str, &str); 4] = [
    ("Economic Impact", "$15B+", "Annual global economic losses from space weather events"),
    ("Affected Systems", "50M+", "Number of systems potentially vulnerable to solar storms"),
    ("Recovery Time", "2-7 days", "Average time to restore critical systems after major events"),
    ("Protection Level", "65%", "Current infrastructure protection against space weather"),
];

pub struct ImpactCategory {
    pub name: &'static str,
    pub severity: &'static str,
    /// Share of the sector exposed to a major storm.
    pub percentage: u8,
    pub description: &'static str,
    pub examples: [&'static str; 4],
}

pub const IMPACT_CATEGORIES: [ImpactCategory; 5] = [
    ImpactCategory {
        name: "Satellite Systems",
        severity: "Critical",
        percentage: 85,
        description: "Solar storms can damage satellite electronics, disrupt communications, and cause orbital decay.",
        examples: [
            "GPS navigation failures",
            "Communication satellite outages",
            "Weather monitoring disruptions",
            "Internet service interruptions",
        ],
    },
    ImpactCategory {
        name: "Power Infrastructure",
        severity: "High",
        percentage: 75,
        description: "Geomagnetic storms induce currents in power lines, potentially causing blackouts.",
        examples: [
            "Transformer damage",
            "Grid instability",
            "Widespread blackouts",
            "Industrial shutdowns",
        ],
    },
    ImpactCategory {
        name: "Aviation Safety",
        severity: "High",
        percentage: 70,
        description: "Solar radiation affects high-altitude flights and polar routes.",
        examples: [
            "Flight route diversions",
            "Communication blackouts",
            "Navigation system errors",
            "Increased radiation exposure",
        ],
    },
    ImpactCategory {
        name: "Radio Communications",
        severity: "Medium",
        percentage: 60,
        description: "Solar flares can cause radio blackouts affecting emergency services.",
        examples: [
            "Emergency service disruptions",
            "Maritime communication loss",
            "Amateur radio interference",
            "Military communication issues",
        ],
    },
    ImpactCategory {
        name: "Technology Systems",
        severity: "Medium",
        percentage: 55,
        description: "Various technological systems can be affected by space weather events.",
        examples: [
            "Internet infrastructure issues",
            "Banking system disruptions",
            "Transportation delays",
            "Smart grid malfunctions",
        ],
    },
];

pub const AURORA_LINES: &[&str] = &[
    "Charged particles from the Sun collide with oxygen and nitrogen high above the poles.",
    "Stronger storms paint brighter, lower auroras: green from oxygen, red high up, violet from nitrogen.",
];

pub const PREDICTION_PHASES: [(&str, &str); 4] = [
    ("Satellite Monitoring", "Advanced satellites continuously monitor the Sun's activity, detecting solar flares and coronal mass ejections in real-time."),
    ("AI Analysis", "Artificial intelligence systems analyze vast amounts of solar data to predict space weather patterns and potential impacts."),
    ("Ground Observatories", "Earth-based observatories work together with space missions to provide comprehensive space weather monitoring."),
    ("Global Alerts", "Warning systems alert governments, airlines, power companies, and the public about incoming space weather events."),
];

/// Solar activity readings cycled through by the prediction monitor, in percent.
pub const SOLAR_ACTIVITY_READINGS: [u8; 7] = [42, 67, 18, 85, 53, 29, 74];

pub const ART_PROMPT: &str = "Draw your thought about how a coronal mass ejection looks like";

pub const ARTWORKS: [&str; 11] = [
    "Arshi, 9 Years Old",
    "Shreya, 12 Years Old",
    "Tanmay, 7 Years Old",
    "Aarav, 10 Years Old",
    "Anaya, 8 Years Old",
    "Ishaan, 13 Years Old",
    "Zara, 6 Years Old",
    "Vihaan, 11 Years Old",
    "Mira, 9 Years Old",
    "Kabir, 12 Years Old",
    "Riya, 10 Years Old",
];
