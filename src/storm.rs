//! Storm intensity, how much of it each profession absorbs, and which
//! ground systems each solar driver disrupts.

use crate::models::Character;

pub const MAX_INTENSITY: u8 = 100;
pub const DEFAULT_INTENSITY: u8 = 50;
pub const INTENSITY_STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityLevel {
    Calm,
    Moderate,
    Strong,
    Severe,
}

impl IntensityLevel {
    pub fn of(intensity: u8) -> Self {
        match intensity {
            0..30 => IntensityLevel::Calm,
            30..60 => IntensityLevel::Moderate,
            60..80 => IntensityLevel::Strong,
            _ => IntensityLevel::Severe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntensityLevel::Calm => "Calm",
            IntensityLevel::Moderate => "Moderate",
            IntensityLevel::Strong => "Strong",
            IntensityLevel::Severe => "Severe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageLevel {
    Low,
    Elevated,
    High,
    Critical,
}

impl DamageLevel {
    /// Classifies lost health (`100 - health`).
    pub fn of(damage: f64) -> Self {
        if damage > 80.0 {
            DamageLevel::Critical
        } else if damage > 60.0 {
            DamageLevel::High
        } else if damage > 30.0 {
            DamageLevel::Elevated
        } else {
            DamageLevel::Low
        }
    }
}

/// Remaining health of `character` at the given storm intensity, in
/// `0.0..=100.0`. Health falls linearly with intensity, scaled by the
/// character's vulnerability.
pub fn health(character: &Character, intensity: u8) -> f64 {
    let intensity = intensity.min(MAX_INTENSITY) as f64;
    (100.0 - intensity * character.vulnerability).max(0.0)
}

pub fn damage_level(character: &Character, intensity: u8) -> DamageLevel {
    DamageLevel::of(100.0 - health(character, intensity))
}

pub fn raise(intensity: u8) -> u8 {
    intensity.saturating_add(INTENSITY_STEP).min(MAX_INTENSITY)
}

pub fn lower(intensity: u8) -> u8 {
    intensity.saturating_sub(INTENSITY_STEP)
}

/// One of the three solar drivers on the storm sliders page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormSource {
    SolarFlare,
    Cme,
    SolarWind,
}

impl StormSource {
    pub const ALL: [StormSource; 3] = [StormSource::SolarFlare, StormSource::Cme, StormSource::SolarWind];

    pub fn label(self) -> &'static str {
        match self {
            StormSource::SolarFlare => "Solar Flare Intensity",
            StormSource::Cme => "CME Intensity",
            StormSource::SolarWind => "Solar Wind Intensity",
        }
    }
}

/// Ground systems that light up once a source crosses its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    Aviation,
    Satellite,
    Gps,
    PowerGrid,
    Radio,
}

impl System {
    pub const ALL: [System; 5] = [
        System::Aviation,
        System::Satellite,
        System::Gps,
        System::PowerGrid,
        System::Radio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            System::Aviation => "Aviation",
            System::Satellite => "Satellite",
            System::Gps => "GPS Tracker",
            System::PowerGrid => "Power Grid",
            System::Radio => "Radio Communications",
        }
    }
}

/// Which systems a combination of flare and CME intensity disrupts. Solar
/// wind only feeds the overall severity.
pub fn affected_systems(flare: u8, cme: u8) -> [(System, bool); 5] {
    System::ALL.map(|system| {
        let affected = match system {
            System::Aviation | System::Radio => flare > 40,
            System::Gps => flare > 80 || cme > 40,
            System::Satellite => cme > 40,
            System::PowerGrid => cme > 80,
        };
        (system, affected)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Extreme,
}

impl Severity {
    /// Classifies the strongest of the three sources.
    pub fn of(peak: u8) -> Self {
        match peak {
            0..25 => Severity::Low,
            25..50 => Severity::Moderate,
            50..75 => Severity::High,
            _ => Severity::Extreme,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::Extreme => "Extreme",
        }
    }
}

/// Three independent sliders, all starting calm, with one under the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StormSliders {
    levels: [u8; 3],
    selected: usize,
}

impl StormSliders {
    pub fn level(&self, source: StormSource) -> u8 {
        self.levels[source as usize]
    }

    pub fn selected(&self) -> StormSource {
        StormSource::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % StormSource::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + StormSource::ALL.len() - 1) % StormSource::ALL.len();
    }

    pub fn raise_selected(&mut self) {
        self.levels[self.selected] = raise(self.levels[self.selected]);
    }

    pub fn lower_selected(&mut self) {
        self.levels[self.selected] = lower(self.levels[self.selected]);
    }

    pub fn set(&mut self, source: StormSource, level: u8) {
        self.levels[source as usize] = level.min(MAX_INTENSITY);
    }

    pub fn severity(&self) -> Severity {
        Severity::of(self.levels.iter().copied().max().unwrap_or(0))
    }

    pub fn affected_systems(&self) -> [(System, bool); 5] {
        affected_systems(self.level(StormSource::SolarFlare), self.level(StormSource::Cme))
    }
}
