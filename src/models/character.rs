use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RiskLevel {
    Moderate,
    High,
    Critical,
    Extreme,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
            RiskLevel::Extreme => "Extreme",
        }
    }
}

/// A profession affected by space weather.
#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub emoji: String,
    /// Fraction of storm intensity that turns into damage, in `0.0..=1.0`.
    pub vulnerability: f64,
    pub risk_level: RiskLevel,
    pub description: String,
    pub impact: String,
    pub detailed_impact: String,
    pub affected_systems: Vec<String>,
    pub solutions: Vec<String>,
}

impl Character {
    pub fn to_ref(&self) -> CharacterRef {
        CharacterRef {
            id: self.id.clone(),
            name: self.name.clone(),
            emoji: self.emoji.clone(),
        }
    }
}

/// The part of a character carried along when drilling into its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRef {
    pub id: String,
    pub name: String,
    pub emoji: String,
}
