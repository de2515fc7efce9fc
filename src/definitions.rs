//! Achievement definitions and metadata
//!
//! All achievements are defined here with their unlock requirements.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    DailyVisitor,
    Wordsmith,
    SocialButterfly,
    PowerUser,
    NightOwl,
}

impl AchievementId {
    /// Get the string ID used in the stored record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyVisitor => "daily_visitor",
            Self::Wordsmith => "wordsmith",
            Self::SocialButterfly => "social_butterfly",
            Self::PowerUser => "power_user",
            Self::NightOwl => "night_owl",
        }
    }

    /// Parse from a stored string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily_visitor" => Some(Self::DailyVisitor),
            "wordsmith" => Some(Self::Wordsmith),
            "social_butterfly" => Some(Self::SocialButterfly),
            "power_user" => Some(Self::PowerUser),
            "night_owl" => Some(Self::NightOwl),
            _ => None,
        }
    }

    /// Get all achievement IDs in catalog order
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::DailyVisitor,
            Self::Wordsmith,
            Self::SocialButterfly,
            Self::PowerUser,
            Self::NightOwl,
        ]
    }
}

/// Achievement category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Usage,
    Performance,
    Social,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Usage => "Usage",
            Self::Performance => "Performance",
            Self::Social => "Social",
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    /// Progress threshold that unlocks the achievement
    pub requirement: u64,
}

/// All achievement definitions, in catalog (and wire) order
pub static ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::DailyVisitor,
        name: "Daily Visitor",
        description: "Log in 7 days in a row",
        icon: "📅",
        category: AchievementCategory::Usage,
        requirement: 7,
    },
    AchievementDef {
        id: AchievementId::Wordsmith,
        name: "Wordsmith",
        description: "Generate 10,000 words of content",
        icon: "✍️",
        category: AchievementCategory::Performance,
        requirement: 10000,
    },
    AchievementDef {
        id: AchievementId::SocialButterfly,
        name: "Social Butterfly",
        description: "Share 5 conversations with peers",
        icon: "🦋",
        category: AchievementCategory::Social,
        requirement: 5,
    },
    AchievementDef {
        id: AchievementId::PowerUser,
        name: "Power User",
        description: "Send 100 messages",
        icon: "⚡",
        category: AchievementCategory::Usage,
        requirement: 100,
    },
    AchievementDef {
        id: AchievementId::NightOwl,
        name: "Night Owl",
        description: "Use N.I.D.A.M after midnight",
        icon: "🦉",
        category: AchievementCategory::Usage,
        requirement: 1,
    },
];

impl AchievementDef {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static AchievementDef {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_ids() {
        assert_eq!(ACHIEVEMENTS.len(), AchievementId::all().len());
        for (def, id) in ACHIEVEMENTS.iter().zip(AchievementId::all()) {
            assert_eq!(def.id, *id, "catalog order must match id order");
        }
    }

    #[test]
    fn test_id_string_roundtrip() {
        for id in AchievementId::all() {
            assert_eq!(AchievementId::from_str(id.as_str()), Some(*id));
        }
        assert_eq!(AchievementId::from_str("ancient_relic"), None);
    }

    #[test]
    fn test_requirements_positive() {
        for def in ACHIEVEMENTS {
            assert!(def.requirement > 0, "{} has a zero requirement", def.name);
        }
    }
}
