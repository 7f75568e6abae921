//! Wire-format models for player social profiles.
//!
//! These mirror the JSON documents published under
//! `/data/players/social_profile_<id>.json`. Field names are snake_case on
//! the wire, so no serde renaming is applied.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player identifier as it appears in profile documents. The producer writes
/// numeric ids, but callers may address players by arbitrary string keys, so
/// both are accepted and echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PlayerId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Number(n) => write!(f, "{}", n),
            PlayerId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        PlayerId::Text(value.to_string())
    }
}

/// A single decorative glyph with its human-readable name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IconRef {
    pub icon: String,
    pub name: String,
}

/// Icon pair assigned to a profile: a main glyph for the overall score and a
/// sub glyph for the dominant category, plus precomposed display strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileIcons {
    pub main: IconRef,
    pub sub: IconRef,
    pub display: String,
    pub full_name: String,
}

/// Per-category breakdown. The widget only renders `percentages`; `scores`
/// and `counts` are carried through for completeness since the producer
/// writes all three. A category key missing from a map reads as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryDistribution {
    #[serde(default)]
    pub scores: HashMap<String, f64>,
    #[serde(default)]
    pub counts: HashMap<String, u32>,
    #[serde(default)]
    pub percentages: HashMap<String, f64>,
}

impl CategoryDistribution {
    /// Percentage for a category, 0 when absent.
    pub fn percentage(&self, category: &str) -> f64 {
        self.percentages.get(category).copied().unwrap_or(0.0)
    }

    /// All five categories at 0.
    pub fn zeroed() -> Self {
        let zeros = || CATEGORIES.iter().map(|c| (c.id.to_string(), 0.0)).collect();
        Self {
            scores: zeros(),
            counts: CATEGORIES.iter().map(|c| (c.id.to_string(), 0)).collect(),
            percentages: zeros(),
        }
    }
}

/// Coarse direction of reputation change. Anything the producer emits outside
/// the three known values (or a missing field) deserializes as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Worsening,
    Stable,
    #[serde(other)]
    Unknown,
}

impl Default for Trend {
    fn default() -> Self {
        Trend::Unknown
    }
}

impl Trend {
    /// Stable identifier, used as a CSS class suffix (`trend-<id>`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Worsening => "worsening",
            Trend::Stable => "stable",
            Trend::Unknown => "unknown",
        }
    }

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improving => "Improving",
            Trend::Worsening => "Worsening",
            Trend::Stable => "Stable",
            Trend::Unknown => "Unknown",
        }
    }
}

/// A player's social reputation profile as published by the game's profile
/// calculator. Only `player_id`, `total_score`, `icons`, `description`,
/// `category_distribution` and `trend` are rendered; the remaining fields are
/// optional producer metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialProfile {
    pub player_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
    pub total_score: i32,
    #[serde(default)]
    pub interaction_count: u32,
    pub icons: ProfileIcons,
    pub description: String,
    #[serde(default)]
    pub category_distribution: CategoryDistribution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_category_name: Option<String>,
    #[serde(default)]
    pub trend: Trend,
}

impl SocialProfile {
    /// Fallback profile for players whose document is missing or unreadable:
    /// a neutral crescent with every category at zero.
    pub fn default_for(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: player_id.into(),
            calculated_at: None,
            total_score: 0,
            interaction_count: 0,
            icons: ProfileIcons {
                main: IconRef {
                    icon: "🌔".to_string(),
                    name: "Crescent Moon".to_string(),
                },
                sub: IconRef {
                    icon: "•".to_string(),
                    name: "Unknown".to_string(),
                },
                display: "🌔•".to_string(),
                full_name: "Crescent Moon • Unknown".to_string(),
            },
            description: "New to Helvania. Their social profile is still taking shape."
                .to_string(),
            category_distribution: CategoryDistribution::zeroed(),
            dominant_category: None,
            dominant_category_name: None,
            trend: Trend::Stable,
        }
    }
}

/// One entry of the fixed category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// The five reputation categories, in display order. Order is significant:
/// rendered breakdowns always follow this sequence regardless of which keys
/// the payload happens to contain.
pub const CATEGORIES: [Category; 5] = [
    Category { id: "betrayal", name: "Betrayal", icon: "🗡️" },
    Category { id: "hostility", name: "Hostility", icon: "⚔️" },
    Category { id: "contract", name: "Contract", icon: "🤝" },
    Category { id: "alliance", name: "Alliance", icon: "🕊️" },
    Category { id: "passion", name: "Passion", icon: "🔥" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_producer_document() {
        let json = r#"{
            "player_id": 123,
            "calculated_at": "2026-01-15T12:30:00Z",
            "total_score": 42,
            "interaction_count": 7,
            "icons": {
                "main": {"icon": "🌤️", "name": "Sunlight"},
                "sub": {"icon": "🤝", "name": "Handshake"},
                "display": "🌤️🤝",
                "full_name": "Sunlight • Handshake"
            },
            "category_distribution": {
                "scores": {"contract": 30, "alliance": 12},
                "counts": {"contract": 4, "alliance": 2},
                "percentages": {"contract": 71, "alliance": 29}
            },
            "dominant_category": "contract",
            "dominant_category_name": "Contract",
            "description": "A calculating negotiator.",
            "trend": "improving"
        }"#;

        let profile: SocialProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.player_id, PlayerId::Number(123));
        assert_eq!(profile.total_score, 42);
        assert_eq!(profile.interaction_count, 7);
        assert_eq!(profile.trend, Trend::Improving);
        assert_eq!(profile.category_distribution.percentage("contract"), 71.0);
        assert_eq!(profile.category_distribution.percentage("betrayal"), 0.0);
    }

    #[test]
    fn accepts_minimal_document_with_string_id() {
        let json = r#"{
            "player_id": "wanderer",
            "total_score": -3,
            "icons": {
                "main": {"icon": "🌔", "name": "Crescent Moon"},
                "sub": {"icon": "•", "name": "Unknown"},
                "display": "🌔•",
                "full_name": "Crescent Moon • Unknown"
            },
            "description": "Drifting through."
        }"#;

        let profile: SocialProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.player_id, PlayerId::Text("wanderer".to_string()));
        // Absent distribution and trend fall back to empty maps and Unknown.
        assert_eq!(profile.category_distribution.percentage("passion"), 0.0);
        assert_eq!(profile.trend, Trend::Unknown);
    }

    #[test]
    fn unrecognized_trend_reads_as_unknown() {
        let trend: Trend = serde_json::from_str("\"xyz\"").unwrap();
        assert_eq!(trend, Trend::Unknown);
        assert_eq!(trend.label(), Trend::default().label());
    }

    #[test]
    fn trend_labels_are_distinct() {
        let labels = [
            Trend::Improving.label(),
            Trend::Worsening.label(),
            Trend::Stable.label(),
        ];
        assert_eq!(labels, ["Improving", "Worsening", "Stable"]);
    }

    #[test]
    fn default_profile_is_neutral() {
        let profile = SocialProfile::default_for("99");
        assert_eq!(profile.total_score, 0);
        assert_eq!(profile.trend, Trend::Stable);
        assert_eq!(profile.icons.display, "🌔•");
        for category in CATEGORIES {
            assert_eq!(profile.category_distribution.percentage(category.id), 0.0);
        }
    }

    #[test]
    fn category_order_is_fixed() {
        let ids: Vec<&str> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            ["betrayal", "hostility", "contract", "alliance", "passion"]
        );
    }
}
