//! Event Presets
//!
//! Default budget percentage splits per event type, used to seed the party
//! budget calculator. Each preset's categories sum to 100%.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Event types with preset budget splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventType {
    /// Adult birthday party
    #[default]
    Birthday,
    /// Wedding reception
    Wedding,
    /// Corporate event
    Corporate,
    /// Kids party
    KidsParty,
    /// Casual get-together
    Casual,
}

/// Budget percentage split across the five spending categories.
///
/// Values are percentages of the total budget; a preset's fields sum to 100,
/// custom splits may not (see the party budget calculator for how the
/// remainder is reported).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSplit {
    /// Food and catering (%)
    pub food_pct: f64,
    /// Drinks (%)
    pub drinks_pct: f64,
    /// Venue hire (%)
    pub venue_pct: f64,
    /// Decorations (%)
    pub decor_pct: f64,
    /// Entertainment (%)
    pub entertainment_pct: f64,
}

impl BudgetSplit {
    /// Category labels paired with their percentages, in display order
    pub fn categories(&self) -> [(&'static str, f64); 5] {
        [
            ("Food", self.food_pct),
            ("Drinks", self.drinks_pct),
            ("Venue", self.venue_pct),
            ("Decorations", self.decor_pct),
            ("Entertainment", self.entertainment_pct),
        ]
    }

    /// Sum of all category percentages
    pub fn total_pct(&self) -> f64 {
        self.categories().iter().map(|(_, pct)| pct).sum()
    }
}

impl EventType {
    /// All event types for UI selection
    pub const ALL: [EventType; 5] = [
        EventType::Birthday,
        EventType::Wedding,
        EventType::Corporate,
        EventType::KidsParty,
        EventType::Casual,
    ];

    /// Look up the preset budget split for this event type
    pub fn budget_split(&self) -> BudgetSplit {
        match self {
            EventType::Birthday => BudgetSplit {
                food_pct: 40.0,
                drinks_pct: 25.0,
                venue_pct: 10.0,
                decor_pct: 15.0,
                entertainment_pct: 10.0,
            },
            EventType::Wedding => BudgetSplit {
                food_pct: 30.0,
                drinks_pct: 20.0,
                venue_pct: 25.0,
                decor_pct: 15.0,
                entertainment_pct: 10.0,
            },
            EventType::Corporate => BudgetSplit {
                food_pct: 35.0,
                drinks_pct: 15.0,
                venue_pct: 30.0,
                decor_pct: 5.0,
                entertainment_pct: 15.0,
            },
            EventType::KidsParty => BudgetSplit {
                food_pct: 35.0,
                drinks_pct: 10.0,
                venue_pct: 15.0,
                decor_pct: 20.0,
                entertainment_pct: 20.0,
            },
            EventType::Casual => BudgetSplit {
                food_pct: 50.0,
                drinks_pct: 30.0,
                venue_pct: 0.0,
                decor_pct: 10.0,
                entertainment_pct: 10.0,
            },
        }
    }

    /// Get the short code string (e.g., "BIRTHDAY")
    pub fn code(&self) -> &'static str {
        match self {
            EventType::Birthday => "BIRTHDAY",
            EventType::Wedding => "WEDDING",
            EventType::Corporate => "CORPORATE",
            EventType::KidsParty => "KIDS",
            EventType::Casual => "CASUAL",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "BIRTHDAY" => Ok(EventType::Birthday),
            "WEDDING" => Ok(EventType::Wedding),
            "CORPORATE" | "WORK" => Ok(EventType::Corporate),
            "KIDS" | "KIDS-PARTY" | "CHILDREN" => Ok(EventType::KidsParty),
            "CASUAL" | "GET-TOGETHER" => Ok(EventType::Casual),
            _ => Err(CalcError::preset_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EventType::Birthday => "Birthday Party",
            EventType::Wedding => "Wedding Reception",
            EventType::Corporate => "Corporate Event",
            EventType::KidsParty => "Kids Party",
            EventType::Casual => "Casual Get-Together",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_sum_to_100() {
        for event in EventType::ALL {
            let total = event.budget_split().total_pct();
            assert!(
                (total - 100.0).abs() < 1e-9,
                "{} split sums to {}",
                event,
                total
            );
        }
    }

    #[test]
    fn test_parsing() {
        assert_eq!(
            EventType::from_str_flexible("wedding").unwrap(),
            EventType::Wedding
        );
        assert_eq!(
            EventType::from_str_flexible("kids party").unwrap(),
            EventType::KidsParty
        );
        assert!(EventType::from_str_flexible("funeral").is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let split = EventType::Corporate.budget_split();
        let json = serde_json::to_string(&split).unwrap();
        let roundtrip: BudgetSplit = serde_json::from_str(&json).unwrap();
        assert_eq!(split, roundtrip);
    }
}
