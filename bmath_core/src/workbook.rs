//! # Workbook Data Structures
//!
//! The `Workbook` struct is the root container for saved calculator state.
//! The original web calculators echoed form state to browser local storage;
//! the workbook is the file-backed counterpart, serialized to `.bmk` files
//! as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Workbook
//! ├── meta: WorkbookMetadata (version, title, author, timestamps)
//! ├── settings: DisplaySettings (currency, site base URL)
//! └── items: HashMap<Uuid, CalculatorItem> (saved calculator inputs)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bmath_core::workbook::Workbook;
//!
//! let workbook = Workbook::new("Bakery pricing", "sam");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&workbook).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculators::CalculatorItem;
use crate::presets::CurrencyCode;

/// Current schema version for .bmk files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Default site base for share links
pub const DEFAULT_SITE_BASE: &str = "https://boring-math.com";

/// Root workbook container.
///
/// Items are stored in a flat UUID-keyed map: O(1) lookup, no duplicate-ID
/// issues, stable references when the display order changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workbook {
    /// Workbook metadata (version, title, author, timestamps)
    pub meta: WorkbookMetadata,

    /// Display settings (currency, site base URL)
    pub settings: DisplaySettings,

    /// Saved calculator inputs, keyed by UUID
    pub items: HashMap<Uuid, CalculatorItem>,
}

impl Workbook {
    /// Create a new empty workbook.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bmath_core::workbook::Workbook;
    ///
    /// let workbook = Workbook::new("Kitchen remodel", "alex");
    /// assert_eq!(workbook.meta.title, "Kitchen remodel");
    /// assert!(workbook.items.is_empty());
    /// ```
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let now = Utc::now();
        Workbook {
            meta: WorkbookMetadata {
                version: SCHEMA_VERSION.to_string(),
                title: title.into(),
                author: author.into(),
                created: now,
                modified: now,
            },
            settings: DisplaySettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculator item to the workbook.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculatorItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculator item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculatorItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculator item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculatorItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of saved items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Workbook::new("", "")
    }
}

/// Workbook metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Workbook title
    pub title: String,

    /// Author name or handle
    pub author: String,

    /// When the workbook was created
    pub created: DateTime<Utc>,

    /// When the workbook was last modified
    pub modified: DateTime<Utc>,
}

/// Display settings applied to every item in the workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Currency used when formatting money results
    pub currency: CurrencyCode,

    /// Site base URL used for share links
    pub site_base: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency: CurrencyCode::Usd,
            site_base: DEFAULT_SITE_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{BreakEvenInput, TipSplitInput};

    #[test]
    fn test_new_workbook() {
        let workbook = Workbook::new("Test", "tester");
        assert_eq!(workbook.meta.version, SCHEMA_VERSION);
        assert_eq!(workbook.item_count(), 0);
        assert_eq!(workbook.settings.currency, CurrencyCode::Usd);
    }

    #[test]
    fn test_add_and_remove_items() {
        let mut workbook = Workbook::new("Test", "tester");
        let id = workbook.add_item(CalculatorItem::TipSplit(TipSplitInput {
            bill_amount: 60.0,
            tip_pct: 20.0,
            people: 3,
        }));
        assert_eq!(workbook.item_count(), 1);
        assert!(workbook.get_item(&id).is_some());

        let removed = workbook.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(workbook.item_count(), 0);
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut workbook = Workbook::new("Test", "tester");
        let before = workbook.meta.modified;
        workbook.add_item(CalculatorItem::BreakEven(BreakEvenInput {
            fixed_costs: 100.0,
            unit_price: 10.0,
            unit_variable_cost: 5.0,
        }));
        assert!(workbook.meta.modified >= before);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut workbook = Workbook::new("Roundtrip", "tester");
        workbook.add_item(CalculatorItem::BreakEven(BreakEvenInput {
            fixed_costs: 100.0,
            unit_price: 10.0,
            unit_variable_cost: 5.0,
        }));

        let json = serde_json::to_string_pretty(&workbook).unwrap();
        let roundtrip: Workbook = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.title, "Roundtrip");
        assert_eq!(roundtrip.item_count(), 1);
    }
}
