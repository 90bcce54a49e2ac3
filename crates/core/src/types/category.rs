//! The fixed product category set.

use serde::{Deserialize, Serialize};

/// A product category.
///
/// The catalog carries exactly four categories; the storefront adds an
/// implicit "all" view on top (the unfiltered catalog), which is a filter
/// concern and deliberately not a variant here.
///
/// Serde names match the Russian labels used by the catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Мебель - desks, chairs, cabinets.
    #[serde(rename = "Мебель")]
    Furniture,
    /// Оборудование - interactive boards, projectors.
    #[serde(rename = "Оборудование")]
    Equipment,
    /// Техника - televisions and other electronics.
    #[serde(rename = "Техника")]
    Electronics,
    /// Стенды - information boards and stands.
    #[serde(rename = "Стенды")]
    InfoBoards,
}

impl Category {
    /// All categories in display (tab) order.
    pub const ALL: [Self; 4] = [
        Self::Furniture,
        Self::Equipment,
        Self::Electronics,
        Self::InfoBoards,
    ];

    /// Russian display label, as shown in the catalog tabs and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Furniture => "Мебель",
            Self::Equipment => "Оборудование",
            Self::Electronics => "Техника",
            Self::InfoBoards => "Стенды",
        }
    }

    /// URL-safe slug used by the catalog filter endpoint.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Furniture => "furniture",
            Self::Equipment => "equipment",
            Self::Electronics => "electronics",
            Self::InfoBoards => "info-boards",
        }
    }

    /// Parse a filter slug back into a category.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
