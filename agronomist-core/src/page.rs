//! Page selection state
//!
//! The navigation selector always holds exactly one of these five values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgronomistError;

/// The five navigable pages, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    CropInformation,
    WeatherInsights,
    PestManagement,
    About,
}

impl Page {
    /// All pages in sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::CropInformation,
        Page::WeatherInsights,
        Page::PestManagement,
        Page::About,
    ];

    /// URL slug, e.g. `crop-information`.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::CropInformation => "crop-information",
            Self::WeatherInsights => "weather-insights",
            Self::PestManagement => "pest-management",
            Self::About => "about",
        }
    }

    /// Label shown next to the radio button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::CropInformation => "Crop Information",
            Self::WeatherInsights => "Weather Insights",
            Self::PestManagement => "Pest Management",
            Self::About => "About",
        }
    }

    /// Parse from a slug or a display label (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL.into_iter().find(|page| {
            page.slug().eq_ignore_ascii_case(needle) || page.label().eq_ignore_ascii_case(needle)
        })
    }
}

impl FromStr for Page {
    type Err = AgronomistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AgronomistError::unknown_page(s))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
