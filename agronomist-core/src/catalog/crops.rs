//! Crop catalog
//!
//! Profiles are keyed by [`Crop`]. There is no agronomic data source behind
//! the catalog yet: every crop carries the same general-purpose profile, and
//! free-text names outside the list resolve to that profile too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgronomistError;

/// The common crops offered in the dropdown, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Tomato,
    Wheat,
    Rice,
    Corn,
    Potato,
    Soybean,
    Cotton,
    Sugarcane,
}

impl Crop {
    pub const ALL: [Crop; 8] = [
        Crop::Tomato,
        Crop::Wheat,
        Crop::Rice,
        Crop::Corn,
        Crop::Potato,
        Crop::Soybean,
        Crop::Cotton,
        Crop::Sugarcane,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tomato => "Tomato",
            Self::Wheat => "Wheat",
            Self::Rice => "Rice",
            Self::Corn => "Corn",
            Self::Potato => "Potato",
            Self::Soybean => "Soybean",
            Self::Cotton => "Cotton",
            Self::Sugarcane => "Sugarcane",
        }
    }

    /// Case-insensitive lookup, ignoring surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|crop| crop.name().eq_ignore_ascii_case(needle))
    }

    /// Growing profile for this crop.
    pub fn profile(&self) -> &'static CropProfile {
        match self {
            Self::Tomato
            | Self::Wheat
            | Self::Rice
            | Self::Corn
            | Self::Potato
            | Self::Soybean
            | Self::Cotton
            | Self::Sugarcane => &GENERAL_PROFILE,
        }
    }
}

impl FromStr for Crop {
    type Err = AgronomistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AgronomistError::unknown_crop(s))
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Growing conditions shown on the crop fact sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropProfile {
    pub growing_season: &'static str,
    pub optimal_temperature: &'static str,
    pub water_requirements: &'static str,
    pub soil_type: &'static str,
    pub days_to_harvest: &'static str,
    pub sunlight: &'static str,
    pub ph_level: &'static str,
    pub spacing: &'static str,
}

impl CropProfile {
    /// Fact sheet rows for the left-hand column.
    pub fn conditions(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Growing Season", self.growing_season),
            ("Optimal Temperature", self.optimal_temperature),
            ("Water Requirements", self.water_requirements),
            ("Soil Type", self.soil_type),
        ]
    }

    /// Fact sheet rows for the right-hand column.
    pub fn cultivation(&self) -> [(&'static str, &'static str); 4] {
        [
            ("Days to Harvest", self.days_to_harvest),
            ("Sunlight", self.sunlight),
            ("pH Level", self.ph_level),
            ("Spacing", self.spacing),
        ]
    }
}

static GENERAL_PROFILE: CropProfile = CropProfile {
    growing_season: "Spring - Fall",
    optimal_temperature: "18-26°C",
    water_requirements: "Moderate",
    soil_type: "Well-drained, fertile soil",
    days_to_harvest: "60-90 days",
    sunlight: "Full sun (6-8 hours)",
    ph_level: "6.0-7.0",
    spacing: "30-60 cm apart",
};

/// Resolve a crop name typed by the user. Unlisted names get the general profile.
pub fn lookup_profile(name: &str) -> &'static CropProfile {
    Crop::parse(name)
        .map(|crop| crop.profile())
        .unwrap_or(&GENERAL_PROFILE)
}
