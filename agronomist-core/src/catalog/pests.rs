//! Pest categories and their common examples

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgronomistError;

/// Pest categories offered in the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PestCategory {
    Insects,
    Diseases,
    Weeds,
    Rodents,
}

/// A named pest with a one-line description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PestEntry {
    pub name: &'static str,
    pub description: &'static str,
}

const fn entry(name: &'static str, description: &'static str) -> PestEntry {
    PestEntry { name, description }
}

static INSECTS: [PestEntry; 4] = [
    entry("Aphids", "Small sap-sucking insects"),
    entry("Caterpillars", "Larvae that feed on leaves"),
    entry("Beetles", "Can damage roots, leaves, and fruits"),
    entry("Whiteflies", "Tiny white insects on leaf undersides"),
];

static DISEASES: [PestEntry; 4] = [
    entry("Powdery Mildew", "White powdery coating on leaves"),
    entry("Blight", "Rapid browning and death of plant tissue"),
    entry("Root Rot", "Fungal infection of plant roots"),
    entry("Rust", "Orange-brown pustules on leaves"),
];

static WEEDS: [PestEntry; 4] = [
    entry("Crabgrass", "Aggressive grass weed"),
    entry("Dandelion", "Common broadleaf weed"),
    entry("Bindweed", "Climbing vine that chokes crops"),
    entry("Nutsedge", "Difficult-to-control sedge weed"),
];

static RODENTS: [PestEntry; 4] = [
    entry("Field Mice", "Damage crops and stored grain"),
    entry("Rats", "Can destroy large quantities of stored food"),
    entry("Gophers", "Create tunnels that damage roots"),
    entry("Voles", "Gnaw on bark and roots"),
];

/// Tips shown regardless of the selected category: (icon, title, detail)
pub static GENERAL_TIPS: [(&str, &str, &str); 5] = [
    ("🔍", "Regular Monitoring", "Inspect crops frequently for early detection"),
    ("🌿", "Crop Rotation", "Helps break pest cycles"),
    ("🐞", "Beneficial Insects", "Encourage natural predators"),
    ("🧹", "Sanitation", "Remove crop residues and debris"),
    ("🌱", "Resistant Varieties", "Choose pest-resistant crop varieties"),
];

impl PestCategory {
    pub const ALL: [PestCategory; 4] = [
        PestCategory::Insects,
        PestCategory::Diseases,
        PestCategory::Weeds,
        PestCategory::Rodents,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Insects => "Insects",
            Self::Diseases => "Diseases",
            Self::Weeds => "Weeds",
            Self::Rodents => "Rodents",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(needle))
    }

    /// Common pests in this category.
    pub fn entries(&self) -> &'static [PestEntry] {
        match self {
            Self::Insects => &INSECTS,
            Self::Diseases => &DISEASES,
            Self::Weeds => &WEEDS,
            Self::Rodents => &RODENTS,
        }
    }
}

impl FromStr for PestCategory {
    type Err = AgronomistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AgronomistError::unknown_pest_category(s))
    }
}

impl fmt::Display for PestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
