//! Weather factors that matter for crops

use serde::Serialize;

/// An explanatory block on the weather page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherFactor {
    pub name: &'static str,
    pub icon: &'static str,
    pub explanation: &'static str,
}

/// Factors in display order. The first two go in the left column.
pub static WEATHER_FACTORS: [WeatherFactor; 4] = [
    WeatherFactor {
        name: "Temperature",
        icon: "🌡️",
        explanation: "Temperature affects plant growth rates, flowering, and fruit \
                      development. Most crops have optimal temperature ranges.",
    },
    WeatherFactor {
        name: "Rainfall",
        icon: "🌧️",
        explanation: "Water is essential for plant growth. Both too little and \
                      too much rainfall can harm crops.",
    },
    WeatherFactor {
        name: "Humidity",
        icon: "💧",
        explanation: "High humidity can promote fungal diseases, while low humidity \
                      can cause water stress in plants.",
    },
    WeatherFactor {
        name: "Sunlight",
        icon: "☀️",
        explanation: "Plants need light for photosynthesis. Different crops have \
                      varying light requirements.",
    },
];

pub const WEATHER_TIP: &str = "Monitor weather forecasts regularly and plan your farming \
                               activities accordingly to maximize yield and minimize losses.";
