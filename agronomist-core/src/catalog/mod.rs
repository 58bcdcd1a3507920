//! Static reference content, keyed so panels look entries up instead of branching

pub mod crops;
pub mod pests;
pub mod weather;

pub use crops::{lookup_profile, Crop, CropProfile};
pub use pests::{PestCategory, PestEntry, GENERAL_TIPS};
pub use weather::{WeatherFactor, WEATHER_FACTORS, WEATHER_TIP};
