//! Widget values for a single render pass
//!
//! Nothing here outlives the request that carried it.

use serde::{Deserialize, Serialize};

use crate::catalog::{Crop, PestCategory};
use crate::contact::ContactSubmission;
use crate::error::Result;

/// Dropdown sentinel meaning "no crop chosen"
pub const CROP_SENTINEL: &str = "Select a crop...";
/// Dropdown sentinel meaning "no category chosen"
pub const CATEGORY_SENTINEL: &str = "Select category...";

/// Raw widget values as they arrive from a query string or CLI flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Typed widget values for every panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub crop_search: String,
    pub crop_choice: Option<Crop>,
    pub location: String,
    pub pest_category: Option<PestCategory>,
    pub contact: Option<ContactSubmission>,
}

impl InputParams {
    /// Parse dropdown values. Empty strings and sentinels mean no selection.
    pub fn into_inputs(self) -> Result<Inputs> {
        let crop_choice = match selection(self.crop.as_deref(), CROP_SENTINEL) {
            Some(value) => Some(value.parse::<Crop>()?),
            None => None,
        };
        let pest_category = match selection(self.category.as_deref(), CATEGORY_SENTINEL) {
            Some(value) => Some(value.parse::<PestCategory>()?),
            None => None,
        };

        Ok(Inputs {
            crop_search: self.search.unwrap_or_default(),
            crop_choice,
            location: self.location.unwrap_or_default(),
            pest_category,
            contact: None,
        })
    }
}

fn selection<'a>(value: Option<&'a str>, sentinel: &str) -> Option<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != sentinel)
}

impl Inputs {
    pub fn with_contact(mut self, submission: ContactSubmission) -> Self {
        self.contact = Some(submission);
        self
    }
}

/// Crop page inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropQuery {
    pub search: String,
    pub choice: Option<Crop>,
}

impl CropQuery {
    /// Name to show facts for: typed text wins over the dropdown.
    pub fn selected_name(&self) -> Option<String> {
        if !self.search.is_empty() {
            Some(self.search.clone())
        } else {
            self.choice.map(|crop| crop.name().to_owned())
        }
    }
}

/// Weather page inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherQuery {
    pub location: String,
}

/// Pest page inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PestQuery {
    pub category: Option<PestCategory>,
}

/// About page inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutRequest {
    /// Present only when the form was submitted
    pub submission: Option<ContactSubmission>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgronomistError;

    #[test]
    fn empty_and_sentinel_values_mean_no_selection() {
        let params = InputParams {
            crop: Some(String::new()),
            category: Some(CATEGORY_SENTINEL.to_owned()),
            ..Default::default()
        };
        let inputs = params.into_inputs().unwrap();
        assert_eq!(inputs.crop_choice, None);
        assert_eq!(inputs.pest_category, None);
    }

    #[test]
    fn dropdown_values_parse() {
        let params = InputParams {
            crop: Some("rice".into()),
            category: Some("Rodents".into()),
            location: Some("Nairobi, Kenya".into()),
            ..Default::default()
        };
        let inputs = params.into_inputs().unwrap();
        assert_eq!(inputs.crop_choice, Some(Crop::Rice));
        assert_eq!(inputs.pest_category, Some(PestCategory::Rodents));
        assert_eq!(inputs.location, "Nairobi, Kenya");
    }

    #[test]
    fn unknown_dropdown_value_is_error() {
        let params = InputParams {
            category: Some("Birds".into()),
            ..Default::default()
        };
        assert_eq!(
            params.into_inputs().unwrap_err(),
            AgronomistError::unknown_pest_category("Birds")
        );
    }

    #[test]
    fn search_text_wins_over_dropdown() {
        let query = CropQuery {
            search: "Barley".into(),
            choice: Some(Crop::Corn),
        };
        assert_eq!(query.selected_name().as_deref(), Some("Barley"));

        let query = CropQuery {
            search: String::new(),
            choice: Some(Crop::Corn),
        };
        assert_eq!(query.selected_name().as_deref(), Some("Corn"));

        assert_eq!(CropQuery::default().selected_name(), None);
    }
}
