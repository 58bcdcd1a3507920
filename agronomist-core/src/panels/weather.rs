//! Weather insights panel

use crate::catalog::{WeatherFactor, WEATHER_FACTORS, WEATHER_TIP};
use crate::display::{Block, DisplayTree, Form, FormMethod, Rich, Tone, Widget};
use crate::inputs::WeatherQuery;

pub fn render(query: &WeatherQuery) -> DisplayTree {
    let mut tree = DisplayTree::new();
    tree.push(Block::heading(2, "🌤️ Weather Insights"))
        .push(Block::paragraph(
            "Understand how weather conditions affect your crops.",
        ))
        .push(Block::Form(location_form(query)));

    if !query.location.is_empty() {
        tree.push(Block::callout(
            Tone::Info,
            vec![Block::paragraph(
                Rich::new()
                    .plain("📍 Showing weather insights for: ")
                    .strong(query.location.as_str()),
            )],
        ));
    }

    let (left, right) = WEATHER_FACTORS.split_at(2);
    tree.push(Block::heading(3, "Key Weather Factors for Agriculture"))
        .push(Block::Columns {
            columns: vec![factor_column(left), factor_column(right)],
        })
        .push(Block::callout(
            Tone::Info,
            vec![Block::paragraph(
                Rich::new().plain("💡 ").strong("Tip:").plain(format!(" {WEATHER_TIP}")),
            )],
        ));

    tree
}

fn location_form(query: &WeatherQuery) -> Form {
    Form {
        id: "weather_location".to_owned(),
        method: FormMethod::Get,
        fields: vec![Widget::TextInput {
            name: "location".to_owned(),
            label: "Enter your location:".to_owned(),
            placeholder: Some("e.g., City, Country".to_owned()),
            value: query.location.clone(),
        }],
        submit_label: "Show insights".to_owned(),
    }
}

fn factor_column(factors: &[WeatherFactor]) -> Vec<Block> {
    factors
        .iter()
        .flat_map(|factor| {
            [
                Block::heading(4, format!("{} {}", factor.name, factor.icon)),
                Block::paragraph(factor.explanation),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(location: &str) -> WeatherQuery {
        WeatherQuery {
            location: location.to_owned(),
        }
    }

    #[test]
    fn location_is_echoed_verbatim() {
        let tree = render(&query("Lagos, Nigeria"));
        let callouts = tree.callouts(Tone::Info);
        assert_eq!(callouts.len(), 2);
        assert!(tree.contains_text("Showing weather insights for: Lagos, Nigeria"));
    }

    #[test]
    fn empty_location_has_no_confirmation() {
        let tree = render(&query(""));
        assert!(!tree.contains_text("Showing weather insights for"));
        assert_eq!(tree.callouts(Tone::Info).len(), 1);
    }

    #[test]
    fn factors_do_not_depend_on_location() {
        let a = render(&query("Oslo"));
        let b = render(&query("Lima"));
        let factors = |tree: &DisplayTree| {
            tree.blocks
                .iter()
                .find(|block| matches!(block, Block::Columns { .. }))
                .cloned()
        };
        assert!(factors(&a).is_some());
        assert_eq!(factors(&a), factors(&b));
    }

    #[test]
    fn all_four_factors_are_listed() {
        let tree = render(&query(""));
        for name in ["Temperature", "Rainfall", "Humidity", "Sunlight"] {
            assert!(tree.contains_text(name), "{name}");
        }
    }
}
