//! Crop information panel

use crate::catalog::{lookup_profile, Crop, CropProfile};
use crate::display::{Block, DisplayTree, Form, FormMethod, Rich, SelectOption, Widget};
use crate::inputs::{CropQuery, CROP_SENTINEL};

pub fn render(query: &CropQuery) -> DisplayTree {
    let mut tree = DisplayTree::new();
    tree.push(Block::heading(2, "🌱 Crop Information"))
        .push(Block::paragraph(
            "Search for crops and learn about their growing conditions.",
        ))
        .push(Block::Form(search_form(query)));

    if let Some(name) = query.selected_name() {
        tree.push(Block::heading(3, format!("Information about {name}")))
            .push(fact_sheet(lookup_profile(&name)));
    }

    tree
}

fn search_form(query: &CropQuery) -> Form {
    let mut options = vec![SelectOption::new("", CROP_SENTINEL)];
    options.extend(
        Crop::ALL
            .iter()
            .map(|crop| SelectOption::new(crop.name(), crop.name())),
    );

    Form {
        id: "crop_search".to_owned(),
        method: FormMethod::Get,
        fields: vec![
            Widget::TextInput {
                name: "search".to_owned(),
                label: "Search for a crop:".to_owned(),
                placeholder: Some("e.g., Tomato, Wheat, Rice".to_owned()),
                value: query.search.clone(),
            },
            Widget::Select {
                name: "crop".to_owned(),
                label: "Or select from common crops:".to_owned(),
                options,
                selected: query.choice.map(|crop| crop.name().to_owned()),
            },
        ],
        submit_label: "Search".to_owned(),
    }
}

/// Two columns of growing facts.
fn fact_sheet(profile: &CropProfile) -> Block {
    Block::Columns {
        columns: vec![
            fact_column(profile.conditions()),
            fact_column(profile.cultivation()),
        ],
    }
}

fn fact_column(rows: [(&'static str, &'static str); 4]) -> Vec<Block> {
    rows.into_iter()
        .map(|(label, value)| Block::paragraph(Rich::labelled(label, value)))
        .collect()
}
