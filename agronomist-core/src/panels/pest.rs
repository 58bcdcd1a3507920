//! Pest management panel

use crate::catalog::{PestCategory, GENERAL_TIPS};
use crate::display::{Block, DisplayTree, Form, FormMethod, Rich, SelectOption, Tone, Widget};
use crate::inputs::{PestQuery, CATEGORY_SENTINEL};

pub fn render(query: &PestQuery) -> DisplayTree {
    let mut tree = DisplayTree::new();
    tree.push(Block::heading(2, "🐛 Pest Management"))
        .push(Block::paragraph(
            "Identify and manage common agricultural pests.",
        ))
        .push(Block::Form(category_form(query)));

    if let Some(category) = query.category {
        tree.push(Block::heading(3, format!("Common {category} in Agriculture")))
            .push(category_list(category));
    }

    tree.push(Block::heading(3, "General Pest Management Tips"))
        .push(Block::callout(
            Tone::Success,
            vec![Block::list(GENERAL_TIPS.iter().map(|(icon, title, detail)| {
                Rich::new()
                    .plain(format!("{icon} "))
                    .strong(*title)
                    .plain(format!(": {detail}"))
            }))],
        ));

    tree
}

/// Bullet list of the common pests in `category`.
pub fn category_list(category: PestCategory) -> Block {
    Block::list(
        category
            .entries()
            .iter()
            .map(|entry| Rich::term(entry.name, entry.description)),
    )
}

fn category_form(query: &PestQuery) -> Form {
    let mut options = vec![SelectOption::new("", CATEGORY_SENTINEL)];
    options.extend(
        PestCategory::ALL
            .iter()
            .map(|category| SelectOption::new(category.name(), category.name())),
    );

    Form {
        id: "pest_category".to_owned(),
        method: FormMethod::Get,
        fields: vec![Widget::Select {
            name: "category".to_owned(),
            label: "Select pest category:".to_owned(),
            options,
            selected: query.category.map(|category| category.name().to_owned()),
        }],
        submit_label: "Show pests".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(tree: &DisplayTree) -> Vec<Vec<String>> {
        tree.blocks
            .iter()
            .filter_map(|block| match block {
                Block::List { items } => Some(items.iter().map(Rich::to_plain).collect()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn each_category_shows_its_list() {
        let expected = [
            (
                PestCategory::Insects,
                [
                    "Aphids: Small sap-sucking insects",
                    "Caterpillars: Larvae that feed on leaves",
                    "Beetles: Can damage roots, leaves, and fruits",
                    "Whiteflies: Tiny white insects on leaf undersides",
                ],
            ),
            (
                PestCategory::Diseases,
                [
                    "Powdery Mildew: White powdery coating on leaves",
                    "Blight: Rapid browning and death of plant tissue",
                    "Root Rot: Fungal infection of plant roots",
                    "Rust: Orange-brown pustules on leaves",
                ],
            ),
            (
                PestCategory::Weeds,
                [
                    "Crabgrass: Aggressive grass weed",
                    "Dandelion: Common broadleaf weed",
                    "Bindweed: Climbing vine that chokes crops",
                    "Nutsedge: Difficult-to-control sedge weed",
                ],
            ),
            (
                PestCategory::Rodents,
                [
                    "Field Mice: Damage crops and stored grain",
                    "Rats: Can destroy large quantities of stored food",
                    "Gophers: Create tunnels that damage roots",
                    "Voles: Gnaw on bark and roots",
                ],
            ),
        ];

        for (category, items) in expected {
            let tree = render(&PestQuery {
                category: Some(category),
            });
            assert_eq!(tree.headings(3)[0], format!("Common {category} in Agriculture"));
            assert_eq!(lists(&tree)[0], items.map(String::from).to_vec());
        }
    }

    #[test]
    fn no_selection_shows_only_general_tips() {
        let tree = render(&PestQuery::default());
        assert_eq!(tree.headings(3), vec!["General Pest Management Tips"]);
        assert!(lists(&tree).is_empty());

        let tips = tree.callouts(Tone::Success);
        assert_eq!(tips.len(), 1);
        match &tips[0][0] {
            Block::List { items } => assert_eq!(items.len(), 5),
            other => panic!("unexpected block: {other:?}"),
        }
    }
}
