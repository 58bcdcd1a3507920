//! Home panel: welcome text and headline numbers

use crate::display::{Block, DisplayTree, Rich};

/// Headline tiles: (label, value, help). Fixed numbers, not counted from the catalog.
pub const METRICS: [(&str, &str, &str); 3] = [
    ("Crops Database", "100+", "Number of crops in our database"),
    ("Growing Tips", "500+", "Expert growing tips available"),
    ("Pest Solutions", "200+", "Pest management solutions"),
];

pub fn render() -> DisplayTree {
    let mut tree = DisplayTree::new();
    tree.push(Block::heading(2, "Welcome to AIAgronomist! 👋"))
        .push(Block::paragraph(
            "AIAgronomist is your intelligent companion for all things agriculture. \
             Whether you're a seasoned farmer or just starting your gardening journey, \
             we're here to help you grow better.",
        ))
        .push(Block::heading(3, "What can you do here?"))
        .push(Block::list([
            Rich::new()
                .plain("🌱 ")
                .strong("Crop Information")
                .plain(": Learn about different crops, their growing seasons, and optimal conditions"),
            Rich::new()
                .plain("🌤️ ")
                .strong("Weather Insights")
                .plain(": Understand how weather affects your crops"),
            Rich::new()
                .plain("🐛 ")
                .strong("Pest Management")
                .plain(": Identify and manage common agricultural pests"),
            Rich::new()
                .plain("📚 ")
                .strong("Expert Knowledge")
                .plain(": Access agricultural best practices and tips"),
        ]))
        .push(Block::Divider)
        .push(Block::paragraph(
            Rich::new().emphasis("Select a page from the sidebar to get started!"),
        ))
        .push(Block::Columns {
            columns: METRICS
                .iter()
                .map(|(label, value, help)| vec![Block::metric(label, value, help)])
                .collect(),
        });
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_values(tree: &DisplayTree) -> Vec<String> {
        tree.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Columns { columns } => Some(columns),
                _ => None,
            })
            .flatten()
            .flatten()
            .filter_map(|block| match block {
                Block::Metric { value, .. } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn metrics_are_fixed_literals() {
        assert_eq!(metric_values(&render()), vec!["100+", "500+", "200+"]);
    }

    #[test]
    fn render_is_stable() {
        assert_eq!(render(), render());
    }

    #[test]
    fn welcome_heading_comes_first() {
        let tree = render();
        assert_eq!(tree.headings(2), vec!["Welcome to AIAgronomist! 👋"]);
    }
}
