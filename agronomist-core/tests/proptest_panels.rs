use agronomist_core::inputs::{CropQuery, WeatherQuery};
use agronomist_core::panels::{crop, weather};
use agronomist_core::{Block, ContactSubmission, Crop, DisplayTree, Tone};
use proptest::prelude::*;

fn fact_block(tree: &DisplayTree) -> Option<Block> {
    tree.blocks
        .iter()
        .find(|block| matches!(block, Block::Columns { .. }))
        .cloned()
}

fn arb_crop() -> impl Strategy<Value = Crop> {
    prop::sample::select(Crop::ALL.to_vec())
}

proptest! {
    /// Property: any non-empty search shows the same facts as any listed crop
    #[test]
    fn prop_crop_facts_ignore_input(search in ".{1,40}", crop in arb_crop()) {
        let typed = crop::render(&CropQuery { search: search.clone(), choice: None });
        let picked = crop::render(&CropQuery { search: String::new(), choice: Some(crop) });

        let expected = format!("Information about {search}");
        prop_assert!(typed.headings(3).contains(&expected.as_str()));
        prop_assert!(fact_block(&typed).is_some());
        prop_assert_eq!(fact_block(&typed), fact_block(&picked));
    }

    /// Property: the weather confirmation echoes the location verbatim
    #[test]
    fn prop_weather_echoes_location(location in ".{1,60}") {
        let tree = weather::render(&WeatherQuery { location: location.clone() });
        let callouts = tree.callouts(Tone::Info);
        prop_assert_eq!(callouts.len(), 2);

        let confirmation = DisplayTree::from(callouts[0].to_vec());
        prop_assert!(confirmation.contains_text(&location));
    }

    /// Property: validation never panics and is stable across repeats
    #[test]
    fn prop_contact_validation_idempotent(name in ".{0,8}", email in ".{0,8}", message in ".{0,8}") {
        let submission = ContactSubmission::new(name.clone(), email.clone(), message.clone());
        let outcome = submission.validate();
        prop_assert_eq!(&outcome, &submission.validate());
        prop_assert_eq!(
            outcome.is_accepted(),
            !name.is_empty() && !email.is_empty() && !message.is_empty()
        );
    }
}
