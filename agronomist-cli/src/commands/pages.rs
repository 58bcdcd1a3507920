//! List the navigable pages

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use agronomist_core::Page;

#[derive(Parser, Debug)]
pub struct PagesArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_pages(args: PagesArgs) -> Result<()> {
    if args.json {
        let pages: Vec<_> = Page::ALL
            .iter()
            .map(|page| json!({ "slug": page.slug(), "label": page.label() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&pages)?);
        return Ok(());
    }

    for page in Page::ALL {
        println!("{:<18} {}", page.slug(), page.label());
    }
    Ok(())
}
