//! Render a page to the terminal
//!
//! Same render pass the web UI performs, drawn as markdown or dumped as JSON.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use agronomist_core::{render_app, render_app_md, AppView, ContactSubmission, InputParams, Page};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Page to render (slug or label, e.g. "crop-information")
    pub page: Page,

    /// Crop search text
    #[arg(long)]
    pub search: Option<String>,

    /// Common crop from the dropdown (e.g. "Wheat")
    #[arg(long)]
    pub crop: Option<String>,

    /// Location for weather insights
    #[arg(long)]
    pub location: Option<String>,

    /// Pest category (Insects, Diseases, Weeds, Rodents)
    #[arg(long)]
    pub category: Option<String>,

    /// Submit the contact form with --name/--email/--message
    #[arg(long)]
    pub submit: bool,

    /// Contact form name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Contact form email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Contact form message
    #[arg(long, default_value = "")]
    pub message: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = RenderFormat::Markdown)]
    pub format: RenderFormat,
}

impl RenderArgs {
    pub fn view(&self) -> Result<AppView> {
        let params = InputParams {
            search: self.search.clone(),
            crop: self.crop.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
        };
        let mut inputs = params.into_inputs().context("Invalid page input")?;

        if self.submit {
            inputs = inputs.with_contact(ContactSubmission::new(
                self.name.as_str(),
                self.email.as_str(),
                self.message.as_str(),
            ));
        }

        Ok(render_app(self.page, inputs))
    }
}

pub fn run_render(args: RenderArgs) -> Result<()> {
    let view = args.view()?;

    match args.format {
        RenderFormat::Markdown => print!("{}", render_app_md(&view)),
        RenderFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}
