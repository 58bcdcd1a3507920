//! Page router and application frame
//!
//! One call per interaction: (selection, inputs) in, display tree out.
//! The match over [`PanelRequest`] is exhaustive, so there is no fallback page.

use serde::Serialize;
use tracing::debug;

use crate::display::DisplayTree;
use crate::inputs::{AboutRequest, CropQuery, Inputs, PestQuery, WeatherQuery};
use crate::page::Page;
use crate::panels;

/// Browser-level page settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageConfig {
    pub page_title: &'static str,
    pub page_icon: &'static str,
    pub wide_layout: bool,
    pub sidebar_expanded: bool,
}

pub const PAGE_CONFIG: PageConfig = PageConfig {
    page_title: "AIAgronomist",
    page_icon: "🌾",
    wide_layout: true,
    sidebar_expanded: true,
};

pub const APP_TITLE: &str = "🌾 AIAgronomist";
pub const APP_TAGLINE: &str = "Your AI-Powered Agricultural Assistant";
pub const NAV_HEADER: &str = "Navigation";
pub const NAV_PROMPT: &str = "Select a page:";

/// A page selection together with the inputs only that page reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRequest {
    Home,
    CropInformation(CropQuery),
    WeatherInsights(WeatherQuery),
    PestManagement(PestQuery),
    About(AboutRequest),
}

impl PanelRequest {
    /// Pick out the inputs relevant to `page`. Everything else is dropped.
    pub fn new(page: Page, inputs: Inputs) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::CropInformation => Self::CropInformation(CropQuery {
                search: inputs.crop_search,
                choice: inputs.crop_choice,
            }),
            Page::WeatherInsights => Self::WeatherInsights(WeatherQuery {
                location: inputs.location,
            }),
            Page::PestManagement => Self::PestManagement(PestQuery {
                category: inputs.pest_category,
            }),
            Page::About => Self::About(AboutRequest {
                submission: inputs.contact,
            }),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::CropInformation(_) => Page::CropInformation,
            Self::WeatherInsights(_) => Page::WeatherInsights,
            Self::PestManagement(_) => Page::PestManagement,
            Self::About(_) => Page::About,
        }
    }
}

/// Render the selected panel.
pub fn dispatch(request: &PanelRequest) -> DisplayTree {
    debug!(page = request.page().slug(), "rendering panel");

    match request {
        PanelRequest::Home => panels::home::render(),
        PanelRequest::CropInformation(query) => panels::crop::render(query),
        PanelRequest::WeatherInsights(query) => panels::weather::render(query),
        PanelRequest::PestManagement(query) => panels::pest::render(query),
        PanelRequest::About(request) => panels::about::render(request),
    }
}

/// Sidebar radio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything a host needs to draw one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppView {
    pub config: PageConfig,
    pub title: &'static str,
    pub tagline: &'static str,
    pub nav_header: &'static str,
    pub nav_prompt: &'static str,
    pub nav: Vec<NavItem>,
    pub page: Page,
    pub body: DisplayTree,
}

/// Render the frame around the selected panel.
pub fn render_app(page: Page, inputs: Inputs) -> AppView {
    let request = PanelRequest::new(page, inputs);
    let body = dispatch(&request);

    AppView {
        config: PAGE_CONFIG,
        title: APP_TITLE,
        tagline: APP_TAGLINE,
        nav_header: NAV_HEADER,
        nav_prompt: NAV_PROMPT,
        nav: Page::ALL
            .into_iter()
            .map(|p| NavItem {
                page: p,
                label: p.label(),
                selected: p == page,
            })
            .collect(),
        page,
        body,
    }
}
