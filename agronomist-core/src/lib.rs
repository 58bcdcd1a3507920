//! agronomist-core: pages, content catalog, and panel rendering
//!
//! Rendering is a pure function from (selected page, widget values) to a
//! [`DisplayTree`]. Hosts (the HTTP server, the CLI) only draw the tree.

pub mod catalog;
pub mod contact;
pub mod display;
pub mod error;
pub mod inputs;
pub mod page;
pub mod panels;
pub mod render_md;
pub mod router;

pub use catalog::{Crop, CropProfile, PestCategory, PestEntry};
pub use contact::{ContactField, ContactOutcome, ContactSubmission};
pub use display::{Block, DisplayTree, Form, FormMethod, Rich, SelectOption, Span, Tone, Widget};
pub use error::{AgronomistError, Result};
pub use inputs::{InputParams, Inputs};
pub use page::Page;
pub use render_md::{render_app_md, render_tree_md};
pub use router::{dispatch, render_app, AppView, NavItem, PanelRequest, PageConfig};
