//! About panel with the contact form

use tracing::{info, warn};

use crate::contact::{ContactField, ContactOutcome, ContactSubmission};
use crate::display::{Block, DisplayTree, Form, FormMethod, Rich, Tone, Widget};
use crate::inputs::AboutRequest;

pub fn render(request: &AboutRequest) -> DisplayTree {
    let mut tree = DisplayTree::new();
    tree.push(Block::heading(2, "📚 About AIAgronomist"))
        .push(Block::heading(2, "Our Mission"))
        .push(Block::paragraph(
            "AIAgronomist aims to democratize agricultural knowledge and make it \
             accessible to farmers, gardeners, and agricultural enthusiasts worldwide.",
        ))
        .push(Block::heading(2, "Features"))
        .push(Block::list([
            Rich::term("Comprehensive Crop Database", "Information on hundreds of crops"),
            Rich::term("Weather Integration", "Understand weather impacts on your farm"),
            Rich::term("Pest Management", "Identify and control agricultural pests"),
            Rich::term("Best Practices", "Expert agricultural recommendations"),
        ]))
        .push(Block::heading(2, "Technology"))
        .push(Block::paragraph("Built with:"))
        .push(Block::list(["🦀 Rust", "🌐 Axum", "🤖 AI-powered insights"]))
        .push(Block::Divider)
        .push(Block::paragraph(Rich::new().emphasis(
            "AIAgronomist is continuously improving. Stay tuned for new features!",
        )))
        .push(Block::heading(3, "Get in Touch"))
        .push(Block::paragraph(
            "Have questions or feedback? We'd love to hear from you!",
        ))
        .push(Block::Form(contact_form(request.submission.as_ref())));

    if let Some(submission) = &request.submission {
        let outcome = submission.validate();
        log_outcome(&outcome);
        let tone = if outcome.is_accepted() {
            Tone::Success
        } else {
            Tone::Warning
        };
        tree.push(Block::callout(tone, vec![Block::paragraph(outcome.message())]));
    }

    tree
}

fn contact_form(submission: Option<&ContactSubmission>) -> Form {
    let value = |field: ContactField| {
        submission
            .map(|s| s.value(field).to_owned())
            .unwrap_or_default()
    };

    let fields = ContactField::ALL
        .into_iter()
        .map(|field| match field {
            ContactField::Message => Widget::TextArea {
                name: field.as_str().to_owned(),
                label: field.label().to_owned(),
                value: value(field),
            },
            ContactField::Name | ContactField::Email => Widget::TextInput {
                name: field.as_str().to_owned(),
                label: field.label().to_owned(),
                placeholder: None,
                value: value(field),
            },
        })
        .collect();

    Form {
        id: "contact_form".to_owned(),
        method: FormMethod::Post,
        fields,
        submit_label: "Send Message".to_owned(),
    }
}

// Field presence only; message content is never logged.
fn log_outcome(outcome: &ContactOutcome) {
    match outcome {
        ContactOutcome::Accepted => info!("contact form submitted"),
        ContactOutcome::Incomplete { missing } => {
            let missing: Vec<_> = missing.iter().map(ContactField::as_str).collect();
            warn!(missing = ?missing, "contact form incomplete");
        }
    }
}
