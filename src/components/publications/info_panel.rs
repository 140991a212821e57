use dioxus::prelude::*;

use crate::scholar::{example_publications, ScholarId};

use super::PublicationItem;

/// "Several options" panel rendered after a successful load: the three
/// integration options plus the example publication listing.
///
/// All markup is built as structured nodes; the only visitor-influenced value
/// is the embed link href, which comes from the sanitized [`ScholarId`].
#[component]
pub fn InfoPanel(scholar_id: ScholarId, on_manual_entry: EventHandler<()>) -> Element {
    let profile_url = scholar_id.profile_url();

    rsx! {
        div { class: "lt-publications-info",
            h3 { "Google Scholar Integration Options" }
            p { "To display your publications automatically, you have several options:" }

            div { class: "lt-option-card",
                h4 { "Option 1: Use SerpApi (Recommended)" }
                ol {
                    li {
                        "Sign up for a free account at "
                        a { href: "https://serpapi.com/", target: "_blank", "SerpApi" }
                    }
                    li { "Get your API key from the dashboard" }
                    li { "Wire the key into the publications loader and rebuild" }
                    li { "Reload the page and click \"Load Publications\"" }
                }
                p { "SerpApi offers 100 free searches per month." }
            }

            div { class: "lt-option-card",
                h4 { "Option 2: Manual Entry" }
                p { "You can manually add your publications to the page source." }
                button {
                    class: "lt-btn",
                    onclick: move |_| on_manual_entry.call(()),
                    "Show Manual Entry Format"
                }
            }

            div { class: "lt-option-card",
                h4 { "Option 3: Use Google Scholar Embed" }
                p { "Visit your profile directly:" }
                a {
                    class: "lt-btn",
                    href: "{profile_url}",
                    target: "_blank",
                    "View on Google Scholar"
                }
            }

            div { class: "lt-example-publications",
                h4 { "Example Publication Format" }
                p { class: "lt-example-note",
                    "Below is an example of how publications will be displayed:"
                }
                for record in example_publications() {
                    PublicationItem { record }
                }
            }
        }
    }
}
