use dioxus::prelude::*;

use crate::scholar::ScholarId;

/// Troubleshooting panel shown when loading the publications view fails.
///
/// Offers three remediation paths; the profile link is set programmatically
/// from the sanitized [`ScholarId`], never interpolated from raw input.
#[component]
pub fn ErrorPanel(scholar_id: ScholarId, on_manual_entry: EventHandler<()>) -> Element {
    let profile_url = scholar_id.profile_url();

    rsx! {
        div { class: "lt-error-message",
            p { "Unable to automatically fetch publications. This could be due to:" }
            ul {
                li { "CORS restrictions from Google Scholar" }
                li { "Missing API key for a proxy service" }
                li { "Browser storage being unavailable" }
            }
            p { strong { "Solutions:" } }
            ol {
                li {
                    "Sign up for a free API key at "
                    a { href: "https://serpapi.com/", target: "_blank", "SerpApi" }
                    " and wire it into the publications loader"
                }
                li { "Use the manual entry option below" }
                li {
                    "Visit your "
                    a {
                        href: "{profile_url}",
                        target: "_blank",
                        "Google Scholar profile"
                    }
                    " directly"
                }
            }
            button {
                class: "lt-btn",
                onclick: move |_| on_manual_entry.call(()),
                "Add Publications Manually"
            }
        }
    }
}
