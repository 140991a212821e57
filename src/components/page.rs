//! Static profile sections. Presentation only; no state beyond the markup.

use dioxus::prelude::*;

/// Hero section with initials avatar and short bio.
#[component]
pub fn ProfileHero() -> Element {
    rsx! {
        section { id: "about", class: "lt-section lt-hero",
            div { class: "lt-avatar", "JD" }
            div { class: "lt-hero-text",
                h1 { "J. Delser" }
                p { class: "lt-hero-subtitle", "Researcher · Example University" }
                p {
                    "I work on example research problems at the intersection of "
                    "theory and practice. This page collects my publications, "
                    "current projects, and contact details."
                }
            }
        }
    }
}

#[component]
pub fn ResearchSection() -> Element {
    rsx! {
        section { id: "research", class: "lt-section",
            h2 { class: "lt-section-title", "Research Interests" }
            ul { class: "lt-research-list",
                li { "Example methods for comprehensive studies" }
                li { "Important topics and their applications" }
                li { "Collaborative research infrastructure" }
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "lt-section",
            h2 { class: "lt-section-title", "Contact" }
            p {
                "Email: "
                a { href: "mailto:jdelser@example.edu", "jdelser@example.edu" }
            }
            p { "Office: Example Hall, Room 404" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "lt-footer",
            p { "© 2026 J. Delser" }
        }
    }
}
