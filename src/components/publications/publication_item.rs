use dioxus::prelude::*;

use crate::scholar::PublicationRecord;

/// Renders one publication record: title, authors, venue, year, citation
/// count, and a "View Paper" link when the record carries one.
#[component]
pub fn PublicationItem(record: PublicationRecord) -> Element {
    let paper_link = record.link.map(|href| {
        rsx! {
            a {
                class: "lt-publication-link",
                href: "{href}",
                target: "_blank",
                "View Paper"
            }
        }
    });

    rsx! {
        article { class: "lt-publication-item",
            div { class: "lt-publication-title", "{record.title}" }
            div { class: "lt-publication-authors", "{record.authors}" }
            div { class: "lt-publication-venue", "{record.venue}" }
            div { class: "lt-publication-meta",
                span { "Year: {record.year}" }
                span { "Citations: {record.citations}" }
                {paper_link}
            }
        }
    }
}
