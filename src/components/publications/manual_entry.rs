use dioxus::prelude::*;

/// Literal template shown to visitors who want to hand-edit their
/// publication list; illustrates the expected publication-item markup shape.
const EXAMPLE_MARKUP: &str = r#"<article class="lt-publication-item">
    <div class="lt-publication-title">Your Paper Title</div>
    <div class="lt-publication-authors">Author1, Author2, Author3</div>
    <div class="lt-publication-venue">Journal/Conference Name, Year</div>
    <div class="lt-publication-meta">
        <span>Year: 2024</span>
        <span>Citations: 10</span>
        <a href="paper-url" target="_blank" class="lt-publication-link">View Paper</a>
    </div>
</article>"#;

/// Manual-entry instructions, replacing all prior results-container content.
#[component]
pub fn ManualEntryPanel(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "lt-manual-entry-info",
            h3 { "Manual Publication Entry" }
            p {
                "To manually add your publications, edit the publications "
                "section of the page source and list your own publications "
                "using this format:"
            }
            pre { class: "lt-manual-entry-example",
                code { "{EXAMPLE_MARKUP}" }
            }
            button {
                class: "lt-btn",
                onclick: move |_| on_back.call(()),
                "Back to Publications"
            }
        }
    }
}
