use dioxus::prelude::*;

use crate::scholar::ScholarId;
use crate::utils::dom;

/// Scholar ID card: input field, load button, and the external profile link.
///
/// The link target follows the field as the visitor types, always through
/// [`ScholarId::sanitize`] so raw input never reaches the href.
#[component]
pub fn ScholarCard(
    input: Signal<String>,
    loading: ReadOnlySignal<bool>,
    on_load: EventHandler<String>,
) -> Element {
    let sanitized = ScholarId::sanitize(&input.read());
    let link_target = if sanitized.is_empty() {
        "#".to_string()
    } else {
        sanitized.profile_url()
    };

    // Captures are Copy (signals and the handler), so the closure can back
    // both the click and the Enter-key paths
    let submit = move || {
        let raw = input.read().clone();
        if ScholarId::sanitize(raw.trim()).is_empty() {
            dom::alert("Please enter your Google Scholar ID");
            return;
        }
        on_load.call(raw);
    };

    rsx! {
        div { class: "lt-scholar-card",
            div { class: "lt-scholar-input-row",
                input {
                    class: "lt-scholar-input",
                    r#type: "text",
                    placeholder: "Your Google Scholar ID",
                    value: "{input}",
                    disabled: loading(),
                    oninput: move |evt| input.set(evt.value()),
                    onkeypress: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "lt-btn lt-btn--primary",
                    disabled: loading(),
                    onclick: move |_| submit(),
                    if loading() {
                        "Loading…"
                    } else {
                        "Load Publications"
                    }
                }
            }
            div { class: "lt-scholar-hint",
                span {
                    "Your ID is the "
                    code { "user" }
                    " parameter of your profile URL."
                }
                a {
                    class: "lt-scholar-link",
                    href: "{link_target}",
                    target: "_blank",
                    "View Profile on Google Scholar"
                }
            }
        }
    }
}
