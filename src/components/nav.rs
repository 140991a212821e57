use dioxus::prelude::*;

use crate::utils::dom;

const SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("research", "Research"),
    ("publications", "Publications"),
    ("contact", "Contact"),
];

/// Fixed navigation bar. Anchor clicks are intercepted so sections scroll
/// smoothly into view instead of jumping.
#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav { class: "lt-nav",
            span { class: "lt-nav-brand", "J. Delser" }
            ul { class: "lt-nav-links",
                for (section_id, label) in SECTIONS {
                    li {
                        a {
                            href: "#{section_id}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                dom::scroll_to_section(section_id);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
