//! The Scholar publications widget.
//!
//! [`PublicationsSection`] owns the widget state: the input field contents,
//! the current sanitized identifier, the loading flag, and an explicit
//! [`ResultsView`] value that drives a single render dispatch for the results
//! container. `None` means the container is empty (initial state).

mod error_panel;
mod info_panel;
mod manual_entry;
mod publication_item;
mod scholar_card;

pub use error_panel::ErrorPanel;
pub use info_panel::InfoPanel;
pub use manual_entry::ManualEntryPanel;
pub use publication_item::PublicationItem;
pub use scholar_card::ScholarCard;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::components::use_profile_store;
use crate::error::SubmitError;
use crate::scholar::{self, ScholarId};
use crate::utils::dom;

/// Which panel currently occupies the results container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    /// Integration options plus the example publication listing
    Info,
    /// Manual-entry instructions with the example markup block
    ManualEntry,
    /// Troubleshooting panel with remediation paths
    Error,
}

/// Messages for the load coroutine.
enum LoadMessage {
    LoadPublications(String), // raw field value
}

/// Publications section: Scholar ID card, loading indicator, and the
/// view-state-dispatched results container.
#[component]
pub fn PublicationsSection() -> Element {
    let mut input = use_signal(String::new);
    let mut current_id = use_signal(|| None::<ScholarId>);
    let mut results_view = use_signal(|| None::<ResultsView>);
    let mut loading = use_signal(|| false);

    let store = use_profile_store();

    // Restore the persisted identifier once on mount, reflecting the
    // sanitized value into the field (and thereby into the profile link).
    {
        let store = store.clone();
        use_effect(move || match scholar::load_saved_id(store.as_ref()) {
            Ok(Some(id)) => {
                input.set(id.as_str().to_string());
                current_id.set(Some(id));
            }
            Ok(None) => {}
            Err(e) => error!("Failed to restore saved Scholar ID: {e}"),
        });
    }

    // Load coroutine - the widget's one nominal async boundary. No real I/O
    // is awaited; the Info view is rendered from fixed example records.
    let load_task = use_coroutine({
        let store = store.clone();
        move |mut rx: UnboundedReceiver<LoadMessage>| {
            let store = store.clone();
            async move {
                while let Some(LoadMessage::LoadPublications(raw)) = rx.next().await {
                    loading.set(true);
                    // Clear the container while loading
                    results_view.set(None);

                    match scholar::submit_id(store.as_ref(), &raw) {
                        Ok(id) => {
                            info!("Scholar ID {id} saved; showing integration options");
                            current_id.set(Some(id));
                            results_view.set(Some(ResultsView::Info));
                        }
                        Err(SubmitError::EmptyId) => {
                            // Normally caught in the card before sending
                            dom::alert("Please enter your Google Scholar ID");
                        }
                        Err(SubmitError::Store(e)) => {
                            error!("Failed to save Scholar ID: {e}");
                            // The id itself sanitized fine; keep it so the
                            // troubleshooting panel can link to the profile
                            current_id.set(Some(ScholarId::sanitize(raw.trim())));
                            results_view.set(Some(ResultsView::Error));
                        }
                    }

                    loading.set(false);
                }
            }
        }
    });

    let handle_load = move |raw: String| {
        load_task.send(LoadMessage::LoadPublications(raw));
    };

    let show_manual_entry = move |_| {
        results_view.set(Some(ResultsView::ManualEntry));
    };

    // Back from manual entry: reload on web; on native there is no page to
    // reload, so reset to the initial empty container instead
    let handle_back = move |_| {
        results_view.set(None);
        dom::reload_page();
    };

    // Single render dispatch over the explicit view state. The Info and
    // Error panels need a sanitized identifier for their profile links and
    // are only reachable once one exists.
    let panel = match (results_view(), current_id()) {
        (Some(ResultsView::Info), Some(id)) => Some(rsx! {
            InfoPanel {
                scholar_id: id,
                on_manual_entry: show_manual_entry,
            }
        }),
        (Some(ResultsView::ManualEntry), _) => Some(rsx! {
            ManualEntryPanel { on_back: handle_back }
        }),
        (Some(ResultsView::Error), Some(id)) => Some(rsx! {
            ErrorPanel {
                scholar_id: id,
                on_manual_entry: show_manual_entry,
            }
        }),
        _ => None,
    };

    rsx! {
        section { id: "publications", class: "lt-section",
            h2 { class: "lt-section-title", "Publications" }

            ScholarCard {
                input,
                loading,
                on_load: handle_load,
            }

            if loading() {
                div { class: "lt-loading", "Loading publications…" }
            }

            div { class: "lt-results",
                {panel}
            }
        }
    }
}
