//! UI components for the Lectern profile page.
//!
//! - `nav`: navigation bar with smooth in-page anchor scrolling
//! - `page`: static profile sections (hero, research, contact, footer)
//! - `publications`: the Scholar widget (input card, load coroutine, and the
//!   three result panels)
//!
//! # Context Providers
//!
//! Components use Dioxus context for shared state:
//!
//! ```ignore
//! // Access the platform profile store from any component
//! let store = use_profile_store();
//! let saved = scholar::load_saved_id(store.as_ref())?;
//! ```

mod nav;
mod page;
pub mod publications;

pub use nav::NavBar;
pub use page::{ContactSection, Footer, ProfileHero, ResearchSection};
pub use publications::{PublicationsSection, ResultsView};

use std::rc::Rc;

use dioxus::prelude::*;

use crate::storage::ProfileStore;

// Web platform (WASM) - persists the Scholar ID in localStorage
#[cfg(target_arch = "wasm32")]
type PlatformProfileStore = crate::storage::LocalStorageStore;

// Native builds have no localStorage; fall back to the in-memory store
#[cfg(not(target_arch = "wasm32"))]
type PlatformProfileStore = crate::storage::InMemoryProfileStore;

/// Shared handle to the platform profile store.
///
/// Single-threaded UI, so `Rc` rather than `Arc`.
pub type SharedProfileStore = Rc<dyn ProfileStore>;

/// Profile store context provider.
pub fn use_profile_store() -> SharedProfileStore {
    use_context::<SharedProfileStore>()
}

/// Main app component that composes all page sections.
#[component]
pub fn App() -> Element {
    // Provide the platform store for the widget subtree
    use_context_provider::<SharedProfileStore>(|| Rc::new(PlatformProfileStore::new()));

    rsx! {
        NavBar {}

        main { class: "lt-main",
            ProfileHero {}
            ResearchSection {}
            PublicationsSection {}
            ContactSection {}
        }

        Footer {}
    }
}
