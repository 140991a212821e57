//! Scholar identifier handling and example publication records.
//!
//! The [`ScholarId`] newtype is the sole path by which visitor input reaches a
//! hyperlink target: it is only constructible through [`ScholarId::sanitize`],
//! so every value of this type satisfies the character allow-list. The filter
//! itself is the source of truth for the allowed set and is unit-tested
//! directly.

use std::fmt;

use crate::error::SubmitError;
use crate::storage::{ProfileStore, StoreError};

/// localStorage key under which the identifier is persisted.
pub const SCHOLAR_ID_KEY: &str = "scholarId";

/// Base URL for Google Scholar author profiles.
pub const SCHOLAR_PROFILE_BASE: &str = "https://scholar.google.com/citations";

/// A sanitized Google Scholar author identifier.
///
/// Invariant: contains only ASCII letters, digits, hyphen, and underscore.
/// Values are sanitized at every boundary where an identifier enters the
/// widget: restore from storage, input change, and submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarId(String);

impl ScholarId {
    /// Builds an identifier from untrusted input, removing every character
    /// outside `[A-Za-z0-9_-]`. Pure, total, and idempotent.
    pub fn sanitize(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
                .collect(),
        )
    }

    /// True when nothing survived sanitization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical profile URL for this identifier, used by the card link, the
    /// Info panel embed link, and the Error panel fallback link.
    pub fn profile_url(&self) -> String {
        format!("{}?user={}", SCHOLAR_PROFILE_BASE, self.0)
    }
}

impl fmt::Display for ScholarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Restores the persisted identifier, if any.
///
/// A stored value that sanitizes to empty is treated as absent: there is
/// nothing useful to reflect into the input field or the profile link.
pub fn load_saved_id(store: &dyn ProfileStore) -> Result<Option<ScholarId>, StoreError> {
    Ok(store
        .get(SCHOLAR_ID_KEY)?
        .map(|raw| ScholarId::sanitize(&raw))
        .filter(|id| !id.is_empty()))
}

/// Submits a raw field value: trims, sanitizes, and persists.
///
/// Returns [`SubmitError::EmptyId`] without touching the store when nothing
/// survives sanitization.
pub fn submit_id(store: &dyn ProfileStore, raw: &str) -> Result<ScholarId, SubmitError> {
    let id = ScholarId::sanitize(raw.trim());
    if id.is_empty() {
        return Err(SubmitError::EmptyId);
    }
    store.set(SCHOLAR_ID_KEY, id.as_str())?;
    Ok(id)
}

/// One publication entry in the example listing.
///
/// Illustrative placeholder content only; fields are fixed literals and never
/// carry visitor input, so no sanitization applies at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    pub title: &'static str,
    pub authors: &'static str,
    pub venue: &'static str,
    pub year: &'static str,
    pub citations: &'static str,
    pub link: Option<&'static str>,
}

/// The two example records shown beneath the integration options.
pub fn example_publications() -> [PublicationRecord; 2] {
    [
        PublicationRecord {
            title: "Example Publication Title: A Comprehensive Study",
            authors: "J. Delser, A. Collaborator, B. Student",
            venue: "Journal of Example Research, 2024",
            year: "2024",
            citations: "15",
            link: Some("#"),
        },
        PublicationRecord {
            title: "Another Research Paper on Important Topic",
            authors: "J. Delser, C. Colleague",
            venue: "Conference on Example Research (CER), 2023",
            year: "2023",
            citations: "42",
            link: Some("#"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryProfileStore;

    /// Store whose writes always fail, for exercising the error view path.
    struct FailingStore;

    impl ProfileStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Backend("write rejected".into()))
        }
    }

    #[test]
    fn test_sanitize_strips_disallowed_characters() {
        assert_eq!(ScholarId::sanitize("abc#123").as_str(), "abc123");
        assert_eq!(ScholarId::sanitize("<script>").as_str(), "script");
        assert_eq!(ScholarId::sanitize("a(b)c").as_str(), "abc");
        assert_eq!(ScholarId::sanitize("A-b_9").as_str(), "A-b_9");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for raw in ["", "jd123", "bad<id>", "  spaces  ", "ünïcode✓", "a(b)#c"] {
            let once = ScholarId::sanitize(raw);
            let twice = ScholarId::sanitize(once.as_str());
            assert_eq!(once, twice, "sanitize not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_sanitize_is_order_preserving_subset() {
        for raw in ["jd123", "x#y$z", "<a>b(c)d-e_f", "日本語abc"] {
            let id = ScholarId::sanitize(raw);
            assert!(id.as_str().len() <= raw.len());
            // Every output character appears in the input in the same order
            let mut input = raw.chars();
            for c in id.as_str().chars() {
                assert!(
                    input.any(|i| i == c),
                    "{:?} not a subsequence of {:?}",
                    id.as_str(),
                    raw
                );
            }
        }
    }

    #[test]
    fn test_profile_url() {
        let id = ScholarId::sanitize("jd123");
        assert_eq!(
            id.profile_url(),
            "https://scholar.google.com/citations?user=jd123"
        );
    }

    #[test]
    fn test_submit_persists_sanitized_id() {
        let store = InMemoryProfileStore::new();
        let id = submit_id(&store, " jd123 ").unwrap();
        assert_eq!(id.as_str(), "jd123");
        assert_eq!(store.get(SCHOLAR_ID_KEY).unwrap().as_deref(), Some("jd123"));
    }

    #[test]
    fn test_submit_empty_input_never_writes() {
        let store = InMemoryProfileStore::new();
        for raw in ["", "   ", "###", " <> ()"] {
            assert!(matches!(submit_id(&store, raw), Err(SubmitError::EmptyId)));
            assert_eq!(store.get(SCHOLAR_ID_KEY).unwrap(), None);
        }
    }

    #[test]
    fn test_submit_surfaces_store_failure() {
        let result = submit_id(&FailingStore, "jd123");
        assert!(matches!(result, Err(SubmitError::Store(_))));
    }

    #[test]
    fn test_load_saved_id_sanitizes_stored_value() {
        let store = InMemoryProfileStore::new();
        store.set(SCHOLAR_ID_KEY, "bad<id>").unwrap();
        let id = load_saved_id(&store).unwrap().unwrap();
        assert_eq!(id.as_str(), "badid");
    }

    #[test]
    fn test_load_saved_id_absent_or_degenerate() {
        let store = InMemoryProfileStore::new();
        assert_eq!(load_saved_id(&store).unwrap(), None);

        // A stored value with no surviving characters is treated as absent
        store.set(SCHOLAR_ID_KEY, "<>()#").unwrap();
        assert_eq!(load_saved_id(&store).unwrap(), None);
    }

    #[test]
    fn test_exactly_two_example_publications() {
        let pubs = example_publications();
        assert_eq!(pubs.len(), 2);
        assert!(pubs.iter().all(|p| p.link.is_some()));
    }
}
