//! Lectern - personal academic-profile page.
//!
//! A single-page Dioxus application rendering a static academic profile with
//! one stateful component: the Google Scholar publications widget. The widget
//! sanitizes a visitor-supplied Scholar identifier, persists it in browser
//! storage, and renders one of three result panels (integration options,
//! manual-entry instructions, or a troubleshooting panel).
//!
//! # Architecture
//!
//! - **Domain**: [`scholar`] owns the sanitizing [`scholar::ScholarId`]
//!   newtype, the example publication records, and the persistence helpers.
//! - **Storage**: [`storage`] defines the [`storage::ProfileStore`] trait with
//!   a localStorage backend on web and an in-memory fallback for native
//!   builds and tests.
//! - **UI**: [`components`] holds the Dioxus component tree; the results
//!   container is driven by an explicit view-state enum rather than by
//!   whatever markup happens to occupy it.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: primary target, persistent localStorage
//! - **Desktop**: debug convenience target, in-memory storage only

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod error;
pub mod scholar;
pub mod storage;
pub mod utils;
