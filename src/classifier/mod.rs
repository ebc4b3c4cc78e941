//! Page classification for handle availability
//!
//! This module owns the boundary to the target platform:
//! - the [`Classifier`] trait, the injected capability the engine calls
//! - the heading-text heuristic (normalize, match sentinel phrases)
//! - [`HttpClassifier`], the real implementation over HTTP
//!
//! The heuristic is tied to the platform's current UI copy, which is why
//! it lives behind a trait: tests swap it out, and a copy change on the
//! platform side stays contained to this module.

mod heading;
mod http;

pub use heading::classify_page;
pub use http::HttpClassifier;

use thiserror::Error;

/// A single classification attempt failed.
///
/// Failures are always surfaced as errors, never as a `false` verdict; the
/// retry policy decides what an undeterminable page means.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("could not build HTTP session for {handle}: {source}")]
    Session {
        handle: String,
        source: reqwest::Error,
    },

    #[error("invalid target address for {handle}: {source}")]
    Address {
        handle: String,
        source: url::ParseError,
    },

    #[error("navigation timed out for {handle}")]
    Timeout { handle: String },

    #[error("navigation failed for {handle}: {source}")]
    Navigation {
        handle: String,
        source: reqwest::Error,
    },

    #[error("failed to read page body for {handle}: {source}")]
    Body {
        handle: String,
        source: reqwest::Error,
    },
}

/// The page-classification capability.
///
/// Given a handle, renders its profile page and returns `true` iff the
/// page shows the unclaimed-handle banner. Implementations must keep any
/// session they open scoped to the single call.
pub trait Classifier {
    fn check(
        &self,
        handle: &str,
    ) -> impl std::future::Future<Output = Result<bool, ClassifyError>> + Send;
}
