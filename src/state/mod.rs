//! State module for tracking scan progress
//!
//! # Components
//!
//! - `HandleSet`: an insertion-ordered set of handles, serialized as a
//!   plain JSON array so the artifacts stay human-readable
//! - `ScanState`: the working `{checked, available}` record, the sole
//!   mutable state of a run

mod handle_set;
mod scan_state;

pub use handle_set::HandleSet;
pub use scan_state::ScanState;
