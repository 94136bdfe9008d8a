//! Clause ordering, preview derivation, and selection projection for the
//! LegisLens client.
//!
//! Everything here is pure state-transition logic over the shared document
//! model; the browser adapter in `legislens-wasm` wraps it with DOM and
//! transport plumbing.

pub mod error;
pub mod preview;
pub mod rank;
pub mod selection;
pub mod session;

pub use error::EngineError;
pub use preview::synthesize_preview;
pub use rank::rank;
pub use selection::{
    display_fields, display_title, ClauseDisplay, Selection, SelectionProjector,
    NO_SUMMARY_PLACEHOLDER,
};
pub use session::{DocumentSession, DEFAULT_LANGUAGE};
