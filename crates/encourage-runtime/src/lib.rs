//! Encourage Runtime — classifier backends behind one trait, plus the
//! pipeline that tries the remote model and falls back to the heuristic.

pub mod backend;
pub mod pipeline;

pub use backend::ClassifierBackend;
pub use pipeline::FallbackClassifier;
