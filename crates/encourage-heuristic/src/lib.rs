//! Heuristic encouragement classifier — deterministic keyword and pattern scoring.
//!
//! Used whenever the remote model cannot produce a verdict. Operates purely
//! on the input string: lower-cased, whitespace stripped, then matched by
//! substring against three static lexicons plus two regex signals.

pub mod classifier;
pub mod lexicon;

pub use classifier::{normalize, HeuristicClassifier, Rule, Signals};
pub use lexicon::{EncouragementRole, Lexicon};
