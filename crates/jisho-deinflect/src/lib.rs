//! Japanese deinflection engine.
//!
//! Given a surface-form word as it appears in text, recover every
//! plausible dictionary (citation) form by reversing verb and adjective
//! conjugation, tracking which grammatical layers were undone and which
//! word classes each recovered form may belong to.
//!
//! - [`rules`] -- The suffix rewrite rules (static data)
//! - [`table`] -- Suffix-indexed rule lookup ([`RuleTable`])
//! - [`engine`] -- The breadth-first reduction engine ([`Deinflector`])
//!
//! ```
//! use jisho_deinflect::Deinflector;
//!
//! let engine = Deinflector::new();
//! let candidates = engine.deinflect("走ります");
//! assert!(candidates.iter().any(|c| c.word == "走る"));
//! ```

pub mod engine;
pub mod rules;
pub mod table;

pub use engine::{Deinflector, MAX_EXPANSIONS};
pub use rules::Rule;
pub use table::{RuleError, RuleTable};
