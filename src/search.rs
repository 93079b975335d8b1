//! Lemma search over a lexical graph.
//!
//! Matchers ([`ExactMatcher`], [`SubstringMatcher`], [`WildcardMatcher`])
//! can be used directly as filters. [`SearchEngine`] adds query dispatch and
//! per-query memoization on top of them.

pub mod engine;
pub mod matcher;

pub use engine::{SearchCache, SearchEngine};
pub use matcher::{
    ExactMatcher, MatchKind, Matcher, SubstringMatcher, WILDCARD, WildcardMatcher,
};
