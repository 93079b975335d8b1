//! Lemma matchers.
//!
//! A matcher compiles a pattern once and tests it against a synset's lemma
//! set. The three variants share the scan in [`Matcher::filter`] and
//! [`Matcher::find_first`] and differ only in the per-lemma test.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LexnetError, Result};
use crate::synset::Synset;
use crate::wordnet::WordNet;

/// The character that turns a query into a wildcard query.
pub const WILDCARD: char = '*';

/// How a pattern is compared with lemmas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The lemma set contains the pattern verbatim.
    Exact,
    /// The pattern occurs inside some lemma.
    Substring,
    /// Some lemma matches the pattern, `*` standing for any sequence.
    Wildcard,
}

impl MatchKind {
    /// Wildcard if the query contains `*`, exact otherwise.
    ///
    /// Substring matching is never chosen here.
    pub fn dispatch(query: &str) -> Self {
        if query.contains(WILDCARD) {
            MatchKind::Wildcard
        } else {
            MatchKind::Exact
        }
    }

    /// Compile `pattern` into a matcher of this kind.
    pub fn compile(self, pattern: &str) -> Result<Box<dyn Matcher>> {
        Ok(match self {
            MatchKind::Exact => Box::new(ExactMatcher::new(pattern)),
            MatchKind::Substring => Box::new(SubstringMatcher::new(pattern)),
            MatchKind::Wildcard => Box::new(WildcardMatcher::new(pattern)?),
        })
    }
}

/// Trait for lemma matchers.
pub trait Matcher: Send + Sync + Debug {
    /// The kind of this matcher.
    fn kind(&self) -> MatchKind;

    /// The pattern as given by the caller.
    fn pattern(&self) -> &str;

    /// Test a single lemma.
    fn matches_lemma(&self, lemma: &str) -> bool;

    /// Test a lemma set: true if any lemma matches.
    fn matches(&self, lemmas: &BTreeSet<String>) -> bool {
        lemmas.iter().any(|lemma| self.matches_lemma(lemma))
    }

    /// Test a synset, resolving its lemmas if needed.
    fn is_match(&self, synset: &Synset<'_>) -> Result<bool> {
        Ok(self.matches(synset.lemmas()?))
    }

    /// Every matching synset of `wordnet`, in iteration order.
    fn filter<'wn>(&self, wordnet: &'wn WordNet) -> Result<Vec<Synset<'wn>>> {
        let mut result = Vec::new();
        for synset in wordnet {
            if self.is_match(&synset)? {
                result.push(synset);
            }
        }
        Ok(result)
    }

    /// The first matching synset of `wordnet`.
    fn find_first<'wn>(&self, wordnet: &'wn WordNet) -> Result<Option<Synset<'wn>>> {
        for synset in wordnet {
            if self.is_match(&synset)? {
                return Ok(Some(synset));
            }
        }
        Ok(None)
    }
}

/// Matches synsets whose lemma set contains the pattern.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    pattern: String,
}

impl ExactMatcher {
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        ExactMatcher {
            pattern: pattern.into(),
        }
    }
}

impl Matcher for ExactMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::Exact
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matches_lemma(&self, lemma: &str) -> bool {
        lemma == self.pattern
    }

    // Set membership instead of a per-lemma scan.
    fn matches(&self, lemmas: &BTreeSet<String>) -> bool {
        lemmas.contains(self.pattern.as_str())
    }
}

/// Matches synsets with a lemma containing the pattern.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    pattern: String,
}

impl SubstringMatcher {
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        SubstringMatcher {
            pattern: pattern.into(),
        }
    }
}

impl Matcher for SubstringMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::Substring
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matches_lemma(&self, lemma: &str) -> bool {
        lemma.contains(self.pattern.as_str())
    }
}

/// Matches synsets with a lemma fully matching a wildcard pattern.
///
/// `*` matches zero or more characters; a run of `*` counts as one. Every
/// other character is literal, and the pattern is anchored at both ends.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    pattern: String,
    regex: Arc<Regex>,
}

impl WildcardMatcher {
    /// Create a new wildcard matcher.
    pub fn new<S: Into<String>>(pattern: S) -> Result<Self> {
        let pattern = pattern.into();
        let regex = Self::compile_pattern(&pattern)?;

        Ok(WildcardMatcher {
            pattern,
            regex: Arc::new(regex),
        })
    }

    /// The compiled regular expression.
    pub fn regex_source(&self) -> &str {
        self.regex.as_str()
    }

    /// Compile a wildcard pattern into an anchored regex.
    fn compile_pattern(pattern: &str) -> Result<Regex> {
        let mut regex_pattern = String::with_capacity(pattern.len() + 4);
        regex_pattern.push('^');

        let mut literal = String::new();
        let mut after_wildcard = false;
        for c in pattern.chars() {
            if c == WILDCARD {
                if !after_wildcard {
                    regex_pattern.push_str(&regex::escape(&literal));
                    literal.clear();
                    regex_pattern.push_str(".*");
                }
                after_wildcard = true;
            } else {
                literal.push(c);
                after_wildcard = false;
            }
        }
        regex_pattern.push_str(&regex::escape(&literal));
        regex_pattern.push('$');

        Regex::new(&regex_pattern)
            .map_err(|e| LexnetError::query(format!("Invalid wildcard pattern '{pattern}': {e}")))
    }
}

impl Matcher for WildcardMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::Wildcard
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn matches_lemma(&self, lemma: &str) -> bool {
        self.regex.is_match(lemma)
    }
}
