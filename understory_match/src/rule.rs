// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Match acceptance policy.
//!
//! Acceptance is a pure function of a target's [`MatchRule`], how many items it
//! already matched, and the candidate's tag. It has no side effects, so it can
//! be checked in isolation with [`is_match`].

use alloc::string::String;
use alloc::vec::Vec;

/// Acceptance configuration of a match target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchRule {
    /// Tag an item must carry to match, compared after trimming whitespace.
    pub expected_match_id: String,
    /// Additional tags accepted when `allow_multiple_matches` is set.
    pub accepted_ids: Vec<String>,
    /// At most one matched item at a time.
    pub single_match: bool,
    /// Widen acceptance to `accepted_ids`.
    pub allow_multiple_matches: bool,
}

impl MatchRule {
    /// A single-match rule for exactly `id`.
    pub fn expecting(id: impl Into<String>) -> Self {
        Self {
            expected_match_id: id.into(),
            accepted_ids: Vec::new(),
            single_match: true,
            allow_multiple_matches: false,
        }
    }

    /// A rule that accepts any tag in `ids` and allows several matched items.
    pub fn accepting_any<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_match_id: String::new(),
            accepted_ids: ids.into_iter().map(Into::into).collect(),
            single_match: false,
            allow_multiple_matches: true,
        }
    }

    /// Sets `single_match`.
    #[must_use]
    pub fn with_single_match(mut self, single: bool) -> Self {
        self.single_match = single;
        self
    }

    /// Shorthand for [`is_match`] with this rule.
    #[must_use]
    pub fn accepts(&self, current_matches: usize, candidate: &str) -> bool {
        is_match(self, current_matches, candidate)
    }
}

/// Decides whether a target with `rule` and `current_matches` matched items
/// accepts an item tagged `candidate`.
///
/// 1. A single-match target that already holds a match rejects everything.
/// 2. With multiple matches allowed, membership in `accepted_ids` accepts.
/// 3. Otherwise the trimmed tags must be equal. An empty expected tag never matches.
#[must_use]
pub fn is_match(rule: &MatchRule, current_matches: usize, candidate: &str) -> bool {
    if rule.single_match && current_matches > 0 {
        return false;
    }
    let candidate = candidate.trim();
    if rule.allow_multiple_matches && rule.accepted_ids.iter().any(|id| id.trim() == candidate) {
        return true;
    }
    let expected = rule.expected_match_id.trim();
    !expected.is_empty() && expected == candidate
}
