// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Splitting of the carrier-accumulated dial string into step tokens.

/// Separator the carrier places between successive menu entries.
pub const STEP_DELIMITER: char = '*';

/// Ordered menu entries reconstructed from one dial string.
///
/// An empty dial string means the session has just started and yields no
/// tokens at all, which keeps it distinct from a submitted empty value
/// (`"1*"` is two tokens, the second one empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTokens<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> StepTokens<'a> {
    /// Tokenize a dial string. Never fails; no trimming or validation.
    pub fn parse(text: &'a str) -> Self {
        if text.is_empty() {
            return Self { tokens: Vec::new() };
        }
        Self {
            tokens: text.split(STEP_DELIMITER).collect(),
        }
    }

    /// Number of steps the subscriber has completed.
    pub fn step_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_session_start(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }
}
