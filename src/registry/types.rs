// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Catalog record types

use serde::{Deserialize, Serialize};

use crate::harness::TestSession;

/// Difficulty classification. Display-only: it color-codes listings and
/// reports but has no effect on execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A problem's test procedure. Plain fn pointer: the manifest is a static
/// table, nothing needs to capture state.
pub type TestFn = fn(&mut TestSession);

/// One registry entry: an author-assigned number (the sort and lookup key),
/// display strings, a difficulty tag, and the opaque test procedure.
#[derive(Clone)]
pub struct Problem {
    pub number: u32,
    pub name: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub test_fn: TestFn,
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("number", &self.number)
            .field("name", &self.name)
            .field("title", &self.title)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}

impl Problem {
    /// Title defaults to the name, difficulty to Medium.
    pub fn new(number: u32, name: impl Into<String>, test_fn: TestFn) -> Self {
        let name = name.into();
        Self {
            number,
            title: name.clone(),
            name,
            difficulty: Difficulty::default(),
            test_fn,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}
