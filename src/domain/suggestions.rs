//! Static catalog of suggested task titles.
//!
//! The catalog is fixed at compile time: `suggestions` returns the same
//! ordered slice on every call, with no randomness or external lookups.

use std::{fmt, str::FromStr};

use crate::domain::task::TaskDraft;

/// Description attached to tasks created from a suggestion
pub const SUGGESTION_DESCRIPTION: &str = "Added from AI suggestions";

const DEVELOPMENT_SUGGESTIONS: &[&str] = &[
    "Write unit tests for login module",
    "Optimize database queries for faster response",
    "Implement dark/light theme toggle",
    "Add loading skeleton screens",
    "Set up CI/CD pipeline",
    "Write API documentation",
    "Refactor legacy components",
    "Add error boundary to React components",
    "Implement lazy loading for images",
    "Create reusable button component library",
];

const GENERAL_SUGGESTIONS: &[&str] = &[
    "Review project documentation",
    "Conduct user testing session",
    "Update project dependencies",
    "Create project roadmap for next quarter",
    "Write weekly progress report",
    "Organize team meeting agenda",
    "Backup important project files",
    "Clean up email inbox",
    "Update LinkedIn profile",
    "Learn a new programming concept",
];

/// Category grouping for suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionCategory {
    Development,
    General,
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::General => write!(f, "general"),
        }
    }
}

impl FromStr for SuggestionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(SuggestionCategory::Development),
            "general" => Ok(SuggestionCategory::General),
            _ => Err(format!(
                "Invalid suggestion category '{}'. Valid categories: development, general",
                s
            )),
        }
    }
}

/// Returns the ordered suggestion titles for a category
pub fn suggestions(category: SuggestionCategory) -> &'static [&'static str] {
    match category {
        SuggestionCategory::Development => DEVELOPMENT_SUGGESTIONS,
        SuggestionCategory::General => GENERAL_SUGGESTIONS,
    }
}

/// Builds the task draft used when a suggestion is accepted: medium
/// priority, headed for the to-do column, tagged with a fixed description.
pub fn draft_from_suggestion(title: &str) -> TaskDraft {
    TaskDraft::new(title).with_description(SUGGESTION_DESCRIPTION)
}
