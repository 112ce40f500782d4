//! Category and workflow-phase enums for Herbaria.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `IdentifyPhase` provides `allowed_next_states()` to enforce valid workflow
//! transitions at the application layer.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The two fixed category values attached to every knowledge entry and
/// identification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Herbal,
    NonHerbal,
}

impl Category {
    /// Return the string representation used in persisted values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Herbal => "herbal",
            Self::NonHerbal => "non_herbal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IdentifyPhase
// ---------------------------------------------------------------------------

/// Phase of the identification workflow surrounding one upload.
///
/// ```text
/// idle → file_selected → submitting → succeeded
///                                   → failed
/// succeeded / failed → idle (explicit reset)
///                    → file_selected (new file selection)
/// ```
///
/// Submitting is only enterable from `FileSelected`; a terminal phase must be
/// left via reset or a new file selection before resubmitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifyPhase {
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed,
}

impl IdentifyPhase {
    /// Valid next phases from the current phase.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::FileSelected],
            Self::FileSelected => &[Self::FileSelected, Self::Submitting],
            Self::Submitting => &[Self::Succeeded, Self::Failed],
            Self::Succeeded | Self::Failed => &[Self::Idle, Self::FileSelected],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::FileSelected => "file_selected",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for IdentifyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serde_values() {
        assert_eq!(serde_json::to_value(Category::Herbal).unwrap(), "herbal");
        assert_eq!(
            serde_json::to_value(Category::NonHerbal).unwrap(),
            "non_herbal"
        );
    }

    #[test]
    fn submitting_only_reachable_from_file_selected() {
        for phase in [
            IdentifyPhase::Idle,
            IdentifyPhase::Submitting,
            IdentifyPhase::Succeeded,
            IdentifyPhase::Failed,
        ] {
            assert!(
                !phase.can_transition_to(IdentifyPhase::Submitting),
                "{phase} should not reach submitting"
            );
        }
        assert!(IdentifyPhase::FileSelected.can_transition_to(IdentifyPhase::Submitting));
    }

    #[test]
    fn terminal_phases_require_reset_or_reselection() {
        for phase in [IdentifyPhase::Succeeded, IdentifyPhase::Failed] {
            assert_eq!(
                phase.allowed_next_states(),
                &[IdentifyPhase::Idle, IdentifyPhase::FileSelected]
            );
        }
    }

    #[test]
    fn submitting_resolves_to_terminal_phase() {
        assert_eq!(
            IdentifyPhase::Submitting.allowed_next_states(),
            &[IdentifyPhase::Succeeded, IdentifyPhase::Failed]
        );
    }

    #[test]
    fn reselecting_a_file_is_allowed() {
        assert!(IdentifyPhase::FileSelected.can_transition_to(IdentifyPhase::FileSelected));
    }
}
