//! Inspection lifecycle

use std::fmt;

/// Lifecycle state of an inspection
///
/// An inspector starts `Unfetched` and becomes `Populated` once every extractor
/// has run against a parsed document. There is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InspectionState {
    /// No document has been extracted yet
    Unfetched,

    /// All fields have been extracted (terminal)
    Populated,
}

impl InspectionState {
    /// Returns true if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Populated)
    }

    /// Returns the state name as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unfetched => "unfetched",
            Self::Populated => "populated",
        }
    }
}

impl fmt::Display for InspectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(!InspectionState::Unfetched.is_terminal());
        assert!(InspectionState::Populated.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(InspectionState::Unfetched.to_string(), "unfetched");
        assert_eq!(InspectionState::Populated.to_string(), "populated");
    }
}
