use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a clock action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Entrance,
    Exit,
}

impl EventKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::Entrance => "entrance",
            EventKind::Exit => "exit",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entrance" => Some(EventKind::Entrance),
            "exit" => Some(EventKind::Exit),
            _ => None,
        }
    }
}

impl FromStr for EventKind {
    type Err = AppError;

    /// Only the two exact wire literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s).ok_or_else(|| AppError::InvalidEventKind(s.to_string()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_the_two_literals() {
        assert_eq!("entrance".parse::<EventKind>().unwrap(), EventKind::Entrance);
        assert_eq!("exit".parse::<EventKind>().unwrap(), EventKind::Exit);

        for bad in ["lunch", "Entrance", "EXIT", "", "in"] {
            let err = bad.parse::<EventKind>().unwrap_err();
            assert!(matches!(err, AppError::InvalidEventKind(ref s) if s == bad));
        }
    }

    #[test]
    fn display_matches_db_literal() {
        assert_eq!(EventKind::Entrance.to_string(), "entrance");
        assert_eq!(EventKind::Exit.to_string(), "exit");
    }
}
