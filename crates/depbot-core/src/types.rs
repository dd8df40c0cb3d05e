use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DepbotError;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Where the generated configuration ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Write `.github/dependabot.yml` directly.
    Local,
    /// Write a workflow that generates and commits the config in CI.
    Action,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[Mode::Local, Mode::Action]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Local => "local",
            Mode::Action => "action",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = DepbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Mode::Local),
            "action" => Ok(Mode::Action),
            other => Err(DepbotError::InvalidChoice {
                kind: "mode",
                value: other.to_string(),
                expected: "local, action".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Schedule interval written into the generated config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub fn all() -> &'static [Interval] {
        &[Interval::Daily, Interval::Weekly, Interval::Monthly]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = DepbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Interval::Daily),
            "weekly" => Ok(Interval::Weekly),
            "monthly" => Ok(Interval::Monthly),
            other => Err(DepbotError::InvalidChoice {
                kind: "interval",
                value: other.to_string(),
                expected: "daily, weekly, monthly".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The operator's two answers. Fixed once captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub mode: Mode,
    pub interval: Interval,
}

impl Selection {
    pub fn new(mode: Mode, interval: Interval) -> Self {
        Self { mode, interval }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
