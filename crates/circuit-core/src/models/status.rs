//! Status and category enumerations for steps, results and sessions.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed classification of a step within the BS 7671 test sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum TestCategory {
    /// Proving the circuit dead before work starts
    SafeIsolation,
    /// Continuity of protective and ring final conductors
    Continuity,
    /// Insulation resistance between live conductors and earth
    InsulationResistance,
    /// Earth fault loop impedance (Zs / Ze)
    EarthFaultLoop,
    /// RCD operation and trip time
    RcdTest,
    /// Correct connection of line, neutral and protective conductors
    Polarity,
    /// Operation of switchgear, controls and interlocks
    FunctionalTest,
}

impl TestCategory {
    /// All categories in their conventional testing order.
    pub const ALL: [TestCategory; 7] = [
        TestCategory::SafeIsolation,
        TestCategory::Continuity,
        TestCategory::InsulationResistance,
        TestCategory::Polarity,
        TestCategory::EarthFaultLoop,
        TestCategory::RcdTest,
        TestCategory::FunctionalTest,
    ];

    /// Wire representation, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestCategory::SafeIsolation => "safe-isolation",
            TestCategory::Continuity => "continuity",
            TestCategory::InsulationResistance => "insulation-resistance",
            TestCategory::EarthFaultLoop => "earth-fault-loop",
            TestCategory::RcdTest => "rcd-test",
            TestCategory::Polarity => "polarity",
            TestCategory::FunctionalTest => "functional-test",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TestCategory::SafeIsolation => "Safe Isolation",
            TestCategory::Continuity => "Continuity",
            TestCategory::InsulationResistance => "Insulation Resistance",
            TestCategory::EarthFaultLoop => "Earth Fault Loop Impedance",
            TestCategory::RcdTest => "RCD Test",
            TestCategory::Polarity => "Polarity",
            TestCategory::FunctionalTest => "Functional Test",
        }
    }
}

impl FromStr for TestCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        TestCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| format!("Invalid test category: {s}"))
    }
}

/// Outcome recorded against a single step.
///
/// A step without a recorded result is pending; there is no pending variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    /// The test was carried out and passed
    Completed,
    /// The test was carried out and failed
    Failed,
}

impl FromStr for ResultStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(ResultStatus::Completed),
            "failed" => Ok(ResultStatus::Failed),
            _ => Err(format!("Invalid result status: {s}")),
        }
    }
}

impl ResultStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Completed => "completed",
            ResultStatus::Failed => "failed",
        }
    }

    /// Status with a consistent icon for display.
    ///
    /// ```rust
    /// use circuit_core::models::ResultStatus;
    ///
    /// assert_eq!(ResultStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ResultStatus::Failed.with_icon(), "✗ Failed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ResultStatus::Completed => "✓ Completed",
            ResultStatus::Failed => "✗ Failed",
        }
    }
}

/// Lifecycle of a guided test session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    /// Session is being worked through
    #[default]
    InProgress,

    /// Operator marked the session complete; terminal
    Completed,
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in-progress" | "in_progress" | "inprogress" => Ok(SessionStatus::InProgress),
            "completed" => Ok(SessionStatus::Completed),
            _ => Err(format!("Invalid session status: {s}")),
        }
    }
}

impl SessionStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in-progress",
            SessionStatus::Completed => "completed",
        }
    }
}
