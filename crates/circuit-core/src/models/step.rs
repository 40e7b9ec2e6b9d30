//! Test step model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::TestCategory;

/// One unit of a guided test procedure, drawn from a fixed catalog.
///
/// Steps are authored content: they are never created or edited while a
/// session is running.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    /// Identifier, unique and stable within a catalog
    pub id: String,

    /// Short title of the step
    pub title: String,

    /// What the step verifies
    pub description: String,

    /// Position in the BS 7671 test taxonomy
    pub category: TestCategory,

    /// Free-form classification tag (e.g. "dead", "live", "visual")
    pub test_type: String,

    /// Instructions, followed in order by the operator
    pub instructions: Vec<String>,

    /// Safety warnings shown before the step is carried out
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safety_warnings: Vec<String>,

    /// Instruments and accessories needed for the step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_equipment: Vec<String>,

    /// Display string such as "10-15 minutes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}
