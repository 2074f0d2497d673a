//! Step definition records produced by the scanner.

use std::fmt;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of a step definition or hook.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    ValueEnum,
)]
pub enum StepType {
    Given,
    When,
    Then,
    Before,
    After,
    AfterStep,
    Transform,
}

impl StepType {
    pub const ALL: [StepType; 7] = [
        StepType::Given,
        StepType::When,
        StepType::Then,
        StepType::Before,
        StepType::After,
        StepType::AfterStep,
        StepType::Transform,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::Given => "Given",
            StepType::When => "When",
            StepType::Then => "Then",
            StepType::Before => "Before",
            StepType::After => "After",
            StepType::AfterStep => "AfterStep",
            StepType::Transform => "Transform",
        }
    }

    /// Map a leading keyword token onto a step type.
    ///
    /// Exact matches win. Otherwise the longest keyword the token starts with
    /// is used, so attribute hooks such as `BeforeScenario` or `AfterFeature`
    /// land on `Before` / `After`.
    pub fn from_token(token: &str) -> Option<StepType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| token.starts_with(t.as_str()))
            .max_by_key(|t| t.as_str().len())
    }

    /// Steps carry a pattern literal; hooks do not.
    pub fn has_pattern(&self) -> bool {
        matches!(
            self,
            StepType::Given | StepType::When | StepType::Then | StepType::Transform
        )
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted step definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StepDefinition {
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub name: String,
    pub filename: String,
    /// Leading comments followed by the body (or the attribute placeholder).
    pub code: Vec<String>,
    /// 1-based line of the definitional line itself.
    pub line_number: usize,
}
