use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{ByType, StepDefinition, StepType};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListStepsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only return steps of this type (Given, When, Then, Before, After, AfterStep, Transform)
    pub step_type: Option<StepType>,
    /// Maximum number of steps to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of steps to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub extensions: Vec<String>,
    pub source_root: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            includes: c.includes,
            ignores: c.ignores,
            extensions: c.extensions,
            source_root: c.source_root,
        }
    }
}

// ============================================================
// Overview Types (scan_overview)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub total_count: usize,
    pub by_type: ByType,
    /// Step patterns defined more than once
    pub ambiguous_count: usize,
    pub files_scanned: usize,
    pub files_with_steps: usize,
    pub diagnostics: DiagnosticCounts,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticCounts {
    pub unterminated_body: usize,
    pub unmatched_pattern: usize,
    pub read_error: usize,
}

// ============================================================
// Step Types (list_steps)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListStepsResult {
    /// Number of steps matching the filter, before pagination
    pub total_count: usize,
    pub items: Vec<StepItem>,
    pub pagination: Pagination,
}

/// A single step definition
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepItem {
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub name: String,
    pub file_path: String,
    pub line: usize,
    pub code: Vec<String>,
}

impl From<&StepDefinition> for StepItem {
    fn from(step: &StepDefinition) -> Self {
        Self {
            step_type: step.step_type,
            name: step.name.clone(),
            file_path: step.filename.clone(),
            line: step.line_number,
            code: step.code.clone(),
        }
    }
}

// ============================================================
// Shared Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
