use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary project with Ruby and C# step definition files.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Stops config lookup at the project root
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with the given step files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_files(vec![
    ///     ("features/step_definitions/a_steps.rb", "Given /^a$/ do\nend\n"),
    /// ])?;
    /// ```
    pub fn with_files(files: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in files {
            fixture.write_file(path, content)?;
        }
        Ok(fixture)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .stepcatrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".stepcatrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// Ruby steps, hooks and a C# binding class
pub fn fixture_mixed_steps() -> Result<McpTestFixture> {
    McpTestFixture::with_files(vec![
        (
            "features/step_definitions/cart_steps.rb",
            "# Empties the cart first\n\
             Given /^an empty cart$/ do\n  \
               Cart.clear\n\
             end\n\
             \n\
             When /^I add (\\d+) items$/ do |n|\n  \
               n.to_i.times { Cart.add }\n\
             end\n\
             \n\
             Then /^the cart has (\\d+) items$/ do |n|\n  \
               expect(Cart.size).to eq(n.to_i)\n\
             end\n",
        ),
        (
            "features/support/hooks.rb",
            "Before do\n  Cart.clear\nend\n\nAfterStep do\n  sleep 0\nend\n",
        ),
        (
            "Steps/CartSteps.cs",
            "[Binding]\n\
             public class CartSteps\n\
             {\n    \
                 [When(@\"^I check out$\")]\n    \
                 public void WhenICheckOut()\n    \
                 {\n    \
                 }\n\
             }\n",
        ),
    ])
}

/// Many one-line steps to exercise pagination
pub fn fixture_many_steps(count: usize) -> Result<McpTestFixture> {
    let content: String = (0..count)
        .map(|i| format!("Given /^step {}$/ do\nend\n", i))
        .collect();
    McpTestFixture::with_files(vec![("features/step_definitions/many_steps.rb", &content)])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
