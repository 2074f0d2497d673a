use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed["includes"].as_array().is_some_and(|a| a.is_empty()),
        "Config should have an empty 'includes' field"
    );
    assert_eq!(parsed["extensions"], serde_json::json!(["rb", "cs"]));
    assert_eq!(parsed["sourceRoot"], "./");
    assert!(
        parsed["ignores"]
            .as_array()
            .is_some_and(|a| a.iter().any(|p| p == "**/vendor/**")),
        "Config should ignore vendored code"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output).trim(), "\u{2713} Created .stepcatrc.json");

    let content = test.read_file(".stepcatrc.json")?;
    assert_config_content(&content)?;
    insta::assert_snapshot!(content, @r#"
    {
      "ignores": [
        "**/vendor/**",
        "**/bin/**",
        "**/obj/**",
        "**/node_modules/**"
      ],
      "includes": [],
      "extensions": [
        "rb",
        "cs"
      ],
      "sourceRoot": "./"
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".stepcatrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains(".stepcatrc.json already exists"));
    assert_eq!(test.read_file(".stepcatrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("features/step_definitions/a_steps.rb", "Given /^a$/ do\nend\n")?;
    test.write_file("vendor/bundle/gems/x/steps.rb", "Given /^vendored$/ do\nend\n")?;

    let output = test.list_command().output()?;
    assert!(
        output.status.success(),
        "List should work with initialized config. stderr: {}",
        stderr_of(&output)
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Given a"));
    assert!(!stdout.contains("vendored"));

    Ok(())
}
