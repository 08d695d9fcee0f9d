// fieldsan-core/tests/rules_file_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use fieldsan_core::{CorrectionEngine, FieldsanError, RuleSet};

#[test_log::test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: username
    field_type: string
    max_length: 20
    allowed_pattern: "[a-zA-Z0-9_]"
    description: "Login name"
  - name: age
    field_type: int
    required: false
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let rule_set = RuleSet::load_from_file(file.path())?;
    assert_eq!(rule_set.rules.len(), 2);
    assert_eq!(rule_set.rules[0].name, "username");
    assert_eq!(rule_set.rules[0].max_length, Some(20));
    assert!(rule_set.rules[0].required); // omitted, defaults to true
    assert_eq!(rule_set.rules[1].field_type, "int");
    assert!(!rule_set.rules[1].required);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_duplicates() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: username
  - name: username
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = RuleSet::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Rule validation failed"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_invalid_pattern() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: username
    allowed_pattern: "[broken"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(RuleSet::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_missing_file_reports_path() {
    let err = RuleSet::load_from_file("/nonexistent/rules.yaml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/rules.yaml"));
}

#[test]
fn test_loaded_rules_compile_into_an_engine() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: email
    field_type: email
    max_length: 50
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let rule_set = RuleSet::load_from_file(file.path())?;
    let engine = CorrectionEngine::new(rule_set)?;
    assert_eq!(engine.registry().len(), 1);
    Ok(())
}

#[test]
fn test_duplicate_rules_abort_engine_construction() {
    let rule_set: RuleSet = serde_yml::from_str(
        r#"
rules:
  - name: username
  - name: username
"#,
    )
    .unwrap();
    // Bypassing the file loader's validation still fails at compile time.
    let err = CorrectionEngine::new(rule_set).unwrap_err();
    assert!(matches!(err, FieldsanError::DuplicateFieldRule(name) if name == "username"));
}
