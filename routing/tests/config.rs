use std::io::Write;

use heddle_routing::DispatcherConfig;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults_mirror_an_unconfigured_deployment() {
  // Act
  let config = DispatcherConfig::default();

  // Assert
  assert_eq!(config.base_path, "");
  assert_eq!(config.not_found_body, "404 not found!");
  assert_eq!(config.error_body, "500 handler failed");
}

#[test]
fn test_yaml_overrides_selected_fields() {
  // Arrange: only one key is set; the rest fall back to defaults.
  let yaml = "base_path: /app\n";

  // Act
  let config = DispatcherConfig::from_yaml_str(yaml).unwrap();

  // Assert
  assert_eq!(config.base_path, "/app");
  assert_eq!(config.not_found_body, "404 not found!");
}

#[test]
fn test_full_yaml_document_parses() {
  // Arrange
  let yaml = r#"
base_path: /api
not_found_body: nothing here
error_body: internal failure
"#;

  // Act
  let config = DispatcherConfig::from_yaml_str(yaml).unwrap();

  // Assert
  assert_eq!(
    config,
    DispatcherConfig {
      base_path: "/api".to_string(),
      not_found_body: "nothing here".to_string(),
      error_body: "internal failure".to_string(),
    }
  );
}

#[test]
fn test_config_loads_from_a_file() {
  // Arrange
  let mut file = tempfile::NamedTempFile::new().unwrap();
  writeln!(file, "base_path: /from-disk").unwrap();

  // Act
  let config = DispatcherConfig::load_from_file(file.path()).unwrap();

  // Assert
  assert_eq!(config.base_path, "/from-disk");
}

#[test]
fn test_missing_file_is_an_io_error() {
  // Act
  let result = DispatcherConfig::load_from_file("/definitely/not/here.yaml");

  // Assert
  assert!(result.is_err());
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
  // Arrange: a sequence where a mapping is required.
  let yaml = "- just\n- a\n- list\n";

  // Act
  let result = DispatcherConfig::from_yaml_str(yaml);

  // Assert
  assert!(result.is_err());
}
