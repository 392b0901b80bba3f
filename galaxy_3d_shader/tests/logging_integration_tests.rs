//! Integration tests for shader diagnostics
//!
//! These tests install a capturing logger and check that misuse of the shader
//! API is reported through the logging system.
//!
//! Run with: cargo test --test logging_integration_tests

use galaxy_3d_shader::galaxy3d::log::{self, Logger, LogEntry, LogSeverity};
use galaxy_3d_shader::galaxy3d::shader::{
    BindingKey, KeyedBindingLayout, Shader, ShaderConfig, ShaderDataType, ShaderStage,
};
use galaxy_3d_shader::galaxy3d::resource::{FormatRegistry, ResourceCategory, ResourceFormat};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_test_logger() -> Arc<Mutex<Vec<LogEntry>>> {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);
    entries
}

fn entries_with(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.severity == severity)
        .cloned()
        .collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_misused_input_layout_warns() {
    let mut shader = Shader::new();
    shader.add_stage(ShaderStage::Fragment, "lit.frag", vec![1, 2, 3, 4]).unwrap();

    let entries = install_test_logger();
    let layout = shader.input_layout(ShaderStage::Fragment);
    assert!(layout.is_empty());

    let warnings = entries_with(&entries, LogSeverity::Warn);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].source, "galaxy3d::Shader");
    assert!(warnings[0].message.contains("fragment"));

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_misuse_warning_can_be_disabled() {
    let shader = Shader::with_config(ShaderConfig {
        warn_on_stage_misuse: false,
        ..ShaderConfig::default()
    });

    let entries = install_test_logger();
    assert!(shader.input_layout(ShaderStage::Compute).is_empty());
    assert!(entries_with(&entries, LogSeverity::Warn).is_empty());

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_duplicate_name_logs_error() {
    let mut layout = KeyedBindingLayout::new();
    layout.emplace("albedo", BindingKey::new(1, 0)).unwrap();

    let entries = install_test_logger();
    assert!(layout.emplace("albedo", BindingKey::new(1, 1)).is_err());

    let errors = entries_with(&entries, LogSeverity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("albedo"));
    assert!(errors[0].file.is_some());
    assert!(errors[0].line.is_some());
    assert_eq!(layout.get("albedo"), Some(&BindingKey::new(1, 0)));

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_unknown_format_logs_error() {
    let registry = FormatRegistry::new();

    let entries = install_test_logger();
    let format = registry.resource_format(ResourceCategory::Texture, "brick.tga");
    assert_eq!(format, ResourceFormat::Unknown);

    let errors = entries_with(&entries, LogSeverity::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source, "galaxy3d::FormatRegistry");
    assert!(errors[0].message.contains("tga"));

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_unknown_data_type_logs_error() {
    let entries = install_test_logger();

    assert_eq!(ShaderDataType::from_raw(99), ShaderDataType::Undefined);

    let errors = entries_with(&entries, LogSeverity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("99"));

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_reset_logger() {
    let entries = install_test_logger();
    log::reset_logger();

    let registry = FormatRegistry::new();
    registry.resource_format(ResourceCategory::Mesh, "teapot.fbx");

    assert!(entries.lock().unwrap().is_empty());
}
