//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};
use crate::shader::{BindingKey, ShaderStage};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_unsupported_format_display() {
    let err = Error::UnsupportedFormat("brick.tga".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Unsupported format"));
    assert!(display.contains("brick.tga"));
}

#[test]
fn test_duplicate_binding_name_display() {
    let err = Error::DuplicateBindingName("Camera".to_string());
    assert_eq!(format!("{}", err), "Duplicate binding name: Camera");
}

#[test]
fn test_duplicate_stage_display() {
    let err = Error::DuplicateStage(ShaderStage::TessellationControl);
    assert_eq!(format!("{}", err), "Duplicate shader stage: tessellation-control");
}

#[test]
fn test_misused_stage_query_display() {
    let err = Error::MisusedStageQuery("fragment stage has no input layout".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Misused stage query"));
    assert!(display.contains("fragment"));
}

#[test]
fn test_invalid_binding_slot_display() {
    let err = Error::InvalidBindingSlot(BindingKey::new(1, 12));
    assert_eq!(
        format!("{}", err),
        "Invalid binding slot: set 1 binding 12 does not fit the packed key"
    );
}

#[test]
fn test_binding_conflict_display() {
    let err = Error::BindingConflict("'albedo' and 'Camera'".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Binding conflict"));
    assert!(display.contains("albedo"));
}

#[test]
fn test_invalid_layout_display() {
    let err = Error::InvalidLayout("no buffer format".to_string());
    assert_eq!(format!("{}", err), "Invalid layout: no buffer format");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidLayout("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::DuplicateBindingName("a".to_string()));
    assert!(debug1.contains("DuplicateBindingName"));

    let debug2 = format!("{:?}", Error::DuplicateStage(ShaderStage::Vertex));
    assert!(debug2.contains("DuplicateStage"));
    assert!(debug2.contains("Vertex"));

    let debug3 = format!("{:?}", Error::InvalidBindingSlot(BindingKey::new(0, 10)));
    assert!(debug3.contains("InvalidBindingSlot"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::BindingConflict("test".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));

    let err3 = Error::DuplicateStage(ShaderStage::Compute);
    let err4 = err3.clone();
    assert_eq!(format!("{}", err3), format!("{}", err4));
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

#[test]
fn test_result_ok() {
    let result: Result<u32> = Ok(20);
    assert!(matches!(result, Ok(20)));
}

#[test]
fn test_result_err_with_question_mark() {
    fn inner() -> Result<()> {
        Err(Error::MisusedStageQuery("geometry".to_string()))
    }
    fn outer() -> Result<u32> {
        inner()?;
        Ok(1)
    }

    match outer() {
        Err(Error::MisusedStageQuery(msg)) => assert_eq!(msg, "geometry"),
        other => panic!("unexpected result: {:?}", other),
    }
}
