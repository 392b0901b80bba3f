//! Unit tests for AttributeLayout
//!
//! Tests offset assignment, running totals and iteration order.

use crate::shader::{AttributeLayout, ShaderDataType};

// ============================================================================
// EMPTY LAYOUT
// ============================================================================

#[test]
fn test_empty_layout() {
    let layout = AttributeLayout::new();
    assert_eq!(layout.total_size_bytes(), 0);
    assert_eq!(layout.count(), 0);
    assert!(layout.is_empty());
    assert!(layout.iter().next().is_none());
    assert_eq!(layout, AttributeLayout::default());
}

// ============================================================================
// APPEND
// ============================================================================

#[test]
fn test_append_assigns_running_offsets() {
    let mut layout = AttributeLayout::new();
    layout.append(ShaderDataType::Float3, "position");
    layout.append(ShaderDataType::Float2, "uv");

    let offsets: Vec<u32> = layout.iter().map(|e| e.offset_bytes()).collect();
    assert_eq!(offsets, vec![0, 12]);
    assert_eq!(layout.total_size_bytes(), 20);
    assert_eq!(layout.count(), 2);
}

#[test]
fn test_append_records_type_name_and_size() {
    let mut layout = AttributeLayout::new();
    layout.append(ShaderDataType::Mat4, "model");

    let element = layout.get(0).unwrap();
    assert_eq!(element.data_type(), ShaderDataType::Mat4);
    assert_eq!(element.name(), "model");
    assert_eq!(element.size_bytes(), 64);
    assert_eq!(element.offset_bytes(), 0);
}

#[test]
fn test_offsets_are_prefix_sums() {
    let types = [
        ShaderDataType::Float,
        ShaderDataType::Mat4,
        ShaderDataType::Int2,
        ShaderDataType::Bool,
        ShaderDataType::Float4,
        ShaderDataType::Mat3,
        ShaderDataType::Unorm4,
    ];
    let mut layout = AttributeLayout::new();
    for (i, data_type) in types.iter().enumerate() {
        layout.append(*data_type, format!("field{}", i));
    }

    let mut expected_offset = 0;
    for (i, element) in layout.iter().enumerate() {
        assert_eq!(element.offset_bytes(), expected_offset, "offset mismatch at {}", i);
        expected_offset += types[i].size_bytes();
    }
    assert_eq!(layout.total_size_bytes(), expected_offset);
}

#[test]
fn test_undefined_element_takes_no_space() {
    let mut layout = AttributeLayout::new();
    layout.append(ShaderDataType::Float, "a");
    layout.append(ShaderDataType::Undefined, "broken");
    layout.append(ShaderDataType::Float, "b");

    assert_eq!(layout.get(1).unwrap().size_bytes(), 0);
    assert_eq!(layout.get(2).unwrap().offset_bytes(), 4);
    assert_eq!(layout.total_size_bytes(), 8);
}

// ============================================================================
// CONSTRUCTION FROM ELEMENTS
// ============================================================================

#[test]
fn test_from_elements_matches_appends() {
    let built = AttributeLayout::from_elements([
        (ShaderDataType::Float3, "position"),
        (ShaderDataType::Float3, "normal"),
        (ShaderDataType::Float2, "uv"),
    ]);

    let mut appended = AttributeLayout::new();
    appended.append(ShaderDataType::Float3, "position");
    appended.append(ShaderDataType::Float3, "normal");
    appended.append(ShaderDataType::Float2, "uv");

    assert_eq!(built, appended);
    assert_eq!(built.total_size_bytes(), 32);
}

// ============================================================================
// LOOKUP AND ITERATION
// ============================================================================

#[test]
fn test_find_by_name() {
    let layout = AttributeLayout::from_elements([
        (ShaderDataType::Float4, "color"),
        (ShaderDataType::Float, "intensity"),
    ]);

    assert_eq!(layout.find("intensity").unwrap().offset_bytes(), 16);
    assert!(layout.find("missing").is_none());
    assert!(layout.get(2).is_none());
}

#[test]
fn test_iteration_is_restartable_and_ordered() {
    let layout = AttributeLayout::from_elements([
        (ShaderDataType::Int, "c"),
        (ShaderDataType::Int, "a"),
        (ShaderDataType::Int, "b"),
    ]);

    let first: Vec<&str> = layout.iter().map(|e| e.name()).collect();
    let second: Vec<&str> = (&layout).into_iter().map(|e| e.name()).collect();
    assert_eq!(first, vec!["c", "a", "b"]);
    assert_eq!(first, second);
}
