//! Unit tests for BindingKey and the packed key codec

use crate::error::Error;
use crate::shader::{
    BindingKey, MAX_PACKED_BINDING_SLOT,
    encode_binding_key, decode_set, decode_binding,
};

// ============================================================================
// PACKED CODEC
// ============================================================================

#[test]
fn test_encode_is_set_times_ten_plus_binding() {
    assert_eq!(encode_binding_key(0, 0), 0);
    assert_eq!(encode_binding_key(0, 2), 2);
    assert_eq!(encode_binding_key(1, 0), 10);
    assert_eq!(encode_binding_key(3, 7), 37);
}

#[test]
fn test_decode_camera_key() {
    assert_eq!(decode_set(2), 0);
    assert_eq!(decode_binding(2), 2);
}

#[test]
fn test_round_trip_for_single_digit_slots() {
    for set in 0..8 {
        for binding in 0..=MAX_PACKED_BINDING_SLOT {
            let key = encode_binding_key(set, binding);
            assert_eq!(decode_set(key), set);
            assert_eq!(decode_binding(key), binding);
        }
    }
}

#[test]
fn test_round_trip_fails_from_slot_ten() {
    // Known limit of the packed encoding: slot 10 of set 0 reads back as slot 0 of set 1
    let key = encode_binding_key(0, 10);
    assert_eq!(decode_set(key), 1);
    assert_eq!(decode_binding(key), 0);

    let key = encode_binding_key(2, 13);
    assert_ne!((decode_set(key), decode_binding(key)), (2, 13));
}

#[test]
fn test_encode_wraps_instead_of_overflowing() {
    let set = u32::MAX / 10 + 1;
    assert_eq!(encode_binding_key(set, 0), set.wrapping_mul(10));
    assert_eq!(encode_binding_key(0, u32::MAX), u32::MAX);
    assert_eq!(encode_binding_key(u32::MAX, u32::MAX), u32::MAX.wrapping_mul(10).wrapping_add(u32::MAX));
}

// ============================================================================
// BINDING KEY
// ============================================================================

#[test]
fn test_binding_key_holds_any_slot() {
    let key = BindingKey::new(0, 42);
    assert_eq!(key.set, 0);
    assert_eq!(key.binding, 42);
}

#[test]
fn test_binding_key_packed_round_trip() {
    let key = BindingKey::new(4, 9);
    assert!(key.fits_packed());
    assert_eq!(key.packed(), 49);
    assert_eq!(BindingKey::from_packed(key.packed()), key);
    assert_eq!(key.try_packed().unwrap(), 49);
}

#[test]
fn test_try_packed_rejects_wide_slot() {
    let key = BindingKey::new(1, 10);
    assert!(!key.fits_packed());
    match key.try_packed() {
        Err(Error::InvalidBindingSlot(bad)) => assert_eq!(bad, key),
        other => panic!("expected InvalidBindingSlot, got {:?}", other),
    }
}

#[test]
fn test_try_packed_rejects_set_past_u32_range() {
    let key = BindingKey::new(u32::MAX, 3);
    assert!(!key.fits_packed());
    assert!(matches!(key.try_packed(), Err(Error::InvalidBindingSlot(bad)) if bad == key));

    let key = BindingKey::new(u32::MAX / 10 + 1, 0);
    assert!(!key.fits_packed());
    assert!(key.try_packed().is_err());
    assert_eq!(key.packed(), encode_binding_key(key.set, key.binding));
}

#[test]
fn test_try_packed_accepts_largest_key() {
    let key = BindingKey::new(u32::MAX / 10, 5);
    assert!(key.fits_packed());
    assert_eq!(key.try_packed().unwrap(), 4_294_967_295);

    let key = BindingKey::new(u32::MAX / 10, 6);
    assert!(!key.fits_packed());
}

#[test]
fn test_binding_key_ordering_is_set_then_binding() {
    let mut keys = vec![
        BindingKey::new(1, 0),
        BindingKey::new(0, 12),
        BindingKey::new(0, 1),
    ];
    keys.sort();
    assert_eq!(keys, vec![
        BindingKey::new(0, 1),
        BindingKey::new(0, 12),
        BindingKey::new(1, 0),
    ]);
}

#[test]
fn test_binding_key_display() {
    assert_eq!(format!("{}", BindingKey::new(2, 5)), "(set=2, binding=5)");
}
