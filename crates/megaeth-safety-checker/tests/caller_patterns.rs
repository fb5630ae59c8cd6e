//! Tests for the exact matching of the whitelisted `CALLER` sequences.

use megaeth_safety_checker::{
    constants::patterns::{IDENTITY_CALL, MANAGER_CALL},
    test_utils::BytecodeBuilder,
    *,
};
use revm::bytecode::opcode::{ADD, CALLER, PUSH1, STOP};

/// Flipping any single bit after the `CALLER` opcode must make the bytecode unsafe.
fn assert_mutations_rejected(pattern: CallerPattern) {
    let original = pattern.bytes();
    for index in 1..original.len() {
        for bit in 0..8 {
            let mut mutated = original.to_vec();
            mutated[index] ^= 1 << bit;
            assert_eq!(
                check_bytecode(&mutated),
                Err(SafetyError::UnrecognizedCallerSequence { pc: 0 }),
                "{pattern:?} with byte {index} bit {bit} flipped"
            );
        }
    }
}

#[test]
fn test_identity_call_mutations_rejected() {
    assert_mutations_rejected(CallerPattern::IdentityCall);
}

#[test]
fn test_manager_call_mutations_rejected() {
    assert_mutations_rejected(CallerPattern::ManagerCall);
}

#[test]
fn test_identity_call_with_last_byte_flipped() {
    let mut code = IDENTITY_CALL.to_vec();
    assert!(is_bytecode_safe(&code));
    *code.last_mut().unwrap() ^= 0xff;
    assert!(!is_bytecode_safe(&code));
}

#[test]
fn test_truncated_patterns_rejected() {
    for pattern in CallerPattern::ALL {
        let bytes = pattern.bytes();
        for len in 1..bytes.len() {
            assert_eq!(
                check_bytecode(&bytes[..len]),
                Err(SafetyError::UnrecognizedCallerSequence { pc: 0 }),
                "{pattern:?} truncated to {len} bytes"
            );
        }
    }
}

#[test]
fn test_truncated_pattern_after_other_code_rejected() {
    let code = BytecodeBuilder::default()
        .append_many([PUSH1, 0x01, ADD])
        .append_many(MANAGER_CALL[..36].iter().copied())
        .build();
    assert_eq!(
        check_bytecode(code),
        Err(SafetyError::UnrecognizedCallerSequence { pc: 3 })
    );
}

#[test]
fn test_pattern_followed_by_code_is_checked() {
    let code = BytecodeBuilder::default().identity_call().append(CALLER).build();
    assert_eq!(
        check_bytecode(code),
        Err(SafetyError::UnrecognizedCallerSequence { pc: 8 })
    );

    let code = BytecodeBuilder::default().manager_call().identity_call().stop().build();
    assert!(is_bytecode_safe(code));
}

#[test]
fn test_pattern_inside_push_literal_is_not_a_call() {
    // a pattern hidden in push data is never decoded, so nothing needs matching
    let mut literal = IDENTITY_CALL.to_vec();
    literal.push(CALLER);
    let code = BytecodeBuilder::default().push_bytes(&literal).append(STOP).build();
    assert!(is_bytecode_safe(code));
}

#[test]
fn test_pattern_in_unreachable_code_is_ignored() {
    let code = BytecodeBuilder::default()
        .stop()
        .append_many(MANAGER_CALL[..10].iter().copied())
        .build();
    assert!(is_bytecode_safe(code));
}
