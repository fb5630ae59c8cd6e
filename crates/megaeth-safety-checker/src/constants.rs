//! Constants for the `MegaETH` bytecode safety checker.
//!
//! It groups the policy tables and the whitelisted call sequences as sub-modules. All of them are
//! part of the sandbox determinism guarantee, so none of them is configurable at runtime.

/// Opcode membership masks used to classify every possible opcode byte.
pub mod masks {
    use alloy_primitives::uint;
    use revm::bytecode::opcode::{INVALID, JUMP, PUSH1, PUSH32, RETURN, STOP};

    use crate::OpcodeMask;

    /// Opcodes that need special handling: pushes, halting opcodes, `CALLER` and every
    /// blacklisted opcode. Opcodes outside this mask are always allowed.
    pub const GATE_MASK: OpcodeMask = OpcodeMask::new(uint!(
        0xffffffffffffffffffffffe000000000fffffffff070ffff9c0ffffec000f001_U256
    ));

    /// Opcodes that unconditionally end execution or transfer control away, so the bytes that
    /// follow are not reachable by fall-through.
    ///
    /// `REVERT` is deliberately absent: it is blacklisted.
    pub const HALTING_MASK: OpcodeMask = OpcodeMask::from_opcodes(&[STOP, JUMP, RETURN, INVALID]);

    /// `PUSH1` through `PUSH32`.
    pub const PUSH_MASK: OpcodeMask = OpcodeMask::from_range(PUSH1, PUSH32);
}

/// Number of bytes the fast-forward loop may skip when it sees a given opcode.
///
/// `1` for every always-allowed opcode, `2..=5` for `PUSH1..=PUSH4` (opcode plus literal), `0`
/// for everything that needs the full classification.
pub static SKIPPABLE_BYTES: [u8; 256] = skippable_bytes();

const fn skippable_bytes() -> [u8; 256] {
    use revm::bytecode::opcode::{PUSH1, PUSH4};

    let mut table = [0u8; 256];
    let mut opcode = 0usize;
    while opcode < 256 {
        let op = opcode as u8;
        if !masks::GATE_MASK.contains(op) {
            table[opcode] = 1;
        } else if op >= PUSH1 && op <= PUSH4 {
            table[opcode] = op - PUSH1 + 2;
        }
        opcode += 1;
    }
    table
}

/// The whitelisted byte sequences starting at a `CALLER` opcode.
pub mod patterns {
    use revm::bytecode::opcode::{
        ADD, CALL, CALLER, DUP1, EQ, GAS, ISZERO, JUMPDEST, JUMPI, PC, POP, PUSH1, RETURN,
        RETURNDATACOPY, RETURNDATASIZE, REVERT, SWAP1,
    };

    /// Length of [`IDENTITY_CALL`].
    pub const IDENTITY_CALL_LEN: usize = 8;

    /// Length of [`MANAGER_CALL`].
    pub const MANAGER_CALL_LEN: usize = 37;

    /// Reads the caller, drops it, and calls the identity precompile with no value and a 4 byte
    /// input, forwarding all remaining gas.
    pub const IDENTITY_CALL: [u8; IDENTITY_CALL_LEN] =
        [CALLER, POP, PUSH1, 0x00, PUSH1, 0x04, GAS, CALL];

    /// Calls the execution manager (the caller) and aborts when it is instructed to:
    /// a failed call bubbles the return data up with `REVERT`, a successful call with a single
    /// byte of return data stops with `RETURN`, anything else continues after the final
    /// `JUMPDEST`.
    #[rustfmt::skip]
    pub const MANAGER_CALL: [u8; MANAGER_CALL_LEN] = [
        CALLER, PUSH1, 0x00, SWAP1, GAS, CALL,
        PC, PUSH1, 0x0e, ADD, JUMPI,
        RETURNDATASIZE, PUSH1, 0x00, DUP1, RETURNDATACOPY,
        RETURNDATASIZE, PUSH1, 0x00, REVERT,
        JUMPDEST,
        RETURNDATASIZE, PUSH1, 0x01, EQ, ISZERO,
        PC, PUSH1, 0x0a, ADD, JUMPI,
        PUSH1, 0x01, PUSH1, 0x00, RETURN,
        JUMPDEST,
    ];
}

/// Well-known addresses referenced by the whitelisted call sequences.
pub mod addresses {
    use alloy_primitives::{address, Address};

    /// The identity precompile, the callee of [`super::patterns::IDENTITY_CALL`].
    pub const IDENTITY_PRECOMPILE: Address = address!("0000000000000000000000000000000000000004");
}
