use alloy_primitives::U256;
use revm::bytecode::opcode::{OpCode, CALLER, PUSH1};
use serde::{Deserialize, Serialize};

use crate::constants::masks::{GATE_MASK, HALTING_MASK, PUSH_MASK};

/// A set of opcodes backed by a 256-bit mask. Bit `i` is set iff opcode `i` is a member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OpcodeMask(U256);

impl OpcodeMask {
    /// Creates a mask from its raw 256-bit representation.
    pub const fn new(bits: U256) -> Self {
        Self(bits)
    }

    /// Creates a mask containing exactly the given opcodes.
    pub const fn from_opcodes(opcodes: &[u8]) -> Self {
        let mut limbs = [0u64; 4];
        let mut i = 0;
        while i < opcodes.len() {
            let opcode = opcodes[i] as usize;
            limbs[opcode / 64] |= 1 << (opcode % 64);
            i += 1;
        }
        Self(U256::from_limbs(limbs))
    }

    /// Creates a mask containing every opcode in `first..=last`.
    pub const fn from_range(first: u8, last: u8) -> Self {
        let mut limbs = [0u64; 4];
        let mut opcode = first as usize;
        while opcode <= last as usize {
            limbs[opcode / 64] |= 1 << (opcode % 64);
            opcode += 1;
        }
        Self(U256::from_limbs(limbs))
    }

    /// Returns the raw 256-bit representation.
    pub const fn bits(&self) -> U256 {
        self.0
    }

    /// Checks whether `opcode` is in the set.
    #[inline]
    pub const fn contains(&self, opcode: u8) -> bool {
        let limbs = self.0.as_limbs();
        (limbs[opcode as usize / 64] >> (opcode % 64)) & 1 == 1
    }

    /// Number of opcodes in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_zero()
    }

    /// Iterates over the member opcodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |opcode| self.contains(*opcode))
    }

    /// Returns the opcodes present in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }
}

/// The policy bucket an opcode falls into.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum OpcodeClass {
    /// Always allowed, no further handling.
    Allowed,
    /// `PUSH1..=PUSH32`, followed by `size` literal bytes that are never decoded.
    Push {
        /// Number of literal bytes following the opcode.
        size: u8,
    },
    /// Ends execution or transfers control away (`STOP`, `JUMP`, `RETURN`, `INVALID`).
    Halting,
    /// `CALLER`, only allowed at the start of a whitelisted call sequence.
    Caller,
    /// Reads context-dependent state or is otherwise forbidden in the sandbox.
    Blacklisted,
}

impl OpcodeClass {
    /// Returns the class of `opcode`. Same as [`classify`].
    #[inline]
    pub fn of(opcode: u8) -> Self {
        OPCODE_CLASSES[opcode as usize]
    }

    /// Number of literal bytes following the opcode, `0` for anything but a push.
    pub const fn push_size(self) -> usize {
        match self {
            Self::Push { size } => size as usize,
            _ => 0,
        }
    }

    const fn compute(opcode: u8) -> Self {
        if !GATE_MASK.contains(opcode) {
            Self::Allowed
        } else if PUSH_MASK.contains(opcode) {
            Self::Push { size: opcode - PUSH1 + 1 }
        } else if HALTING_MASK.contains(opcode) {
            Self::Halting
        } else if opcode == CALLER {
            Self::Caller
        } else {
            Self::Blacklisted
        }
    }
}

/// Class of every opcode, indexed by opcode value.
static OPCODE_CLASSES: [OpcodeClass; 256] = {
    let mut table = [OpcodeClass::Blacklisted; 256];
    let mut opcode = 0usize;
    while opcode < 256 {
        table[opcode] = OpcodeClass::compute(opcode as u8);
        opcode += 1;
    }
    table
};

/// Classifies `opcode` into its policy bucket with a single table lookup.
#[inline]
pub fn classify(opcode: u8) -> OpcodeClass {
    OpcodeClass::of(opcode)
}

/// Returns the mnemonic of `opcode`, or `"UNKNOWN"` for undefined opcodes.
pub fn opcode_name(opcode: u8) -> &'static str {
    OpCode::new(opcode).map_or("UNKNOWN", OpCode::as_str)
}
