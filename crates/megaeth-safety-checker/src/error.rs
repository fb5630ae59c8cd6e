//! Diagnostics for bytecode rejected by the safety checker.

use serde::{Deserialize, Serialize};

use crate::opcode_name;

/// Why and where a bytecode was rejected.
///
/// The safety verdict itself is a plain boolean; this type only refines it for logging and
/// tooling. Every variant means the same thing to the sandbox: the code is unsafe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum SafetyError {
    /// A blacklisted opcode is reachable by normal control flow.
    #[error("disallowed opcode {} ({opcode:#04x}) at pc {pc}", opcode_name(*.opcode))]
    DisallowedOpcode {
        /// Offset of the opcode.
        pc: usize,
        /// The opcode value.
        opcode: u8,
    },
    /// `CALLER` is not the start of a whitelisted call sequence.
    #[error("CALLER at pc {pc} is not followed by a whitelisted call sequence")]
    UnrecognizedCallerSequence {
        /// Offset of the `CALLER` opcode.
        pc: usize,
    },
}

impl SafetyError {
    /// Offset of the offending opcode.
    pub const fn pc(&self) -> usize {
        match self {
            Self::DisallowedOpcode { pc, .. } | Self::UnrecognizedCallerSequence { pc } => *pc,
        }
    }

    /// The offending opcode.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::DisallowedOpcode { opcode, .. } => *opcode,
            Self::UnrecognizedCallerSequence { .. } => revm::bytecode::opcode::CALLER,
        }
    }
}
