//! This module provides utility functions to generate EVM bytecode.

use alloy_primitives::{Address, Bytes, U256};
use revm::bytecode::opcode::{JUMPDEST, PUSH1, STOP};

use crate::CallerPattern;

/// A builder for assembling EVM bytecode.
#[derive(Debug, Default)]
pub struct BytecodeBuilder {
    code: Vec<u8>,
}

impl BytecodeBuilder {
    /// Build the bytecode.
    pub fn build(self) -> Bytes {
        self.code.into()
    }

    /// Build the bytecode as a vector.
    pub fn build_vec(self) -> Vec<u8> {
        self.code
    }

    /// Get the length of the bytecode.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Check if the bytecode is empty.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Append a single opcode or byte.
    pub fn append(mut self, opcode: u8) -> Self {
        self.code.push(opcode);
        self
    }

    /// Append a series of opcodes or bytes.
    pub fn append_many(mut self, items: impl IntoIterator<Item = u8>) -> Self {
        self.code.extend(items);
        self
    }

    /// Append a PUSH opcode and the bytes to push. Only `PUSH1..=PUSH32` are generated.
    pub fn push_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        let bytes: &[u8] = bytes.as_ref();
        assert!((1..=32).contains(&bytes.len()));
        self.code.push(PUSH1 + bytes.len() as u8 - 1);
        self.code.extend_from_slice(bytes);
        self
    }

    /// Append a PUSH opcode and the number to push, using its minimal big-endian encoding.
    pub fn push_number(self, number: u64) -> Self {
        let bytes = number.to_be_bytes();
        let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len() - 1);
        self.push_bytes(&bytes[first..])
    }

    /// Append a PUSH opcode and the address to push.
    pub fn push_address(self, address: Address) -> Self {
        self.push_bytes(address)
    }

    /// Append a PUSH opcode and the u256 value to push.
    pub fn push_u256(self, value: U256) -> Self {
        self.push_bytes(value.to_be_bytes::<32>())
    }

    /// Append a whitelisted `CALLER` sequence.
    pub fn caller_pattern(self, pattern: CallerPattern) -> Self {
        self.append_many(pattern.bytes().iter().copied())
    }

    /// Append the identity precompile call sequence.
    pub fn identity_call(self) -> Self {
        self.caller_pattern(CallerPattern::IdentityCall)
    }

    /// Append the execution manager call sequence.
    pub fn manager_call(self) -> Self {
        self.caller_pattern(CallerPattern::ManagerCall)
    }

    /// Append a JUMPDEST opcode.
    pub fn jumpdest(self) -> Self {
        self.append(JUMPDEST)
    }

    /// Append a STOP opcode.
    pub fn stop(self) -> Self {
        self.append(STOP)
    }
}
