//! Utilities for testing the safety checker.

mod contracts;
pub use contracts::*;

mod opcode_gen;
pub use opcode_gen::*;
