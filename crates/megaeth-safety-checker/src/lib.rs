//! Static bytecode safety checker for the `MegaETH` sandbox.
//!
//! Decides whether EVM bytecode is safe to run inside a sandbox that must behave identically to
//! any other sandbox executing the same code. Code is safe when no instruction reachable by
//! normal control flow reads context-dependent state. The only exception is `CALLER`, which is
//! accepted when it starts one of two whitelisted call sequences matched byte for byte.
//!
//! The check is a single linear pass over the bytecode:
//! - opcodes are classified with precomputed 256-bit masks ([`constants::masks`]);
//! - `PUSH` literals are skipped and never decoded;
//! - code after `STOP`, `JUMP`, `RETURN` or `INVALID` is unreachable and skipped until the next
//!   `JUMPDEST`;
//! - `CALLER` must start a [`CallerPattern`].
//!
//! ```
//! use megaeth_safety_checker::is_bytecode_safe;
//! use revm::bytecode::opcode::{PUSH1, SLOAD, STOP};
//!
//! assert!(is_bytecode_safe([PUSH1, 0x00, STOP]));
//! assert!(!is_bytecode_safe([PUSH1, 0x00, SLOAD]));
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;

mod error;
pub use error::*;

mod opcode;
pub use opcode::*;

mod pattern;
pub use pattern::*;

mod scanner;
pub use scanner::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
