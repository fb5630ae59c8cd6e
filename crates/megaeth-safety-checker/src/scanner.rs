//! The single-pass bytecode safety scanner.
//!
//! The scanner walks the bytecode once, classifying every reachable opcode with
//! [`classify`]. Bytecode is safe iff no reachable opcode is blacklisted and every `CALLER` starts
//! one of the whitelisted [`CallerPattern`](crate::CallerPattern)s. The scanner never executes anything and keeps no
//! state between calls.

use revm::bytecode::opcode::JUMPDEST;
use tracing::{debug, trace};

use crate::{
    classify, constants::SKIPPABLE_BYTES, match_caller_pattern, OpcodeClass, SafetyError,
};

/// Tracing target of the safety checker.
pub const TRACING_TARGET: &str = "megaeth::safety";

/// Entry point of the bytecode safety checker.
///
/// The checker has no configuration and no state. It exists so that a deployment gatekeeper can
/// hold the checker as a value; [`is_bytecode_safe`] and [`check_bytecode`] are equivalent free
/// functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SafetyScanner;

impl SafetyScanner {
    /// Creates a new `SafetyScanner`.
    pub const fn new() -> Self {
        Self
    }

    /// Checks whether `code` is safe to run in the sandbox.
    pub fn is_safe(&self, code: impl AsRef<[u8]>) -> bool {
        is_bytecode_safe(code)
    }

    /// Checks `code`, reporting the first reason it is unsafe.
    pub fn check(&self, code: impl AsRef<[u8]>) -> Result<(), SafetyError> {
        check_bytecode(code)
    }
}

/// Returns `true` iff `code` is safe to run in the sandbox.
///
/// Empty code is safe.
pub fn is_bytecode_safe(code: impl AsRef<[u8]>) -> bool {
    check_bytecode(code).is_ok()
}

/// Checks whether `code` is safe to run in the sandbox, reporting the first offending opcode.
///
/// The verdict is identical to [`is_bytecode_safe`].
pub fn check_bytecode(code: impl AsRef<[u8]>) -> Result<(), SafetyError> {
    let code = code.as_ref();
    let result = scan(code);
    debug!(target: TRACING_TARGET, len = code.len(), ?result, "Checked bytecode safety");
    result
}

fn scan(code: &[u8]) -> Result<(), SafetyError> {
    let mut pc = 0;
    while pc < code.len() {
        pc = fast_forward(code, pc);
        let Some(&opcode) = code.get(pc) else { break };

        match classify(opcode) {
            OpcodeClass::Allowed => pc += 1,
            OpcodeClass::Push { size } => pc += 1 + size as usize,
            OpcodeClass::Halting => {
                let resume = skip_unreachable(code, pc);
                trace!(target: TRACING_TARGET, from = pc, to = resume, "Skipped unreachable code");
                // step over the JUMPDEST, which is itself allowed
                pc = resume + 1;
            }
            OpcodeClass::Caller => match match_caller_pattern(code, pc) {
                Some(pattern) => pc += pattern.len(),
                None => {
                    trace!(target: TRACING_TARGET, pc, "Unrecognized CALLER sequence");
                    return Err(SafetyError::UnrecognizedCallerSequence { pc });
                }
            },
            OpcodeClass::Blacklisted => {
                trace!(target: TRACING_TARGET, pc, opcode, "Disallowed opcode");
                return Err(SafetyError::DisallowedOpcode { pc, opcode });
            }
        }
    }
    Ok(())
}

/// Skips the unreachable code following the halting opcode at `halt_pc`.
///
/// Walks the bytes after `halt_pc` as instructions without classifying them, stepping over push
/// literals, until a `JUMPDEST` is found at an instruction boundary. Returns the offset of that
/// `JUMPDEST`, or `code.len()` if the code ends first.
pub fn skip_unreachable(code: &[u8], halt_pc: usize) -> usize {
    let mut pc = halt_pc.saturating_add(1);
    while let Some(&opcode) = code.get(pc) {
        if opcode == JUMPDEST {
            return pc;
        }
        pc += 1 + classify(opcode).push_size();
    }
    code.len()
}

/// Advances `pc` across always-allowed opcodes and short pushes using [`SKIPPABLE_BYTES`].
///
/// Returns the offset of the first opcode that needs full classification, or an offset at or
/// past `code.len()`. This only accelerates [`check_bytecode`]; classifying the same bytes one by
/// one gives the same verdict.
#[inline]
pub fn fast_forward(code: &[u8], mut pc: usize) -> usize {
    while let Some(&opcode) = code.get(pc) {
        match SKIPPABLE_BYTES[opcode as usize] {
            0 => break,
            skip => pc += skip as usize,
        }
    }
    pc
}

#[cfg(test)]
mod tests {
    use revm::bytecode::opcode::{
        ADD, CALLER, DUP1, INVALID, JUMP, PUSH1, PUSH2, PUSH32, RETURN, SLOAD, STOP,
    };

    use super::*;

    #[test]
    fn test_fast_forward_stops_at_gated_opcode() {
        let code = [ADD, DUP1, PUSH2, SLOAD, SLOAD, ADD, SLOAD];
        assert_eq!(fast_forward(&code, 0), 6);
        assert_eq!(fast_forward(&code, 6), 6);
        assert_eq!(fast_forward(&[ADD, PUSH32, 0x00], 0), 1);
        // truncated short push runs past the end
        assert_eq!(fast_forward(&[ADD, PUSH2], 0), 4);
        assert_eq!(fast_forward(&[], 0), 0);
    }

    #[test]
    fn test_skip_unreachable_resumes_at_jumpdest() {
        let code = [STOP, SLOAD, CALLER, JUMPDEST, ADD];
        assert_eq!(skip_unreachable(&code, 0), 3);
    }

    #[test]
    fn test_skip_unreachable_skips_push_literals() {
        // the JUMPDEST byte is push data, not an instruction
        let code = [RETURN, PUSH1, JUMPDEST, SLOAD, JUMPDEST];
        assert_eq!(skip_unreachable(&code, 0), 4);
    }

    #[test]
    fn test_skip_unreachable_runs_to_end() {
        let code = [JUMP, SLOAD, PUSH32, 0x01];
        assert_eq!(skip_unreachable(&code, 0), code.len());
        assert_eq!(skip_unreachable(&[INVALID], 0), 1);
    }

    #[test]
    fn test_scan_reports_first_offense() {
        let code = [ADD, PUSH1, SLOAD, SLOAD, CALLER];
        assert_eq!(
            check_bytecode(code),
            Err(SafetyError::DisallowedOpcode { pc: 3, opcode: SLOAD })
        );
        let code = [ADD, CALLER, SLOAD];
        assert_eq!(
            check_bytecode(code),
            Err(SafetyError::UnrecognizedCallerSequence { pc: 1 })
        );
    }

    #[test]
    fn test_scanner_value() {
        let scanner = SafetyScanner::new();
        assert!(scanner.is_safe([PUSH1, 0x00, STOP]));
        assert!(scanner.check(Vec::<u8>::new()).is_ok());
        assert!(!scanner.is_safe([SLOAD]));
    }
}
