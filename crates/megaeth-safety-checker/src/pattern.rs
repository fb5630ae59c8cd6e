use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::constants::{
    addresses::IDENTITY_PRECOMPILE,
    patterns::{IDENTITY_CALL, MANAGER_CALL},
};

/// A whitelisted instruction sequence starting with `CALLER`.
///
/// `CALLER` reads the identity of the caller and is therefore blacklisted on its own. The two
/// sequences below only ever use the caller as a call target, so they cannot leak it into the
/// contract's state. Matching is exact: a semantically equivalent rewrite is still rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallerPattern {
    /// `CALLER POP PUSH1 0x00 PUSH1 0x04 GAS CALL`
    IdentityCall,
    /// Call into the execution manager, bubbling up reverts and early returns.
    ManagerCall,
}

#[allow(clippy::len_without_is_empty)]
impl CallerPattern {
    /// All whitelisted patterns, in matching order.
    pub const ALL: [Self; 2] = [Self::IdentityCall, Self::ManagerCall];

    /// The exact bytes of the pattern, `CALLER` included.
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Self::IdentityCall => &IDENTITY_CALL,
            Self::ManagerCall => &MANAGER_CALL,
        }
    }

    /// Length of the pattern in bytes, `CALLER` included.
    pub const fn len(self) -> usize {
        self.bytes().len()
    }

    /// Fixed callee of the pattern, `None` when the call targets the caller itself.
    pub const fn callee(self) -> Option<Address> {
        match self {
            Self::IdentityCall => Some(IDENTITY_PRECOMPILE),
            Self::ManagerCall => None,
        }
    }

    /// Checks if `code` contains this pattern starting at `pc`.
    ///
    /// Bytes past the end of `code` never match.
    #[inline]
    pub fn matches_at(self, code: &[u8], pc: usize) -> bool {
        let Some(end) = pc.checked_add(self.len()) else { return false };
        code.get(pc..end) == Some(self.bytes())
    }
}

/// Returns the whitelisted pattern starting at `pc`, if any.
///
/// `pc` is expected to point at a `CALLER` opcode.
pub fn match_caller_pattern(code: &[u8], pc: usize) -> Option<CallerPattern> {
    CallerPattern::ALL.into_iter().find(|pattern| pattern.matches_at(code, pc))
}

#[cfg(test)]
mod tests {
    use revm::bytecode::opcode::{CALLER, STOP};

    use super::*;
    use crate::constants::patterns::{IDENTITY_CALL_LEN, MANAGER_CALL_LEN};

    #[test]
    fn test_pattern_lengths() {
        assert_eq!(CallerPattern::IdentityCall.len(), IDENTITY_CALL_LEN);
        assert_eq!(CallerPattern::ManagerCall.len(), MANAGER_CALL_LEN);
        assert_eq!(IDENTITY_CALL, hex::decode("3350600060045af1").unwrap().as_slice());
        assert_eq!(
            MANAGER_CALL,
            hex::decode(
                "336000905af158600e01573d6000803e3d6000fd5b3d6001141558600a015760016000f35b"
            )
            .unwrap()
            .as_slice()
        );
    }

    #[test]
    fn test_identity_call_targets_identity_precompile() {
        let pattern = CallerPattern::IdentityCall;
        // PUSH1 0x04 is the call target
        assert_eq!(pattern.bytes()[5], pattern.callee().unwrap().0[19]);
        assert_eq!(CallerPattern::ManagerCall.callee(), None);
    }

    #[test]
    fn test_match_at_offset() {
        let mut code = vec![STOP, STOP];
        code.extend_from_slice(&MANAGER_CALL);
        code.push(STOP);
        assert_eq!(match_caller_pattern(&code, 2), Some(CallerPattern::ManagerCall));
        assert_eq!(match_caller_pattern(&code, 0), None);
        assert_eq!(match_caller_pattern(&code, usize::MAX), None);
    }

    #[test]
    fn test_truncated_pattern_does_not_match() {
        for pattern in CallerPattern::ALL {
            let bytes = pattern.bytes();
            assert!(pattern.matches_at(bytes, 0));
            assert!(!pattern.matches_at(&bytes[..bytes.len() - 1], 0));
            assert_eq!(match_caller_pattern(&[CALLER], 0), None);
        }
    }
}
