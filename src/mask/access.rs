//! ACE access mask
//!
//! Permission bits granted, denied or audited by an entry. The layout is
//! sparse: bit 6 and bits 9-16 carry no meaning and are never valid.

use crate::error::{MaskKind, MaskResult};
use crate::mask::private::Field;
use crate::mask::{Mask, MaskValue, TokenTable};

/// Access mask token lookup
///
/// Tokens with underscores removed are included for camelCase support
const ACCESS_TOKENS: TokenTable = &[
    ("VIEW", AccessMask::VIEW),
    ("CREATE", AccessMask::CREATE),
    ("MODIFY", AccessMask::MODIFY),
    ("DELETE", AccessMask::DELETE),
    ("UNDELETE", AccessMask::UNDELETE),
    ("SEARCH", AccessMask::SEARCH),
    ("READ_ATTRIBUTES", AccessMask::READ_ATTRIBUTES),
    ("READATTRIBUTES", AccessMask::READ_ATTRIBUTES),
    ("WRITE_ATTRIBUTES", AccessMask::WRITE_ATTRIBUTES),
    ("WRITEATTRIBUTES", AccessMask::WRITE_ATTRIBUTES),
    ("READ_ACL", AccessMask::READ_ACL),
    ("READACL", AccessMask::READ_ACL),
    ("WRITE_ACL", AccessMask::WRITE_ACL),
    ("WRITEACL", AccessMask::WRITE_ACL),
    ("WRITE_OWNER", AccessMask::WRITE_OWNER),
    ("WRITEOWNER", AccessMask::WRITE_OWNER),
    ("FULL_CONTROL", AccessMask::FULL_CONTROL),
    ("FULLCONTROL", AccessMask::FULL_CONTROL),
];

/// Permission bit-field for an ACE
///
/// ```text
///  19  18  17        8   7       5   4   3   2   1   0
/// ┌───┬───┬───┬─────┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
/// │WO │WA │RA │ 0…0 │WAT│RAT│ 0 │ S │ U │ D │ M │ C │ V │
/// └───┴───┴───┴─────┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessMask {
    bits: u32,
}

impl AccessMask {
    pub const VIEW: u32 = 1 << 0;
    pub const CREATE: u32 = 1 << 1;
    pub const MODIFY: u32 = 1 << 2;
    pub const DELETE: u32 = 1 << 3;
    pub const UNDELETE: u32 = 1 << 4;
    pub const SEARCH: u32 = 1 << 5;
    pub const READ_ATTRIBUTES: u32 = 1 << 7;
    pub const WRITE_ATTRIBUTES: u32 = 1 << 8;
    pub const READ_ACL: u32 = 1 << 17;
    pub const WRITE_ACL: u32 = 1 << 18;
    pub const WRITE_OWNER: u32 = 1 << 19;

    /// Every individually defined permission
    pub const PERMISSIONS: &'static [u32] = &[
        Self::VIEW,
        Self::CREATE,
        Self::MODIFY,
        Self::DELETE,
        Self::UNDELETE,
        Self::SEARCH,
        Self::READ_ATTRIBUTES,
        Self::WRITE_ATTRIBUTES,
        Self::READ_ACL,
        Self::WRITE_ACL,
        Self::WRITE_OWNER,
    ];

    /// Union of every defined permission; reserved positions stay clear
    pub const FULL_CONTROL: u32 = {
        let mut bits = 0;
        let mut i = 0;
        while i < Self::PERMISSIONS.len() {
            bits |= Self::PERMISSIONS[i];
            i += 1;
        }
        bits
    };

    /// Create an empty access mask
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an access mask holding an initial value
    pub fn with(value: impl Into<MaskValue>) -> MaskResult<Self> {
        let mut mask = Self::new();
        mask.add(value)?;
        Ok(mask)
    }
}

impl Field for AccessMask {
    fn field(&self) -> u32 {
        self.bits
    }

    fn field_mut(&mut self) -> &mut u32 {
        &mut self.bits
    }
}

impl Mask for AccessMask {
    fn kind(&self) -> MaskKind {
        MaskKind::Access
    }

    fn tokens(&self) -> TokenTable {
        ACCESS_TOKENS
    }

    fn is_valid(&self, bits: u32) -> bool {
        bits == (Self::FULL_CONTROL & bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaskError;

    #[test]
    fn test_full_control_is_union() {
        assert_eq!(AccessMask::FULL_CONTROL, 0x000E_01BF);
        assert_ne!(AccessMask::FULL_CONTROL, u32::MAX);
    }

    #[test]
    fn test_reserved_bits_rejected() {
        let mut mask = AccessMask::new();
        let err = mask.add(1 << 6).unwrap_err();
        assert!(matches!(
            err,
            MaskError::UnsupportedMask {
                kind: MaskKind::Access,
                ..
            }
        ));

        assert!(mask.add(1 << 9).is_err());
        assert!(mask.add(AccessMask::FULL_CONTROL | (1 << 20)).is_err());
        assert_eq!(mask.get(), 0);
    }

    #[test]
    fn test_with_initial_value() {
        let mask = AccessMask::with(AccessMask::VIEW | AccessMask::DELETE).unwrap();
        assert_eq!(mask.get(), AccessMask::VIEW | AccessMask::DELETE);
        assert!(AccessMask::with("nope").is_err());
    }

    #[test]
    fn test_full_control_token() {
        let mut mask = AccessMask::new();
        mask.add("fullControl").unwrap();
        assert_eq!(mask.get(), AccessMask::FULL_CONTROL);
        mask.remove("write_owner").unwrap();
        assert!(!mask.contains("full_control").unwrap());
    }
}
