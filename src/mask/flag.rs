//! ACE flag masks
//!
//! Which flags an entry may carry depends on its type: allow and deny
//! entries take inheritance flags, audit and alarm entries take
//! success/failure flags. A flag from the other family is rejected even
//! though it is a well-formed flag there.
//!
//! The IDENTIFIER_GROUP bit belongs to neither family. Only the ACE's SID
//! assignment writes it.

use crate::error::{MaskKind, MaskResult, format_bits};
use crate::mask::private::Field;
use crate::mask::{AceType, Mask, MaskValue, TokenTable, TypeMask};
use tracing::trace;

/// Inheritance flag tokens
const ACCESS_FLAG_TOKENS: TokenTable = &[
    ("INHERIT", FlagMask::INHERIT),
    ("NO_PROPAGATE_INHERIT", FlagMask::NO_PROPAGATE_INHERIT),
    ("NOPROPAGATEINHERIT", FlagMask::NO_PROPAGATE_INHERIT),
    ("INHERIT_ONLY", FlagMask::INHERIT_ONLY),
    ("INHERITONLY", FlagMask::INHERIT_ONLY),
];

/// Audit flag tokens
const AUDIT_FLAG_TOKENS: TokenTable = &[
    ("SUCCESSFUL_ACCESS", FlagMask::SUCCESSFUL_ACCESS),
    ("SUCCESSFULACCESS", FlagMask::SUCCESSFUL_ACCESS),
    ("SUCCESSFUL", FlagMask::SUCCESSFUL_ACCESS),
    ("FAILED_ACCESS", FlagMask::FAILED_ACCESS),
    ("FAILEDACCESS", FlagMask::FAILED_ACCESS),
    ("FAILED", FlagMask::FAILED_ACCESS),
];

/// Flag vocabulary, fixed by the ACE type at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// Inheritance flags for allow/deny entries
    Access,
    /// Success/failure flags for audit/alarm entries
    Audit,
}

impl FlagKind {
    /// Select the flag vocabulary for an ACE type
    pub const fn for_type(ace_type: AceType) -> Self {
        if ace_type.is_access() {
            FlagKind::Access
        } else {
            FlagKind::Audit
        }
    }

    /// Union of the flags this kind accepts
    pub const fn valid_bits(&self) -> u32 {
        match self {
            FlagKind::Access => {
                FlagMask::INHERIT | FlagMask::NO_PROPAGATE_INHERIT | FlagMask::INHERIT_ONLY
            }
            FlagKind::Audit => FlagMask::SUCCESSFUL_ACCESS | FlagMask::FAILED_ACCESS,
        }
    }

    pub const fn tokens(&self) -> TokenTable {
        match self {
            FlagKind::Access => ACCESS_FLAG_TOKENS,
            FlagKind::Audit => AUDIT_FLAG_TOKENS,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            FlagKind::Access => "access",
            FlagKind::Audit => "audit",
        }
    }
}

/// Flag bit-field for an ACE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagMask {
    kind: FlagKind,
    bits: u32,
}

impl FlagMask {
    pub const INHERIT: u32 = 0x01;
    pub const NO_PROPAGATE_INHERIT: u32 = 0x04;
    pub const INHERIT_ONLY: u32 = 0x08;
    pub const SUCCESSFUL_ACCESS: u32 = 0x10;
    pub const FAILED_ACCESS: u32 = 0x20;
    pub const IDENTIFIER_GROUP: u32 = 0x40;

    /// Create an empty flag mask for a known ACE type
    pub fn new(ace_type: AceType) -> Self {
        Self {
            kind: FlagKind::for_type(ace_type),
            bits: 0,
        }
    }

    /// Create a flag mask for a raw ACE type, optionally holding an initial value
    ///
    /// Fails with `UnsupportedTypeMask` when `ace_type` is not one of the four
    /// ACE types, and with `UnsupportedMask` when `initial` is not valid for
    /// that type's flag vocabulary.
    pub fn create_for(
        ace_type: impl Into<MaskValue>,
        initial: Option<MaskValue>,
    ) -> MaskResult<Self> {
        let ace_type = TypeMask::new(ace_type)?.ace_type();
        let mut mask = Self::new(ace_type);

        if let Some(value) = initial {
            mask.add(value)?;
        }

        trace!(
            ace_type = %ace_type,
            kind = mask.kind.as_str(),
            bits = mask.bits,
            "Created flag mask"
        );
        Ok(mask)
    }

    /// The flag vocabulary this mask accepts
    pub fn flag_kind(&self) -> FlagKind {
        self.kind
    }

    /// Check if the SID this mask belongs to is a group
    pub fn is_identifier_group(&self) -> bool {
        self.bits & Self::IDENTIFIER_GROUP != 0
    }

    /// Write the reserved group bit; reached only through SID assignment
    pub(crate) fn set_identifier_group(&mut self, is_group: bool) {
        self.bits &= !Self::IDENTIFIER_GROUP;

        if is_group {
            self.bits |= Self::IDENTIFIER_GROUP;
        }
    }
}

impl Field for FlagMask {
    fn field(&self) -> u32 {
        self.bits
    }

    fn field_mut(&mut self) -> &mut u32 {
        &mut self.bits
    }
}

impl Mask for FlagMask {
    fn kind(&self) -> MaskKind {
        MaskKind::Flag
    }

    fn tokens(&self) -> TokenTable {
        self.kind.tokens()
    }

    fn is_valid(&self, bits: u32) -> bool {
        bits == (self.kind.valid_bits() & bits)
    }

    fn reserved_bits(&self) -> u32 {
        Self::IDENTIFIER_GROUP
    }
}

impl std::fmt::Display for FlagMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} flags {}", self.kind.as_str(), format_bits(i64::from(self.bits)))
    }
}
