//! ACE type mask
//!
//! The ACE type is a four-valued enumeration stored as a mask. Unlike the
//! other masks its values are mutually exclusive categories, so a valid value
//! is exactly one enumerant and never a combination of them.

use crate::error::{MaskKind, MaskResult};
use crate::mask::private::Field;
use crate::mask::{Mask, MaskValue, TokenTable};
use std::fmt;

/// Access-control entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum AceType {
    /// Grants the access mask to the SID
    #[default]
    Allowed = 0,
    /// Denies the access mask to the SID
    Denied = 1,
    /// Audits access attempts by the SID
    Audit = 2,
    /// Raises an alarm on access attempts by the SID
    Alarm = 3,
}

impl AceType {
    pub const fn as_bits(&self) -> u32 {
        *self as u32
    }

    /// Try to map a raw type value to an ACE type
    pub const fn try_from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(AceType::Allowed),
            1 => Some(AceType::Denied),
            2 => Some(AceType::Audit),
            3 => Some(AceType::Alarm),
            _ => None,
        }
    }

    /// Get the type name as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            AceType::Allowed => "allowed",
            AceType::Denied => "denied",
            AceType::Audit => "audit",
            AceType::Alarm => "alarm",
        }
    }

    /// Check if this type carries inheritance flags (allow/deny entries)
    pub const fn is_access(&self) -> bool {
        matches!(self, AceType::Allowed | AceType::Denied)
    }

    /// Get all types
    pub fn all() -> &'static [AceType] {
        &[
            AceType::Allowed,
            AceType::Denied,
            AceType::Audit,
            AceType::Alarm,
        ]
    }
}

impl fmt::Display for AceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<AceType> for MaskValue {
    fn from(t: AceType) -> Self {
        MaskValue::Int(i64::from(t.as_bits()))
    }
}

/// Type mask token lookup
///
/// Tokens with underscores removed are included for camelCase support
const TYPE_TOKENS: TokenTable = &[
    ("ACCESS_ALLOWED", TypeMask::ALLOWED),
    ("ACCESSALLOWED", TypeMask::ALLOWED),
    ("ALLOW", TypeMask::ALLOWED),
    ("ALLOWED", TypeMask::ALLOWED),
    ("ACCESS_DENIED", TypeMask::DENIED),
    ("ACCESSDENIED", TypeMask::DENIED),
    ("DENY", TypeMask::DENIED),
    ("DENIED", TypeMask::DENIED),
    ("SYSTEM_AUDIT", TypeMask::AUDIT),
    ("SYSTEMAUDIT", TypeMask::AUDIT),
    ("AUDIT", TypeMask::AUDIT),
    ("SYSTEM_ALARM", TypeMask::ALARM),
    ("SYSTEMALARM", TypeMask::ALARM),
    ("ALARM", TypeMask::ALARM),
];

/// Validated ACE type value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeMask {
    bits: u32,
}

impl TypeMask {
    pub const ALLOWED: u32 = AceType::Allowed.as_bits();
    pub const DENIED: u32 = AceType::Denied.as_bits();
    pub const AUDIT: u32 = AceType::Audit.as_bits();
    pub const ALARM: u32 = AceType::Alarm.as_bits();

    /// Create a type mask from an integer or a type name
    pub fn new(value: impl Into<MaskValue>) -> MaskResult<Self> {
        let bits = Self::default().resolve_valid(&value.into())?;
        Ok(Self { bits })
    }

    /// The ACE type this mask holds
    pub fn ace_type(&self) -> AceType {
        // The field only ever holds one of the four enumerants.
        match self.bits {
            0 => AceType::Allowed,
            1 => AceType::Denied,
            2 => AceType::Audit,
            _ => AceType::Alarm,
        }
    }
}

impl From<AceType> for TypeMask {
    fn from(t: AceType) -> Self {
        Self { bits: t.as_bits() }
    }
}

impl Field for TypeMask {
    fn field(&self) -> u32 {
        self.bits
    }

    fn field_mut(&mut self) -> &mut u32 {
        &mut self.bits
    }
}

impl Mask for TypeMask {
    fn kind(&self) -> MaskKind {
        MaskKind::Type
    }

    fn tokens(&self) -> TokenTable {
        TYPE_TOKENS
    }

    fn is_valid(&self, bits: u32) -> bool {
        AceType::try_from_bits(bits).is_some()
    }
}
