//! Access control entries
//!
//! An [`Ace`] pairs a type, a permission set, type-dependent flags and a SID.
//! The type is fixed at construction because it selects which flags the
//! entry accepts. Access and flags are changed through their masks; the SID
//! is changed through [`Ace::set_sid`], which also keeps the reserved
//! IDENTIFIER_GROUP flag in step with the SID.

pub mod record;

pub use record::AceRecord;

use crate::error::MaskResult;
use crate::mask::{AccessMask, AceType, FlagMask, Mask, MaskValue, TypeMask};
use crate::sid::Sid;
use std::fmt;
use tracing::debug;

/// Access control entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ace {
    type_mask: TypeMask,
    access: AccessMask,
    flag: FlagMask,
    sid: Sid,
}

impl Ace {
    /// Create an entry from an integer or a type name
    pub fn new(type_mask: impl Into<MaskValue>) -> MaskResult<Self> {
        let type_mask = TypeMask::new(type_mask)?;
        Ok(Self::from_type_mask(type_mask))
    }

    /// Create an entry for a known ACE type
    pub fn with_type(ace_type: AceType) -> Self {
        Self::from_type_mask(TypeMask::from(ace_type))
    }

    fn from_type_mask(type_mask: TypeMask) -> Self {
        let ace_type = type_mask.ace_type();
        debug!(ace_type = %ace_type, "Creating ACE");

        Self {
            type_mask,
            access: AccessMask::new(),
            flag: FlagMask::new(ace_type),
            sid: Sid::default(),
        }
    }

    /// Set the SID from a raw value
    pub fn set_sid(&mut self, sid: impl Into<String>, is_group: bool) -> &mut Self {
        self.sid.set(sid, is_group);
        self.sync_group_flag()
    }

    /// Replace the SID with an existing one
    pub fn set_sid_value(&mut self, sid: Sid) -> &mut Self {
        self.sid = sid;
        self.sync_group_flag()
    }

    fn sync_group_flag(&mut self) -> &mut Self {
        self.flag.set_identifier_group(self.sid.is_group());

        debug!(
            sid = %self.sid,
            special = self.sid.is_special(),
            group = self.sid.is_group(),
            "Assigned ACE SID"
        );
        self
    }

    pub fn sid(&self) -> &Sid {
        &self.sid
    }

    pub fn ace_type(&self) -> AceType {
        self.type_mask.ace_type()
    }

    pub fn type_mask(&self) -> &TypeMask {
        &self.type_mask
    }

    pub fn access(&self) -> &AccessMask {
        &self.access
    }

    pub fn access_mut(&mut self) -> &mut AccessMask {
        &mut self.access
    }

    pub fn flag(&self) -> &FlagMask {
        &self.flag
    }

    pub fn flag_mut(&mut self) -> &mut FlagMask {
        &mut self.flag
    }

    /// Is the SID a group?
    pub fn is_group_sid(&self) -> bool {
        self.flag.is_identifier_group()
    }

    /// Is the SID a special identifier?
    pub fn is_special_sid(&self) -> bool {
        self.sid.is_special()
    }
}

impl Default for Ace {
    fn default() -> Self {
        Self::with_type(AceType::Allowed)
    }
}

impl fmt::Display for Ace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} access=0x{:08x} flags=0x{:08x} sid={}",
            self.ace_type(),
            self.access.get(),
            self.flag.get(),
            if self.sid.is_empty() {
                "-".to_string()
            } else {
                self.sid.to_string()
            }
        )?;

        if self.sid.is_special() {
            f.write_str(" (special)")?;
        }
        if self.is_group_sid() {
            f.write_str(" (group)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaskError;

    #[test]
    fn test_default_is_allowed() {
        let ace = Ace::default();
        assert_eq!(ace.ace_type(), AceType::Allowed);
        assert_eq!(ace.type_mask().get(), TypeMask::ALLOWED);
        assert!(ace.sid().is_empty());
    }

    #[test]
    fn test_new_rejects_bad_type() {
        assert!(matches!(
            Ace::new(10).unwrap_err(),
            MaskError::UnsupportedTypeMask { .. }
        ));
        assert!(matches!(
            Ace::new(2.2).unwrap_err(),
            MaskError::MaskNotInteger { .. }
        ));
    }

    #[test]
    fn test_group_flag_follows_sid() {
        let mut ace = Ace::with_type(AceType::Denied);
        ace.flag_mut().add("inherit").unwrap();

        ace.set_sid("security_group", true);
        assert!(ace.is_group_sid());
        assert_eq!(ace.flag().get(), FlagMask::INHERIT | FlagMask::IDENTIFIER_GROUP);

        ace.set_sid("user", false);
        assert!(!ace.is_group_sid());
        assert_eq!(ace.flag().get(), FlagMask::INHERIT);
    }

    #[test]
    fn test_set_sid_value() {
        let mut ace = Ace::default();
        ace.set_sid_value(Sid::new("admins", true));
        assert!(ace.is_group_sid());

        ace.set_sid_value(Sid::from("owner"));
        assert!(!ace.is_group_sid());
        assert!(ace.is_special_sid());
        assert_eq!(ace.sid().get(), Some("OWNER@"));
    }

    #[test]
    fn test_display() {
        let mut ace = Ace::with_type(AceType::Denied);
        ace.access_mut().add(["view", "modify"]).unwrap();
        ace.set_sid("everyone", false);
        assert_eq!(
            ace.to_string(),
            "denied access=0x00000005 flags=0x00000000 sid=EVERYONE@ (special)"
        );

        assert_eq!(
            Ace::default().to_string(),
            "allowed access=0x00000000 flags=0x00000000 sid=-"
        );
    }
}
