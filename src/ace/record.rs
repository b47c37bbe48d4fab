//! Integer representation of an ACE
//!
//! An [`AceRecord`] carries the `get()` values of an entry's masks. Loading a
//! record runs every value back through its mask's validity check, so a
//! record is only accepted if the masks would have produced it.

use crate::ace::Ace;
use crate::error::{MaskError, MaskKind, format_bits};
use crate::mask::{FlagMask, Mask};
use serde::{Deserialize, Serialize};

/// Serializable ACE snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AceRecord {
    #[serde(rename = "type")]
    pub ace_type: u32,
    pub access: u32,
    pub flags: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

impl From<&Ace> for AceRecord {
    fn from(ace: &Ace) -> Self {
        Self {
            ace_type: ace.type_mask().get(),
            access: ace.access().get(),
            flags: ace.flag().get(),
            sid: ace.sid().get().map(str::to_string),
        }
    }
}

impl TryFrom<AceRecord> for Ace {
    type Error = MaskError;

    fn try_from(record: AceRecord) -> Result<Self, Self::Error> {
        let mut ace = Ace::new(record.ace_type)?;
        ace.access_mut().add(record.access)?;

        let group = record.flags & FlagMask::IDENTIFIER_GROUP != 0;
        ace.flag_mut().add(record.flags & !FlagMask::IDENTIFIER_GROUP)?;

        if let Some(sid) = record.sid {
            ace.set_sid(sid, group);
        }

        // The group bit must be reproducible from the SID it describes.
        if ace.is_group_sid() != group {
            return Err(MaskError::unsupported(
                MaskKind::Flag,
                format_bits(i64::from(record.flags)),
            ));
        }

        Ok(ace)
    }
}
