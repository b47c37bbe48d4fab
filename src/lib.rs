//! Access Control Entries
//!
//! Typed, validated building blocks for Windows-style discretionary ACLs.
//!
//! ## Features
//!
//! - **Validated masks** for ACE type, access permissions and flags
//! - **Symbolic names** resolved case-insensitively (`"readAcl"` ≡ `"READ_ACL"`)
//! - **Type-bound flags**: inheritance flags for allow/deny entries, audit
//!   flags for audit/alarm entries
//! - **Security identifiers** with special-principal normalization (`owner` → `OWNER@`)
//! - **Integer records** that reload only if every value is still valid
//!
//! ## Entry Model
//!
//! ```text
//! Ace ─┬─ TypeMask   (allow | deny | audit | alarm, fixed)
//!      ├─ AccessMask (view, create, modify, ... full_control)
//!      ├─ FlagMask   (kind chosen by type; group bit follows the SID)
//!      └─ Sid        (user, group, or special identifier)
//! ```
//!
//! ## Example
//!
//! ```
//! use acemask::{Ace, AccessMask, FlagMask, Mask};
//!
//! let mut ace = Ace::new("deny")?;
//! ace.access_mut().add(["view", "modify"])?;
//! ace.flag_mut().add("inherit")?;
//! ace.set_sid("everyone", false);
//!
//! assert_eq!(ace.access().get(), AccessMask::VIEW | AccessMask::MODIFY);
//! assert_eq!(ace.flag().get(), FlagMask::INHERIT);
//! assert_eq!(ace.sid().get(), Some("EVERYONE@"));
//! # Ok::<(), acemask::MaskError>(())
//! ```

pub mod ace;
pub mod config;
pub mod error;
pub mod mask;
pub mod sid;

// Re-export main types
pub use ace::{Ace, AceRecord};
pub use config::{AclConfig, load_config};
pub use error::{AppError, ConfigError, MaskError, MaskKind, Result};
pub use mask::{AccessMask, AceType, FlagKind, FlagMask, Mask, MaskValue, TypeMask};
pub use sid::{Sid, SpecialIdentifier};
