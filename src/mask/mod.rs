//! Mask module
//!
//! Validated bit-field types for access-control entries.
//!
//! ## Mask Model
//!
//! Every mask stores a 32-bit field and accepts [`MaskValue`] candidates:
//!
//! - integers are used as-is
//! - names are looked up case-insensitively in the mask's token table
//! - lists are resolved element by element and combined with bitwise OR
//!
//! The combined candidate must pass the mask's [`Mask::is_valid`] predicate
//! before `add` or `remove` touches the field, so the stored field is always
//! a valid value for that mask. Only the predicate and the token table differ
//! between concrete masks:
//!
//! | Mask | Valid values |
//! |------|--------------|
//! | [`TypeMask`] | exactly one of the four ACE types |
//! | [`AccessMask`] | any subset of [`AccessMask::FULL_CONTROL`] |
//! | [`FlagMask`] | any subset of the flags for its ACE type |

pub mod access;
pub mod flag;
pub mod type_mask;
pub mod value;

pub use access::AccessMask;
pub use flag::{FlagKind, FlagMask};
pub use type_mask::{AceType, TypeMask};
pub use value::MaskValue;

use crate::error::{MaskError, MaskKind, MaskResult, format_bits};
use tracing::trace;

pub(crate) mod private {
    /// Raw access to a mask's field, kept out of the public API
    pub trait Field {
        fn field(&self) -> u32;
        fn field_mut(&mut self) -> &mut u32;
    }
}

/// Symbolic name table: upper-case token to bit value
pub type TokenTable = &'static [(&'static str, u32)];

/// Common behavior for every validated mask
pub trait Mask: private::Field {
    /// Which mask this is, for diagnostics
    fn kind(&self) -> MaskKind;

    /// Symbolic names accepted by this mask
    fn tokens(&self) -> TokenTable;

    /// Check whether a candidate value is acceptable for this mask
    fn is_valid(&self, bits: u32) -> bool;

    /// Bits owned outside `add`/`remove` that survive a `reset`
    fn reserved_bits(&self) -> u32 {
        0
    }

    /// Current field value
    fn get(&self) -> u32 {
        self.field()
    }

    /// Resolve a candidate to its integer value without validating it
    fn resolve(&self, value: &MaskValue) -> MaskResult<u32> {
        match value {
            MaskValue::Int(v) => {
                u32::try_from(*v).map_err(|_| MaskError::unsupported(self.kind(), format_bits(*v)))
            }
            MaskValue::Name(name) => {
                let token = name.to_ascii_uppercase();
                self.tokens()
                    .iter()
                    .find(|(t, _)| *t == token)
                    .map(|(_, bits)| *bits)
                    .ok_or_else(|| MaskError::unsupported(self.kind(), format!("\"{}\"", name)))
            }
            MaskValue::List(items) => items
                .iter()
                .try_fold(0u32, |acc, item| Ok(acc | self.resolve(item)?)),
            other => Err(MaskError::not_integer(self.kind(), other.to_string())),
        }
    }

    /// Resolve a candidate and reject it unless it passes [`Mask::is_valid`]
    fn resolve_valid(&self, value: &MaskValue) -> MaskResult<u32> {
        let bits = self.resolve(value)?;

        if !self.is_valid(bits) {
            let rendered = match value {
                MaskValue::Name(name) => format!("\"{}\"", name),
                _ => format_bits(i64::from(bits)),
            };
            return Err(MaskError::unsupported(self.kind(), rendered));
        }

        Ok(bits)
    }

    /// Set the bits of a valid candidate
    fn add(&mut self, value: impl Into<MaskValue>) -> MaskResult<&mut Self>
    where
        Self: Sized,
    {
        let bits = self.resolve_valid(&value.into())?;
        *self.field_mut() |= bits;
        trace!(kind = %self.kind(), bits, field = self.field(), "Added mask bits");
        Ok(self)
    }

    /// Clear the bits of a valid candidate
    fn remove(&mut self, value: impl Into<MaskValue>) -> MaskResult<&mut Self>
    where
        Self: Sized,
    {
        let bits = self.resolve_valid(&value.into())?;
        *self.field_mut() &= !bits;
        trace!(kind = %self.kind(), bits, field = self.field(), "Removed mask bits");
        Ok(self)
    }

    /// Check whether every bit of the candidate is set
    fn contains(&self, value: impl Into<MaskValue>) -> MaskResult<bool>
    where
        Self: Sized,
    {
        let bits = self.resolve(&value.into())?;
        Ok(bits == (self.field() & bits))
    }

    /// Check whether the candidate is identical to the field
    fn equals(&self, value: impl Into<MaskValue>) -> MaskResult<bool>
    where
        Self: Sized,
    {
        Ok(self.resolve(&value.into())? == self.field())
    }

    /// Clear the field, keeping reserved bits
    fn reset(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        let reserved = self.reserved_bits();
        *self.field_mut() &= reserved;
        self
    }
}
