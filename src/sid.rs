//! Security identifiers
//!
//! A SID names the subject an ACE applies to: a user, a group, or one of the
//! well-known special principals such as `EVERYONE@`.

use std::fmt;

/// Well-known special principals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialIdentifier {
    Owner,
    Group,
    Everyone,
    Interactive,
    Network,
    Dialup,
    Batch,
    Anonymous,
    Authenticated,
    Service,
}

impl SpecialIdentifier {
    /// Get the identifier name as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpecialIdentifier::Owner => "OWNER",
            SpecialIdentifier::Group => "GROUP",
            SpecialIdentifier::Everyone => "EVERYONE",
            SpecialIdentifier::Interactive => "INTERACTIVE",
            SpecialIdentifier::Network => "NETWORK",
            SpecialIdentifier::Dialup => "DIALUP",
            SpecialIdentifier::Batch => "BATCH",
            SpecialIdentifier::Anonymous => "ANONYMOUS",
            SpecialIdentifier::Authenticated => "AUTHENTICATED",
            SpecialIdentifier::Service => "SERVICE",
        }
    }

    /// Try to parse a special identifier, ignoring case and one trailing `@`
    pub fn try_parse(s: &str) -> Option<Self> {
        let name = s.strip_suffix('@').unwrap_or(s);

        Self::all()
            .iter()
            .find(|special| special.as_str().eq_ignore_ascii_case(name))
            .copied()
    }

    /// Canonical stored form, e.g. `EVERYONE@`
    pub fn canonical(&self) -> String {
        format!("{}@", self.as_str())
    }

    /// Get all special identifiers
    pub fn all() -> &'static [SpecialIdentifier] {
        &[
            SpecialIdentifier::Owner,
            SpecialIdentifier::Group,
            SpecialIdentifier::Everyone,
            SpecialIdentifier::Interactive,
            SpecialIdentifier::Network,
            SpecialIdentifier::Dialup,
            SpecialIdentifier::Batch,
            SpecialIdentifier::Anonymous,
            SpecialIdentifier::Authenticated,
            SpecialIdentifier::Service,
        ]
    }
}

impl fmt::Display for SpecialIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@", self.as_str())
    }
}

/// Security identifier value
///
/// Special identifiers are stored canonicalized (`OWNER@`) and are never
/// groups; any other value is stored verbatim with the caller's group flag.
/// Each [`Sid::set`] replaces all previous state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sid {
    value: Option<String>,
    special: bool,
    group: bool,
}

impl Sid {
    /// Create a SID holding a value
    pub fn new(value: impl Into<String>, is_group: bool) -> Self {
        let mut sid = Self::default();
        sid.set(value, is_group);
        sid
    }

    /// Set the SID value, normalizing special identifiers
    pub fn set(&mut self, value: impl Into<String>, is_group: bool) -> &mut Self {
        let value = value.into();

        match SpecialIdentifier::try_parse(&value) {
            Some(special) => {
                self.value = Some(special.canonical());
                self.special = true;
                self.group = false;
            }
            None => {
                self.value = Some(value);
                self.special = false;
                self.group = is_group;
            }
        }

        self
    }

    /// Get the SID value, if one has been set
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Is group SID?
    pub fn is_group(&self) -> bool {
        self.group
    }

    /// Is special SID?
    pub fn is_special(&self) -> bool {
        self.special
    }

    /// Check if no value has been set
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The special identifier this SID names, if any
    pub fn special_identifier(&self) -> Option<SpecialIdentifier> {
        if !self.special {
            return None;
        }

        self.value.as_deref().and_then(SpecialIdentifier::try_parse)
    }
}

impl From<&str> for Sid {
    fn from(value: &str) -> Self {
        Self::new(value, false)
    }
}

impl From<String> for Sid {
    fn from(value: String) -> Self {
        Self::new(value, false)
    }
}

impl From<SpecialIdentifier> for Sid {
    fn from(special: SpecialIdentifier) -> Self {
        Self::new(special.canonical(), false)
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.as_deref().unwrap_or(""))
    }
}
