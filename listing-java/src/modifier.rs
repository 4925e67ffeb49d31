//! Declaration modifiers.

use std::{collections::BTreeSet, fmt, str::FromStr};

use listing_core::{Error, Listing, Renderable, Result};

/// A modifier keyword.
///
/// Variants are declared in canonical order, so sorting yields the order
/// in which modifiers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// All modifiers in canonical order.
    pub const ALL: [Modifier; 12] = [
        Self::Public,
        Self::Protected,
        Self::Private,
        Self::Abstract,
        Self::Default,
        Self::Static,
        Self::Final,
        Self::Transient,
        Self::Volatile,
        Self::Synchronized,
        Self::Native,
        Self::Strictfp,
    ];

    /// Get the keyword of this modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Default => "default",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }

    /// Access flag bit of this modifier in the `java.lang.reflect.Modifier`
    /// layout. `default` has no bit.
    pub fn access_flag(&self) -> Option<u32> {
        match self {
            Self::Public => Some(0x0001),
            Self::Private => Some(0x0002),
            Self::Protected => Some(0x0004),
            Self::Static => Some(0x0008),
            Self::Final => Some(0x0010),
            Self::Synchronized => Some(0x0020),
            Self::Volatile => Some(0x0040),
            Self::Transient => Some(0x0080),
            Self::Native => Some(0x0100),
            Self::Abstract => Some(0x0400),
            Self::Strictfp => Some(0x0800),
            Self::Default => None,
        }
    }
}

impl FromStr for Modifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownModifier {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of modifiers, rendered in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(BTreeSet<Modifier>);

impl Modifiers {
    /// Create an empty modifier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode access flags in the `java.lang.reflect.Modifier` layout.
    /// Unknown bits are ignored.
    pub fn from_access_flags(flags: u32) -> Self {
        Self(
            Modifier::ALL
                .into_iter()
                .filter(|m| m.access_flag().is_some_and(|bit| flags & bit != 0))
                .collect(),
        )
    }

    /// Add a modifier. Returns `false` if it was already present.
    pub fn insert(&mut self, modifier: Modifier) -> bool {
        self.0.insert(modifier)
    }

    /// Check if a modifier is present.
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of modifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Renders each modifier followed by a space.
impl Renderable for Modifiers {
    fn render(&self, listing: &mut Listing<'_>) {
        for modifier in self.iter() {
            listing.push_raw(modifier.as_str()).push_char(' ');
        }
    }
}

/// A declaration that accepts modifiers.
pub trait Modified {
    /// The modifiers of this declaration.
    fn modifiers(&self) -> &Modifiers;

    /// Mutable access to the modifiers.
    fn modifiers_mut(&mut self) -> &mut Modifiers;

    /// Add a modifier.
    fn add_modifier(&mut self, modifier: Modifier) -> &mut Self
    where
        Self: Sized,
    {
        self.modifiers_mut().insert(modifier);
        self
    }

    /// Add modifiers given as keywords, e.g. `["private", "final"]`.
    fn add_modifiers<'k>(
        &mut self,
        keywords: impl IntoIterator<Item = &'k str>,
    ) -> Result<&mut Self>
    where
        Self: Sized,
    {
        for keyword in keywords {
            let modifier = keyword.parse()?;
            self.modifiers_mut().insert(modifier);
        }
        Ok(self)
    }

    /// Check if a modifier is present.
    fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers().contains(modifier)
    }
}
