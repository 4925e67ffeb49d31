//! Qualified type names.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    Error, Result,
    naming::{check_identifier, check_package},
};

/// An immutable qualified type name.
///
/// A name is a package (possibly empty, for the unnamed package) plus at
/// least one simple name, outermost first. `java.util.Map.Entry` has the
/// package `java.util` and the simple names `["Map", "Entry"]`.
///
/// The optional origin records the binary name of an already compiled
/// artifact the name was mirrored from. It takes no part in equality,
/// hashing or ordering.
#[derive(Debug, Clone)]
pub struct Name {
    package: String,
    simple_names: Vec<String>,
    origin: Option<String>,
}

impl Name {
    /// Create a name from a package and its simple names, outermost first.
    pub fn new(
        package: impl Into<String>,
        simple_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let package = package.into();
        check_package(&package)?;
        let simple_names: Vec<String> = simple_names.into_iter().map(Into::into).collect();
        if simple_names.is_empty() {
            return Err(Error::empty_name("a type name"));
        }
        for simple in &simple_names {
            check_identifier(simple, "a type name")?;
        }
        Ok(Self {
            package,
            simple_names,
            origin: None,
        })
    }

    /// Create a top-level name.
    pub fn of(package: impl Into<String>, simple_name: impl Into<String>) -> Result<Self> {
        Self::new(package, [simple_name.into()])
    }

    /// Parse a canonical name like `java.util.Map.Entry`.
    ///
    /// Leading segments starting with a lower-case letter form the package,
    /// the first other segment starts the simple names. A name without any
    /// such segment treats its last segment as the simple name.
    pub fn parse(canonical: &str) -> Result<Self> {
        let segments: Vec<&str> = canonical.split('.').collect();
        let split = segments
            .iter()
            .position(|s| !s.starts_with(|c: char| c.is_lowercase()))
            .unwrap_or(segments.len().saturating_sub(1));
        Self::new(segments[..split].join("."), segments[split..].iter().copied())
    }

    /// Parse a binary name like `java.util.Map$Entry`.
    pub fn from_binary(binary: &str) -> Result<Self> {
        let (package, names) = match binary.rsplit_once('.') {
            Some((package, names)) => (package, names),
            None => ("", binary),
        };
        Ok(Self::new(package, names.split('$'))?.with_origin(binary))
    }

    /// `java.lang.Object`.
    pub fn java_lang_object() -> Self {
        Self {
            package: "java.lang".to_string(),
            simple_names: vec!["Object".to_string()],
            origin: None,
        }
    }

    /// Attach the binary name of the artifact this name was mirrored from.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Create the name of a type nested directly in this one.
    pub fn nested(&self, simple_name: impl Into<String>) -> Result<Self> {
        let simple_name = simple_name.into();
        check_identifier(&simple_name, "a type name")?;
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name);
        Ok(Self {
            package: self.package.clone(),
            simple_names,
            origin: None,
        })
    }

    /// The package, empty for the unnamed package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// All simple names, outermost first.
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        // at least one simple name is guaranteed by construction
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    /// Binary name of the mirrored artifact, if any.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The directly enclosing type, `None` for top-level names.
    pub fn enclosing(&self) -> Option<Self> {
        if self.simple_names.len() < 2 {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
            origin: None,
        })
    }

    /// The type named by the simple names up to and including `index`:
    /// `0` is the top-level type, the last index this type itself.
    pub fn up_to(&self, index: usize) -> Self {
        let end = index.min(self.simple_names.len() - 1) + 1;
        Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..end].to_vec(),
            origin: None,
        }
    }

    /// Check if this is a top-level name.
    pub fn is_top_level(&self) -> bool {
        self.simple_names.len() == 1
    }

    /// Check if this names a type of the implicitly imported `java.lang` package.
    pub fn is_java_lang(&self) -> bool {
        self.package == "java.lang"
    }

    /// Check if this is `java.lang.Object`.
    pub fn is_java_lang_object(&self) -> bool {
        self.is_java_lang() && self.simple_names.len() == 1 && self.simple_names[0] == "Object"
    }

    /// Simple names from index `skip` on, joined by dots.
    pub fn chain(&self, skip: usize) -> String {
        let skip = skip.min(self.simple_names.len() - 1);
        self.simple_names[skip..].join(".")
    }

    /// Package and simple names joined by dots: `java.util.Map.Entry`.
    pub fn canonical(&self) -> String {
        if self.package.is_empty() {
            self.chain(0)
        } else {
            format!("{}.{}", self.package, self.chain(0))
        }
    }

    /// Package joined by dots, simple names joined by `$`: `java.util.Map$Entry`.
    pub fn binary(&self) -> String {
        let names = self.simple_names.join("$");
        if self.package.is_empty() {
            names
        } else {
            format!("{}.{}", self.package, names)
        }
    }

    /// Spell this name the way `spelling` dictates.
    ///
    /// Returns the qualifier (ending with a dot, possibly empty) and the
    /// innermost simple name separately, so type-use annotations can be
    /// placed between them.
    pub fn spell(&self, spelling: Spelling) -> (String, &str) {
        let last = self.simple_names.len() - 1;
        let mut qualifier = String::new();
        let skip = match spelling {
            Spelling::Qualified => {
                if !self.package.is_empty() {
                    qualifier.push_str(&self.package);
                    qualifier.push('.');
                }
                0
            }
            Spelling::Simple { skip } => skip.min(last),
        };
        for simple in &self.simple_names[skip..last] {
            qualifier.push_str(simple);
            qualifier.push('.');
        }
        (qualifier, self.simple_name())
    }
}

/// How a type name is written at a use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelling {
    /// Package and all simple names.
    Qualified,
    /// No package; the first `skip` simple names are omitted as well.
    Simple { skip: usize },
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.package == other.package && self.simple_names == other.simple_names
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.package.hash(state);
        self.simple_names.hash(state);
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.package, &self.simple_names).cmp(&(&other.package, &other.simple_names))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_parse() {
        let name = Name::parse("java.util.Map.Entry").unwrap();
        assert_eq!(name.package(), "java.util");
        assert_eq!(name.simple_names(), ["Map", "Entry"]);
        assert_eq!(name.simple_name(), "Entry");

        let name = Name::parse("Tag").unwrap();
        assert_eq!(name.package(), "");
        assert_eq!(name.canonical(), "Tag");

        let name = Name::parse("abc.def").unwrap();
        assert_eq!(name.package(), "abc");
        assert_eq!(name.simple_name(), "def");

        assert!(Name::parse("java.util.").is_err());
    }

    #[test]
    fn test_binary() {
        let name = Name::from_binary("java.util.Map$Entry").unwrap();
        assert_eq!(name.canonical(), "java.util.Map.Entry");
        assert_eq!(name.binary(), "java.util.Map$Entry");
        assert_eq!(name.origin(), Some("java.util.Map$Entry"));

        let unnamed = Name::from_binary("Outer$Inner").unwrap();
        assert_eq!(unnamed.package(), "");
        assert_eq!(unnamed.binary(), "Outer$Inner");
    }

    #[test]
    fn test_equality_ignores_origin() {
        let plain = Name::parse("java.util.Map.Entry").unwrap();
        let mirrored = Name::from_binary("java.util.Map$Entry").unwrap();
        assert_eq!(plain, mirrored);

        let set: HashSet<Name> = [plain, mirrored].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_enclosing_and_nested() {
        let outer = Name::of("abc", "Outer").unwrap();
        let inner = outer.nested("Inner").unwrap();
        assert_eq!(inner.canonical(), "abc.Outer.Inner");
        assert_eq!(inner.enclosing(), Some(outer.clone()));
        assert_eq!(outer.enclosing(), None);
        assert!(outer.nested("class").is_err());
    }

    #[test]
    fn test_up_to() {
        let deep = Name::parse("abc.Outer.Inner.Deep").unwrap();
        assert_eq!(deep.up_to(0).canonical(), "abc.Outer");
        assert_eq!(deep.up_to(1).canonical(), "abc.Outer.Inner");
        assert_eq!(deep.up_to(7), deep);
    }

    #[test]
    fn test_java_lang() {
        assert!(Name::java_lang_object().is_java_lang_object());
        assert!(Name::of("java.lang", "String").unwrap().is_java_lang());
        assert!(!Name::of("java.lang", "String").unwrap().is_java_lang_object());
    }

    #[test]
    fn test_spell() {
        let name = Name::parse("java.util.Map.Entry").unwrap();
        assert_eq!(
            name.spell(Spelling::Qualified),
            ("java.util.Map.".to_string(), "Entry")
        );
        assert_eq!(
            name.spell(Spelling::Simple { skip: 0 }),
            ("Map.".to_string(), "Entry")
        );
        assert_eq!(
            name.spell(Spelling::Simple { skip: 1 }),
            (String::new(), "Entry")
        );

        let unnamed = Name::of("", "Xyz").unwrap();
        assert_eq!(unnamed.spell(Spelling::Qualified), (String::new(), "Xyz"));
    }
}
