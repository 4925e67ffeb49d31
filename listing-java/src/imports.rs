//! Import declarations and the import table that shortens type names.

use std::collections::BTreeSet;

use indexmap::{IndexMap, IndexSet};
use listing_core::{
    Error, Listing, Name, NameResolver, Renderable, Result, Scope, ScopeFrame, Spelling,
    naming::{check_identifier, check_package},
};

/// The four kinds of import declarations of a compilation unit.
///
/// Insertion order is kept for inspection; rendering sorts each group.
///
/// # Example
///
/// ```
/// use listing_core::{Name, Renderable};
/// use listing_java::ImportDeclarations;
///
/// let mut imports = ImportDeclarations::new();
/// imports
///     .add_single_type_import(Name::parse("java.util.List").unwrap())
///     .unwrap()
///     .add_type_import_on_demand("java.io")
///     .unwrap();
/// assert_eq!(imports.list(), "import java.io.*;\nimport java.util.List;\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportDeclarations {
    /// Simple name -> imported type
    single_type: IndexMap<String, Name>,
    /// Canonical names of packages or types
    on_demand: IndexSet<String>,
    /// Owner type and member name
    single_static: IndexSet<(Name, String)>,
    static_on_demand: IndexSet<Name>,
}

impl ImportDeclarations {
    /// Create an empty set of import declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a single type. A second import of the same simple name is
    /// rejected, even for the same type.
    pub fn add_single_type_import(&mut self, name: Name) -> Result<&mut Self> {
        let simple_name = name.simple_name().to_string();
        if let Some(existing) = self.single_type.get(&simple_name) {
            return Err(Error::DuplicateImport {
                simple_name,
                existing: existing.canonical(),
                requested: name.canonical(),
            });
        }
        tracing::debug!(import = %name, "registered single-type import");
        self.single_type.insert(simple_name, name);
        Ok(self)
    }

    /// Import all types of a package, or all member types of a type given
    /// by its canonical name.
    pub fn add_type_import_on_demand(&mut self, package_or_type: &str) -> Result<&mut Self> {
        if package_or_type.is_empty() {
            return Err(Error::empty_name("an import on demand"));
        }
        check_package(package_or_type)?;
        tracing::debug!(import = package_or_type, "registered type-import-on-demand");
        self.on_demand.insert(package_or_type.to_string());
        Ok(self)
    }

    /// Import a single static member of `owner`.
    pub fn add_single_static_import(&mut self, owner: Name, member: &str) -> Result<&mut Self> {
        check_identifier(member, "a static member")?;
        tracing::debug!(owner = %owner, member, "registered single-static import");
        self.single_static.insert((owner, member.to_string()));
        Ok(self)
    }

    /// Import all static members of `owner`.
    pub fn add_static_import_on_demand(&mut self, owner: Name) -> &mut Self {
        tracing::debug!(owner = %owner, "registered static-import-on-demand");
        self.static_on_demand.insert(owner);
        self
    }

    /// The type imported by a single-type import of `simple_name`.
    pub fn single_type_import(&self, simple_name: &str) -> Option<&Name> {
        self.single_type.get(simple_name)
    }

    /// Check if `package_or_type` is imported on demand.
    pub fn is_imported_on_demand(&self, package_or_type: &str) -> bool {
        self.on_demand.contains(package_or_type)
    }

    /// Single-type imports in insertion order.
    pub fn single_type_imports(&self) -> impl Iterator<Item = &Name> {
        self.single_type.values()
    }

    /// Single static imports in insertion order.
    pub fn single_static_imports(&self) -> impl Iterator<Item = (&Name, &str)> {
        self.single_static
            .iter()
            .map(|(owner, member)| (owner, member.as_str()))
    }

    /// Static imports in source form, sorted.
    pub fn static_lines(&self) -> BTreeSet<String> {
        let singles = self
            .single_static
            .iter()
            .map(|(owner, member)| format!("import static {owner}.{member};"));
        let on_demand = self
            .static_on_demand
            .iter()
            .map(|owner| format!("import static {owner}.*;"));
        singles.chain(on_demand).collect()
    }

    /// Type imports in source form, sorted.
    pub fn type_lines(&self) -> BTreeSet<String> {
        let singles = self
            .single_type
            .values()
            .map(|name| format!("import {name};"));
        let on_demand = self
            .on_demand
            .iter()
            .map(|package| format!("import {package}.*;"));
        singles.chain(on_demand).collect()
    }

    /// Total number of import declarations.
    pub fn len(&self) -> usize {
        self.single_type.len()
            + self.on_demand.len()
            + self.single_static.len()
            + self.static_on_demand.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders static imports, a blank line, then type imports.
impl Renderable for ImportDeclarations {
    fn render(&self, listing: &mut Listing<'_>) {
        let statics = self.static_lines();
        let types = self.type_lines();
        for line in &statics {
            listing.push_line(line);
        }
        if !statics.is_empty() && !types.is_empty() {
            listing.push_blank();
        }
        for line in &types {
            listing.push_line(line);
        }
    }
}

/// Resolves type names against the package and imports of one unit.
///
/// Resolution order, first match wins:
///
/// 1. The shortest chain whose leading simple name denotes the right type
///    where it is used: a declaration in scope, one of its member types, or
///    a top-level type of the unit. `Outer.B` inside `Outer.A` when `A`
///    declares a `B` of its own.
/// 2. Same package or `java.lang`: the simple-name chain, unless a
///    single-type import claims the leading simple name for another type.
/// 3. Single-type import of the type or of an enclosing type.
/// 4. Type-import-on-demand of the package, or of the enclosing type.
/// 5. Fully qualified.
///
/// Any shortened spelling whose leading simple name is hidden where it is
/// used, by a type variable or by another type declared in the unit, falls
/// back to the qualified spelling. Static imports never take part.
#[derive(Debug, Clone)]
pub struct ImportTable<'a> {
    package: &'a str,
    imports: &'a ImportDeclarations,
    declared: Vec<Name>,
}

impl<'a> ImportTable<'a> {
    /// Create an import table for a unit of `package`.
    pub fn new(package: &'a str, imports: &'a ImportDeclarations) -> Self {
        Self {
            package,
            imports,
            declared: Vec::new(),
        }
    }

    /// Register the names of all type declarations of the unit, nested
    /// ones included.
    pub fn with_declared(mut self, declared: impl IntoIterator<Item = Name>) -> Self {
        self.declared.extend(declared);
        self
    }

    /// Number of leading simple names to skip, or why none can be skipped.
    fn shorten(&self, name: &Name) -> std::result::Result<usize, &'static str> {
        let simple_names = name.simple_names();
        let last = simple_names.len() - 1;

        if name.package() == self.package || name.is_java_lang() {
            return match self.imports.single_type_import(&simple_names[0]) {
                Some(imported) if !is_prefix_of(imported, name) => Err("hidden by an import"),
                _ => Ok(0),
            };
        }

        for skip in (0..=last).rev() {
            let imported = self.imports.single_type_import(&simple_names[skip]);
            if imported.is_some_and(|imported| {
                is_prefix_of(imported, name) && imported.simple_names().len() == skip + 1
            }) {
                return Ok(skip);
            }
        }

        let claimed = |simple: &str| self.imports.single_type_import(simple).is_some();
        if self.imports.is_imported_on_demand(name.package()) {
            return if claimed(&simple_names[0]) {
                Err("hidden by an import")
            } else {
                Ok(0)
            };
        }
        let enclosing_on_demand = name
            .enclosing()
            .is_some_and(|enclosing| self.imports.is_imported_on_demand(&enclosing.canonical()));
        if enclosing_on_demand {
            return if claimed(&simple_names[last]) {
                Err("hidden by an import")
            } else {
                Ok(last)
            };
        }

        Err("not imported")
    }

    /// What the innermost simple name of `prefix` denotes at a position
    /// enclosed by `scope`.
    ///
    /// Type variables and member types of nearer declarations hide types of
    /// the same simple name further out, top-level types of the unit come
    /// last.
    fn binding(&self, prefix: &Name, scope: &Scope) -> Binding {
        let head = prefix.simple_name();
        for frame in scope.frames().iter().rev() {
            match frame {
                ScopeFrame::Variables(variables) => {
                    if variables.iter().any(|variable| variable == head) {
                        return Binding::Hidden;
                    }
                }
                ScopeFrame::Declaration(outer) => {
                    if outer == prefix || prefix.enclosing().as_ref() == Some(outer) {
                        return Binding::Denotes;
                    }
                    let taken = outer.simple_name() == head
                        || self.declared.iter().any(|declared| {
                            declared.simple_name() == head
                                && declared.enclosing().as_ref() == Some(outer)
                        });
                    if taken {
                        return Binding::Hidden;
                    }
                }
            }
        }
        let top_level = self
            .declared
            .iter()
            .find(|declared| declared.is_top_level() && declared.simple_name() == head);
        match top_level {
            Some(declared) if declared == prefix => Binding::Denotes,
            Some(_) => Binding::Hidden,
            None => Binding::Unbound,
        }
    }
}

/// Meaning of a simple name at some position of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    /// The name denotes the type in question.
    Denotes,
    /// The name denotes another type, or a type variable.
    Hidden,
    /// No declaration of the unit binds the name; imports decide.
    Unbound,
}

/// Check if `prefix` names `name` itself or one of its enclosing types.
fn is_prefix_of(prefix: &Name, name: &Name) -> bool {
    prefix.package() == name.package() && name.simple_names().starts_with(prefix.simple_names())
}

impl NameResolver for ImportTable<'_> {
    fn resolve(&self, name: &Name, scope: &Scope) -> Spelling {
        let last = name.simple_names().len() - 1;
        for skip in (0..=last).rev() {
            if self.binding(&name.up_to(skip), scope) == Binding::Denotes {
                return Spelling::Simple { skip };
            }
        }
        match self.shorten(name) {
            Ok(skip) => match self.binding(&name.up_to(skip), scope) {
                Binding::Hidden => {
                    tracing::trace!(name = %name, "hidden in scope, spelling qualified");
                    Spelling::Qualified
                }
                _ => Spelling::Simple { skip },
            },
            Err(reason) => {
                tracing::trace!(name = %name, reason, "spelling qualified");
                Spelling::Qualified
            }
        }
    }
}
