//! Translation of type descriptors into a declaration tree.

use listing_core::Name;
use listing_java::{
    Annotated, Annotation, ClassType, EnumConstant, JavaUnit, MethodParameter, Modified, Modifier,
    Modifiers, TypeDeclaration, TypeKind, TypeParameter, TypeVariable,
};

use crate::{
    Error, Result,
    descriptor::{
        ConstructorDescriptor, FieldDescriptor, Kind, MethodDescriptor, ModifierSpec,
        ParameterDescriptor, TypeDescriptor, TypeParameterDescriptor, from_json,
    },
    syntax::{parse_class_type, parse_type},
};

/// Build a compilation unit mirroring `descriptors`.
///
/// All descriptors must belong to the same package. Nested types are
/// attached to their enclosing type, which must be described as well.
/// The unit is built through the public builder API only, so every
/// construction rule applies.
///
/// # Example
///
/// ```
/// use listing_core::Renderable;
/// use listing_mirror::{TypeDescriptor, mirror};
///
/// let descriptors: Vec<TypeDescriptor> = serde_json::from_str(
///     r#"[{ "name": "abc.Xyz", "modifiers": 1 }]"#,
/// ).unwrap();
/// let unit = mirror(&descriptors).unwrap();
/// assert_eq!(unit.list(), "package abc;\n\npublic class Xyz {\n}\n");
/// ```
pub fn mirror(descriptors: &[TypeDescriptor]) -> Result<JavaUnit> {
    let mut named = descriptors
        .iter()
        .map(|descriptor| Ok((Name::from_binary(&descriptor.name)?, descriptor)))
        .collect::<Result<Vec<_>>>()?;
    let package = match named.first() {
        Some((name, _)) => name.package().to_string(),
        None => return Err(Error::Empty),
    };
    if let Some((name, _)) = named.iter().find(|(name, _)| name.package() != package) {
        return Err(Error::PackageMismatch {
            name: name.canonical(),
            expected: package,
            found: name.package().to_string(),
        });
    }
    // enclosing types first; the sort is stable so insertion order survives
    named.sort_by_key(|(name, _)| name.simple_names().len());

    let mut unit = JavaUnit::new(&package)?;
    for (name, descriptor) in &named {
        tracing::debug!(name = %name, kind = ?descriptor.kind, "mirroring type");
        let variables = variables_in_scope(name, &named);
        let variables: Vec<&str> = variables.iter().map(String::as_str).collect();
        let declaration = declare(&mut unit, name, descriptor.kind)?;
        populate(declaration, descriptor, &variables)?;
    }
    Ok(unit)
}

/// Parse a JSON array of descriptors and mirror it.
pub fn mirror_json(text: &str) -> Result<JavaUnit> {
    mirror(&from_json(text)?)
}

fn declare<'u>(unit: &'u mut JavaUnit, name: &Name, kind: Kind) -> Result<&'u mut TypeDeclaration> {
    let simple = name.simple_name();
    let declaration = match name.enclosing() {
        None => match kind {
            Kind::Class => unit.declare_class(simple)?,
            Kind::Interface => unit.declare_interface(simple)?,
            Kind::Enum => unit.declare_enum(simple)?,
            Kind::Annotation => unit.declare_annotation(simple)?,
        },
        Some(enclosing) => {
            let outer = unit
                .find_mut(&enclosing)
                .ok_or_else(|| Error::MissingEnclosing {
                    name: name.canonical(),
                })?;
            match kind {
                Kind::Class => outer.declare_class(simple)?,
                Kind::Interface => outer.declare_interface(simple)?,
                Kind::Enum => outer.declare_enum(simple)?,
                Kind::Annotation => outer.declare_annotation(simple)?,
            }
        }
    };
    Ok(declaration)
}

/// Type parameter names declared by `name` and the types enclosing it.
fn variables_in_scope(name: &Name, named: &[(Name, &TypeDescriptor)]) -> Vec<String> {
    let mut variables = Vec::new();
    let mut current = Some(name.clone());
    while let Some(outer) = current {
        if let Some((_, descriptor)) = named.iter().find(|(candidate, _)| candidate == &outer) {
            variables.extend(descriptor.type_parameters.iter().map(|p| p.name.clone()));
        }
        current = outer.enclosing();
    }
    variables
}

fn populate(
    declaration: &mut TypeDeclaration,
    descriptor: &TypeDescriptor,
    variables: &[&str],
) -> Result<()> {
    let kind = descriptor.kind;
    for modifier in modifiers(&descriptor.modifiers)?.iter() {
        // interfaces and annotation types are implicitly abstract
        if modifier == Modifier::Abstract && matches!(kind, Kind::Interface | Kind::Annotation) {
            continue;
        }
        declaration.add_modifier(modifier);
    }
    declaration.add_annotations(annotations(&descriptor.annotations)?);
    for parameter in &descriptor.type_parameters {
        declaration.add_type_parameter(type_parameter(parameter, variables)?)?;
    }
    if kind == Kind::Class {
        if let Some(superclass) = &descriptor.superclass {
            declaration.set_superclass(parse_class_type(superclass, variables, "a superclass")?)?;
        }
    }
    if kind != Kind::Annotation {
        for interface in &descriptor.interfaces {
            declaration.add_interface(parse_class_type(interface, variables, "an interface")?)?;
        }
    }
    for constant in &descriptor.constants {
        declaration.add_enum_constant(EnumConstant::new(constant.as_str())?)?;
    }
    for field in &descriptor.fields {
        mirror_field(declaration, field, variables)?;
    }
    for constructor in &descriptor.constructors {
        mirror_constructor(declaration, constructor, variables)?;
    }
    for method in &descriptor.methods {
        mirror_method(declaration, method, variables)?;
    }
    Ok(())
}

fn mirror_field(
    declaration: &mut TypeDeclaration,
    descriptor: &FieldDescriptor,
    variables: &[&str],
) -> Result<()> {
    let field = declaration.add_field(parse_type(&descriptor.ty, variables)?, &descriptor.name)?;
    for modifier in modifiers(&descriptor.modifiers)?.iter() {
        field.add_modifier(modifier);
    }
    field.add_annotations(annotations(&descriptor.annotations)?);
    Ok(())
}

fn mirror_constructor(
    declaration: &mut TypeDeclaration,
    descriptor: &ConstructorDescriptor,
    variables: &[&str],
) -> Result<()> {
    let constructor = declaration.add_constructor()?;
    for modifier in modifiers(&descriptor.modifiers)?.iter() {
        constructor.add_modifier(modifier);
    }
    for parameter in &descriptor.parameters {
        constructor.add_method_parameter(parameter_of(parameter, variables)?)?;
    }
    for exception in &descriptor.throws {
        constructor.add_throws(parse_class_type(exception, variables, "an exception")?);
    }
    if let Some(body) = &descriptor.body {
        constructor.set_body(body);
    }
    Ok(())
}

fn mirror_method(
    declaration: &mut TypeDeclaration,
    descriptor: &MethodDescriptor,
    variables: &[&str],
) -> Result<()> {
    let mut variables = variables.to_vec();
    variables.extend(descriptor.type_parameters.iter().map(|p| p.name.as_str()));

    let in_interface = declaration.kind() == TypeKind::Interface;
    let returns = parse_type(&descriptor.returns, &variables)?;
    let method = declaration.add_method(returns, &descriptor.name)?;
    let mut declared = modifiers(&descriptor.modifiers)?;
    // access flags have no bit for `default`
    if in_interface && is_default(&declared) {
        declared.insert(Modifier::Default);
    }
    for modifier in declared.iter() {
        method.add_modifier(modifier);
    }
    method.add_annotations(annotations(&descriptor.annotations)?);
    for parameter in &descriptor.type_parameters {
        method.add_type_parameter(type_parameter(parameter, &variables)?);
    }
    for parameter in &descriptor.parameters {
        method.add_method_parameter(parameter_of(parameter, &variables)?)?;
    }
    for exception in &descriptor.throws {
        method.add_throws(parse_class_type(exception, &variables, "an exception")?);
    }
    if let Some(body) = &descriptor.body {
        method.set_body(body);
    }
    Ok(())
}

/// Check if an interface method with these modifiers is a default method.
fn is_default(modifiers: &Modifiers) -> bool {
    [Modifier::Abstract, Modifier::Static, Modifier::Private]
        .into_iter()
        .all(|modifier| !modifiers.contains(modifier))
}

fn modifiers(declared: &ModifierSpec) -> Result<Modifiers> {
    match declared {
        ModifierSpec::Flags(flags) => Ok(Modifiers::from_access_flags(*flags)),
        ModifierSpec::Keywords(keywords) => Ok(keywords
            .iter()
            .map(|keyword| keyword.parse::<Modifier>())
            .collect::<listing_core::Result<Modifiers>>()?),
    }
}

fn annotations(names: &[String]) -> Result<Vec<Annotation>> {
    Ok(names
        .iter()
        .map(|name| Annotation::of(name))
        .collect::<listing_core::Result<Vec<_>>>()?)
}

fn type_parameter(
    descriptor: &TypeParameterDescriptor,
    variables: &[&str],
) -> Result<TypeParameter> {
    let mut parameter = TypeParameter::new(descriptor.name.as_str())?;
    for bound in &descriptor.bounds {
        match parse_type(bound, variables)? {
            listing_java::JavaType::Class(class) => {
                parameter.add_bound(class);
            }
            listing_java::JavaType::Variable(variable) => {
                parameter.set_bound_variable(variable);
            }
            _ => return Err(Error::unexpected_type(bound, "a type parameter bound")),
        }
    }
    Ok(parameter)
}

fn parameter_of(descriptor: &ParameterDescriptor, variables: &[&str]) -> Result<MethodParameter> {
    let ty = parse_type(&descriptor.ty, variables)?;
    let parameter = MethodParameter::new(ty, descriptor.name.as_str())?;
    if descriptor.variable {
        return Ok(parameter.variable()?);
    }
    Ok(parameter)
}

#[cfg(test)]
mod tests {
    use listing_core::Renderable;
    use pretty_assertions::assert_eq;

    use super::*;

    fn descriptor(name: &str) -> TypeDescriptor {
        serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
    }

    #[test]
    fn test_empty() {
        assert!(matches!(mirror(&[]), Err(Error::Empty)));
    }

    #[test]
    fn test_package_mismatch() {
        let err = mirror(&[descriptor("abc.A"), descriptor("xyz.B")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'xyz.B' belongs to package 'xyz', expected 'abc'"
        );
    }

    #[test]
    fn test_missing_enclosing() {
        let err = mirror(&[descriptor("abc.A$B")]).unwrap_err();
        assert!(matches!(err, Error::MissingEnclosing { .. }));
    }

    #[test]
    fn test_nested_before_enclosing() {
        let unit = mirror(&[descriptor("abc.A$B"), descriptor("abc.A")]).unwrap();
        assert_eq!(unit.list(), "package abc;\n\nclass A {\n  class B {\n  }\n}\n");
        let nested = Name::parse("abc.A.B").unwrap();
        assert!(unit.find(&nested).is_some());
    }

    #[test]
    fn test_interface_drops_abstract() {
        let mut interface = descriptor("abc.I");
        interface.kind = Kind::Interface;
        // public abstract interface
        interface.modifiers = ModifierSpec::Flags(0x0001 | 0x0200 | 0x0400);
        let unit = mirror(&[interface]).unwrap();
        assert_eq!(unit.list(), "package abc;\n\npublic interface I {\n}\n");
    }

    #[test]
    fn test_interface_default_methods() {
        let mut interface = descriptor("abc.Shape");
        interface.kind = Kind::Interface;
        let methods = serde_json::json!([
            { "name": "area", "returns": "double", "modifiers": 1025 },
            {
                "name": "isEmpty",
                "returns": "boolean",
                "modifiers": 1,
                "body": "return area() == 0;"
            },
            { "name": "unit", "returns": "abc.Shape", "modifiers": 9, "body": "return null;" }
        ]);
        interface.methods = serde_json::from_value(methods).unwrap();
        let unit = mirror(&[interface]).unwrap();
        assert_eq!(
            unit.list(),
            concat!(
                "package abc;\n",
                "\n",
                "interface Shape {\n",
                "  public abstract double area();\n",
                "\n",
                "  public default boolean isEmpty() {\n",
                "    return area() == 0;\n",
                "  }\n",
                "\n",
                "  public static Shape unit() {\n",
                "    return null;\n",
                "  }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_class_methods_are_never_default() {
        let mut class = descriptor("abc.A");
        let methods = serde_json::json!([{ "name": "run", "modifiers": 1 }]);
        class.methods = serde_json::from_value(methods).unwrap();
        let unit = mirror(&[class]).unwrap();
        assert!(unit.list().contains("  public void run() {\n  }\n"));
    }

    #[test]
    fn test_variables_from_enclosing_types() {
        let mut outer = descriptor("abc.Outer");
        outer.type_parameters.push(TypeParameterDescriptor {
            name: "T".to_string(),
            bounds: Vec::new(),
        });
        let mut inner = descriptor("abc.Outer$Inner");
        inner.fields.push(FieldDescriptor {
            name: "value".to_string(),
            ty: "T".to_string(),
            modifiers: ModifierSpec::default(),
            annotations: Vec::new(),
        });
        let unit = mirror(&[outer, inner]).unwrap();
        assert!(unit.list().contains("    T value;\n"));
    }

    #[test]
    fn test_rejects_bad_bound() {
        let mut class = descriptor("abc.A");
        class.type_parameters.push(TypeParameterDescriptor {
            name: "T".to_string(),
            bounds: vec!["int[]".to_string()],
        });
        assert!(matches!(
            mirror(&[class]),
            Err(Error::UnexpectedType { .. })
        ));
    }
}
