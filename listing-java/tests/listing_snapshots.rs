//! Snapshot tests for whole compilation units.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use listing_core::{Name, Renderable};
use listing_java::{
    Annotated, Annotation, ClassType, EnumConstant, JavaType, JavaUnit, Modified, Modifier,
    TypeParameter, TypeVariable, Value,
};

fn generated() -> Annotation {
    Annotation::of("javax.annotation.Generated").unwrap()
}

fn crazy() -> JavaUnit {
    let tag = Annotation::new(Name::of("", "Tag").unwrap());
    let string = JavaType::class("java.lang.String").unwrap();
    let strings = ClassType::parameterized("java.util.List", [string]).unwrap();

    let mut unit = JavaUnit::new("abc.xyz").unwrap();
    unit.package_declaration_mut().add_annotation(
        generated()
            .value("https://")
            .value("github.com/sormuras/listing"),
    );
    unit.imports_mut()
        .add_single_type_import(Name::parse("org.junit.Assert").unwrap())
        .unwrap()
        .add_type_import_on_demand("abc")
        .unwrap()
        .add_single_static_import(Name::parse("java.util.Collections").unwrap(), "shuffle")
        .unwrap()
        .add_static_import_on_demand(Name::parse("java.util.Objects").unwrap());

    unit.declare_annotation("TestAnno").unwrap();
    let test_enum = unit.declare_enum("TestEnum").unwrap();
    test_enum
        .add_annotation(generated().value("An enum for testing"))
        .add_modifier(Modifier::Protected)
        .add_interface(ClassType::of("java.io.Serializable").unwrap())
        .unwrap();
    for constant in ["A", "B", "C"] {
        test_enum
            .add_enum_constant(EnumConstant::new(constant).unwrap())
            .unwrap();
    }
    unit.declare_interface("TestIntf").unwrap();

    let simple = unit.declare_class("SimpleClass").unwrap();
    simple
        .add_modifiers(["public", "final"])
        .unwrap()
        .add_type_parameter(
            TypeParameter::new("S").unwrap().with_bound(
                ClassType::of("java.lang.Runnable")
                    .unwrap()
                    .with_annotation(tag.clone()),
            ),
        )
        .unwrap()
        .add_type_parameter(
            TypeParameter::new("T")
                .unwrap()
                .with_bound_variable(TypeVariable::new("S").unwrap()),
        )
        .unwrap()
        .set_superclass(ClassType::of("java.lang.Thread").unwrap().with_annotation(tag.clone()))
        .unwrap()
        .add_interface(ClassType::of("java.lang.Cloneable").unwrap())
        .unwrap()
        .add_interface(ClassType::of("java.lang.Runnable").unwrap())
        .unwrap();
    simple
        .add_field(JavaType::int(), "i")
        .unwrap()
        .add_modifiers(["private", "volatile"])
        .unwrap()
        .set_initializer(4711);
    simple
        .add_field(ClassType::of("java.lang.String").unwrap().with_annotation(tag), "s")
        .unwrap()
        .set_initializer("The Story about \"Ping\"");
    simple
        .add_field(strings, "l")
        .unwrap()
        .set_initializer(Value::raw("java.util.Collections.emptyList()"));
    simple
        .add_method(JavaType::void(), "run")
        .unwrap()
        .add_annotation(Annotation::of("java.lang.Override").unwrap())
        .add_modifier(Modifier::Public)
        .add_modifier(Modifier::Final)
        .set_body("System.out.println(\"Hallo Welt!\");");
    simple
        .add_method(TypeVariable::new("N").unwrap(), "calc")
        .unwrap()
        .add_modifier(Modifier::Static)
        .add_type_parameter(
            TypeParameter::new("N")
                .unwrap()
                .with_bound(ClassType::of("java.lang.Number").unwrap()),
        )
        .add_parameter(JavaType::int(), "i")
        .unwrap()
        .add_throws(ClassType::of("java.lang.Exception").unwrap())
        .set_body("return null;");
    let innum = simple.declare_enum("Innum").unwrap();
    for constant in ["X", "Y", "Z"] {
        innum
            .add_enum_constant(EnumConstant::new(constant).unwrap())
            .unwrap();
    }
    simple.declare_class("Cinner").unwrap().set_body("// empty");
    unit
}

#[test]
fn test_crazy() {
    let unit = crazy();
    let simple = unit.find(&Name::parse("abc.xyz.SimpleClass").unwrap()).unwrap();
    assert_eq!(simple.members()[0].enclosing_type(), Some(simple.name()));
    insta::assert_snapshot!("crazy", unit.list());
}

#[test]
fn test_enterprise() {
    let mut unit = JavaUnit::new("uss").unwrap();
    let string = || JavaType::class("java.lang.String").unwrap();
    let number = || JavaType::class("java.lang.Number").unwrap();

    let enterprise = unit.declare_class("Enterprise").unwrap();
    enterprise
        .add_modifier(Modifier::Public)
        .add_interface(ClassType::parameterized("java.util.function.Supplier", [string()]).unwrap())
        .unwrap();
    enterprise
        .add_field(string(), "text")
        .unwrap()
        .add_modifiers(["private", "final"])
        .unwrap();
    enterprise
        .add_field(number(), "number")
        .unwrap()
        .add_modifiers(["private", "final"])
        .unwrap();
    enterprise
        .add_constructor()
        .unwrap()
        .add_modifier(Modifier::Public)
        .add_parameter(string(), "text")
        .unwrap()
        .add_parameter(number(), "number")
        .unwrap()
        .add_statement("this.text = text")
        .add_statement("this.number = number");
    enterprise
        .add_method(string(), "get")
        .unwrap()
        .add_annotation(Annotation::of("java.lang.Override").unwrap())
        .add_modifier(Modifier::Public)
        .add_statement("return text + '-' + number");

    let source = unit.source_file().unwrap();
    assert_eq!(source.name(), &Name::parse("uss.Enterprise").unwrap());
    insta::assert_snapshot!("enterprise", source.text());
}

#[test]
fn test_processed() {
    let mark = Annotation::of("com.example.Counter.Mark").unwrap();
    let mut unit = JavaUnit::new("test").unwrap();
    unit.imports_mut()
        .add_single_type_import(Name::parse("com.example.Counter").unwrap())
        .unwrap();
    let class = unit.declare_class("Class").unwrap();
    class.add_modifier(Modifier::Public);
    for field in ["field1", "field2"] {
        class
            .add_field(ClassType::object(), field)
            .unwrap()
            .add_annotation(mark.clone());
    }
    insta::assert_snapshot!("processed", unit.list());
}

#[test]
fn test_enum_without_constants() {
    let mut unit = JavaUnit::new("abc").unwrap();
    let level = unit.declare_enum("Level").unwrap();
    level.add_modifier(Modifier::Public);
    level
        .add_field(JavaType::int(), "rank")
        .unwrap()
        .add_modifiers(["private", "final"])
        .unwrap();
    level
        .add_constructor()
        .unwrap()
        .add_parameter(JavaType::int(), "rank")
        .unwrap()
        .add_statement("this.rank = rank");
    level.declare_interface("Listener").unwrap();
    insta::assert_snapshot!("enum_without_constants", unit.list());
}
