//! Snapshot tests for units mirrored from descriptor fixtures.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use listing_core::{Name, Renderable};
use listing_java::TypeKind;
use listing_mirror::{Error, mirror_json};

const INVENTORY: &str = include_str!("fixtures/inventory.json");

#[test]
fn inventory() {
    let unit = mirror_json(INVENTORY).unwrap();
    insta::assert_snapshot!("inventory", unit.list());
}

#[test]
fn inventory_declarations() {
    let unit = mirror_json(INVENTORY).unwrap();
    assert_eq!(unit.declarations().len(), 1);

    let state = unit.find(&Name::parse("shop.Inventory.State").unwrap()).unwrap();
    assert_eq!(state.kind(), TypeKind::Enum);
    assert_eq!(state.constants().len(), 2);

    let listener = unit
        .find(&Name::parse("shop.Inventory.Listener").unwrap())
        .unwrap();
    assert_eq!(listener.kind(), TypeKind::Interface);
    assert_eq!(listener.members().len(), 1);
}

#[test]
fn mirrored_listing_is_deterministic() {
    let first = mirror_json(INVENTORY).unwrap().list();
    let second = mirror_json(INVENTORY).unwrap().list();
    assert_eq!(first, second);
}

#[test]
fn type_syntax_errors_carry_the_offending_text() {
    let err = mirror_json(r#"[{ "name": "abc.A", "interfaces": ["java.util.List<"] }]"#)
        .unwrap_err();
    let Error::TypeSyntax { src, span, .. } = err else {
        panic!("expected a type syntax error, got {err:?}");
    };
    assert_eq!(src.inner(), "java.util.List<");
    assert_eq!(span.offset(), 15);
}

#[test]
fn rejects_invalid_identifiers() {
    let text = r#"[{ "name": "abc.A", "fields": [{ "name": "class", "type": "int" }] }]"#;
    let err = mirror_json(text).unwrap_err();
    assert!(matches!(err, Error::Listing(_)));
}
