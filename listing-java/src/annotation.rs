//! Annotations and their element values.

use indexmap::IndexMap;
use listing_core::{
    Listing, Name, Renderable, Result,
    literal::{quote, quote_char},
    naming::check_identifier,
};

use crate::{ClassType, JavaType};

/// Element name that may be omitted when it is the only one.
const VALUE: &str = "value";

/// An annotation: a type name plus element values.
///
/// Elements keep insertion order. Several values given for one element
/// render as an array initializer.
///
/// # Example
///
/// ```
/// use listing_core::Renderable;
/// use listing_java::Annotation;
///
/// let generated = Annotation::of("javax.annotation.Generated")
///     .unwrap()
///     .value("https://")
///     .value("github.com/sormuras/listing");
/// assert_eq!(
///     generated.list(),
///     "@javax.annotation.Generated({\"https://\", \"github.com/sormuras/listing\"})"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    name: Name,
    elements: IndexMap<String, Vec<Value>>,
}

impl Annotation {
    /// Create a marker annotation.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            elements: IndexMap::new(),
        }
    }

    /// Create a marker annotation from a canonical name.
    pub fn of(canonical: &str) -> Result<Self> {
        Ok(Self::new(Name::parse(canonical)?))
    }

    /// Add a value to the `value` element.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.push(VALUE.to_string(), value.into());
        self
    }

    /// Add a value to the element called `name`.
    pub fn element(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
        check_identifier(name, "an annotation element")?;
        self.push(name.to_string(), value.into());
        Ok(self)
    }

    fn push(&mut self, element: String, value: Value) {
        self.elements.entry(element).or_default().push(value);
    }

    /// The annotation type name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Values of one element.
    pub fn values(&self, element: &str) -> Option<&[Value]> {
        self.elements.get(element).map(Vec::as_slice)
    }

    /// Iterate over elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.elements.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Check if this is a marker annotation without elements.
    pub fn is_marker(&self) -> bool {
        self.elements.is_empty()
    }
}

fn render_values(listing: &mut Listing<'_>, values: &[Value]) {
    match values {
        [single] => {
            listing.emit(single);
        }
        many => {
            listing.push_char('{').emit_joined(many, ", ").push_char('}');
        }
    }
}

impl Renderable for Annotation {
    fn render(&self, listing: &mut Listing<'_>) {
        listing.push_char('@').push_name(&self.name);
        if self.elements.is_empty() {
            return;
        }
        listing.push_char('(');
        match self.elements.get(VALUE) {
            Some(values) if self.elements.len() == 1 => render_values(listing, values),
            _ => {
                for (i, (element, values)) in self.elements.iter().enumerate() {
                    if i > 0 {
                        listing.push_raw(", ");
                    }
                    listing.push_raw(element).push_char('=');
                    render_values(listing, values);
                }
            }
        }
        listing.push_char(')');
    }
}

/// A constant value, used for annotation elements and field initializers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Source text emitted verbatim.
    Raw(String),
    /// A string literal, escaped on rendering.
    String(String),
    Char(char),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    /// A class literal: `java.lang.String.class`. Built with [`Value::class`].
    Class(JavaType),
    /// An enum constant: `java.lang.annotation.ElementType.FIELD`.
    EnumConstant(ClassType, String),
    Annotation(Box<Annotation>),
    Array(Vec<Value>),
}

impl Value {
    /// Create a verbatim source text value.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Create a class literal. Wildcards have no class literal.
    pub fn class(ty: impl Into<JavaType>) -> Result<Self> {
        let ty = ty.into();
        ty.check_not_wildcard("a class literal")?;
        Ok(Self::Class(ty))
    }

    /// Create an enum constant reference.
    pub fn enum_constant(enum_type: ClassType, constant: &str) -> Result<Self> {
        check_identifier(constant, "an enum constant")?;
        Ok(Self::EnumConstant(enum_type, constant.to_string()))
    }
}

fn render_float(listing: &mut Listing<'_>, boxed: &str, value: f64, suffix: &str) {
    if value.is_nan() {
        listing.push_raw(boxed).push_raw(".NaN");
    } else if value.is_infinite() {
        let constant = if value > 0.0 {
            ".POSITIVE_INFINITY"
        } else {
            ".NEGATIVE_INFINITY"
        };
        listing.push_raw(boxed).push_raw(constant);
    } else {
        listing.push_raw(&format!("{value:?}{suffix}"));
    }
}

impl Renderable for Value {
    fn render(&self, listing: &mut Listing<'_>) {
        match self {
            Self::Raw(text) => {
                listing.push_raw(text);
            }
            Self::String(s) => {
                listing.push_raw(&quote(s));
            }
            Self::Char(c) => {
                listing.push_raw(&quote_char(*c));
            }
            Self::Int(i) => {
                listing.push_raw(&i.to_string());
            }
            Self::Long(l) => {
                listing.push_raw(&format!("{l}L"));
            }
            Self::Float(f) => {
                // format the f32 itself so the shortest round-trip digits are used
                if f.is_finite() {
                    listing.push_raw(&format!("{f:?}F"));
                } else {
                    render_float(listing, "Float", f64::from(*f), "F");
                }
            }
            Self::Double(d) => render_float(listing, "Double", *d, ""),
            Self::Boolean(b) => {
                listing.push_raw(if *b { "true" } else { "false" });
            }
            Self::Class(ty) => {
                listing.emit(ty).push_raw(".class");
            }
            Self::EnumConstant(ty, constant) => {
                listing.emit(ty).push_char('.').push_raw(constant);
            }
            Self::Annotation(annotation) => {
                listing.emit(annotation.as_ref());
            }
            Self::Array(values) => {
                listing.push_char('{').emit_joined(values, ", ").push_char('}');
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<i64> for Value {
    fn from(l: i64) -> Self {
        Self::Long(l)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Annotation> for Value {
    fn from(annotation: Annotation) -> Self {
        Self::Annotation(Box::new(annotation))
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(values)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_marker() {
        let annotation = Annotation::of("java.lang.Override").unwrap();
        assert!(annotation.is_marker());
        assert_eq!(annotation.list(), "@java.lang.Override");
    }

    #[test]
    fn test_single_value() {
        let annotation = Annotation::of("Tag").unwrap().value("An enum for testing");
        assert_eq!(annotation.list(), "@Tag(\"An enum for testing\")");
    }

    #[test]
    fn test_named_elements_keep_order() {
        let annotation = Annotation::of("Range")
            .unwrap()
            .element("to", 9)
            .unwrap()
            .element("from", 1)
            .unwrap();
        assert_eq!(annotation.list(), "@Range(to=9, from=1)");
    }

    #[test]
    fn test_value_named_when_not_alone() {
        let annotation = Annotation::of("Tag")
            .unwrap()
            .value(1)
            .element("flag", true)
            .unwrap();
        assert_eq!(annotation.list(), "@Tag(value=1, flag=true)");
    }

    #[test]
    fn test_array_element() {
        let annotation = Annotation::of("Tag")
            .unwrap()
            .element("names", "a")
            .unwrap()
            .element("names", "b")
            .unwrap();
        assert_eq!(annotation.list(), "@Tag(names={\"a\", \"b\"})");
        assert_eq!(annotation.values("names").map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_rejects_illegal_element_name() {
        assert!(Annotation::of("Tag").unwrap().element("class", 1).is_err());
    }

    #[test]
    fn test_values() {
        assert_eq!(Value::from('\n').list(), "'\\n'");
        assert_eq!(Value::from(4711i64).list(), "4711L");
        assert_eq!(Value::from(1.5f32).list(), "1.5F");
        assert_eq!(Value::from(2.0f64).list(), "2.0");
        assert_eq!(Value::from(f64::NAN).list(), "Double.NaN");
        assert_eq!(Value::from(f32::NEG_INFINITY).list(), "Float.NEGATIVE_INFINITY");
        assert_eq!(
            Value::raw("java.util.Collections.emptyList()").list(),
            "java.util.Collections.emptyList()"
        );
        assert_eq!(
            Value::class(JavaType::class("java.lang.String").unwrap()).unwrap().list(),
            "java.lang.String.class"
        );
        assert_eq!(Value::class(JavaType::int()).unwrap().list(), "int.class");
        assert!(matches!(
            Value::class(JavaType::wildcard()),
            Err(listing_core::Error::MisplacedWildcard { .. })
        ));
        let target = ClassType::of("java.lang.annotation.ElementType").unwrap();
        assert_eq!(
            Value::enum_constant(target, "FIELD").unwrap().list(),
            "java.lang.annotation.ElementType.FIELD"
        );
        let nested = Value::from(Annotation::of("Tag").unwrap());
        assert_eq!(Value::from(vec![nested, Value::from(1)]).list(), "{@Tag, 1}");
    }
}
