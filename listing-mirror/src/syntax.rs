//! A small parser for type-uses written in source syntax.

use listing_core::Name;
use listing_java::{ClassType, JavaType, PrimitiveType, TypeVariable, WildcardType};

use crate::{Error, Result};

/// Parse a type-use such as `java.util.Map<K, ? super V>[]`.
///
/// Single identifiers found in `variables` denote type variables; every
/// other name is a class or interface type. Dotted names containing `$`
/// are read as binary names.
///
/// # Example
///
/// ```
/// use listing_core::Renderable;
/// use listing_mirror::parse_type;
///
/// let ty = parse_type("java.util.List<? extends T>[]", &["T"]).unwrap();
/// assert_eq!(ty.list(), "java.util.List<? extends T>[]");
/// ```
pub fn parse_type(text: &str, variables: &[&str]) -> Result<JavaType> {
    let mut parser = TypeSyntaxParser::new(text, variables);
    let ty = parser.parse_type()?;
    parser.skip_whitespace();
    if !parser.is_eof() {
        return Err(parser.error("end of input"));
    }
    Ok(ty)
}

/// Parse a type-use that must be a class or interface type.
pub fn parse_class_type(text: &str, variables: &[&str], context: &str) -> Result<ClassType> {
    match parse_type(text, variables)? {
        JavaType::Class(class) => Ok(class),
        _ => Err(Error::unexpected_type(text, context)),
    }
}

struct TypeSyntaxParser<'a> {
    text: &'a str,
    pos: usize,
    variables: &'a [&'a str],
}

impl<'a> TypeSyntaxParser<'a> {
    fn new(text: &'a str, variables: &'a [&'a str]) -> Self {
        Self {
            text,
            pos: 0,
            variables,
        }
    }

    fn parse_type(&mut self) -> Result<JavaType> {
        self.skip_whitespace();
        if self.consume_if('?') {
            return self.parse_wildcard();
        }
        let ty = self.parse_named_type()?;
        self.parse_dimensions(ty)
    }

    fn parse_wildcard(&mut self) -> Result<JavaType> {
        let wildcard = if self.consume_keyword("extends") {
            WildcardType::extends(self.parse_type()?)?
        } else if self.consume_keyword("super") {
            WildcardType::super_(self.parse_type()?)?
        } else {
            WildcardType::new()
        };
        Ok(wildcard.into())
    }

    fn parse_named_type(&mut self) -> Result<JavaType> {
        let mut segments = vec![self.parse_identifier()?];
        self.skip_whitespace();
        while self.consume_if('.') {
            segments.push(self.parse_identifier()?);
            self.skip_whitespace();
        }

        if let [single] = segments.as_slice() {
            if let Some(primitive) = PrimitiveType::from_keyword(single) {
                return Ok(primitive.into());
            }
            if self.variables.contains(&single.as_str()) {
                return Ok(TypeVariable::new(single.as_str())?.into());
            }
        }

        let dotted = segments.join(".");
        let name = if dotted.contains('$') {
            Name::from_binary(&dotted)?
        } else {
            Name::parse(&dotted)?
        };
        let mut class = ClassType::new(name);
        if self.consume_if('<') {
            loop {
                let argument = self.parse_type()?;
                class.add_type_argument(argument)?;
                self.skip_whitespace();
                if self.consume_if(',') {
                    continue;
                }
                if self.consume_if('>') {
                    break;
                }
                return Err(self.error("',' or '>'"));
            }
        }
        Ok(class.into())
    }

    fn parse_dimensions(&mut self, ty: JavaType) -> Result<JavaType> {
        let mut dimensions = 0;
        loop {
            self.skip_whitespace();
            if !self.consume_if('[') {
                break;
            }
            self.skip_whitespace();
            if !self.consume_if(']') {
                return Err(self.error("']'"));
            }
            dimensions += 1;
        }
        if dimensions == 0 {
            return Ok(ty);
        }
        Ok(ty.array_of(dimensions)?)
    }

    fn parse_identifier(&mut self) -> Result<String> {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '$' {
                self.consume();
            } else {
                break;
            }
        }
        if start == self.pos {
            return Err(self.error("an identifier"));
        }
        Ok(self.text[start..self.pos].to_string())
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.consume();
            } else {
                break;
            }
        }
    }

    fn consume_keyword(&mut self, keyword: &str) -> bool {
        self.skip_whitespace();
        if !self.text[self.pos..].starts_with(keyword) {
            return false;
        }
        let end = self.pos + keyword.len();
        if let Some(next) = self.text[end..].chars().next() {
            if next.is_alphanumeric() || next == '_' || next == '$' {
                return false;
            }
        }
        self.pos = end;
        true
    }

    fn consume_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.consume();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn consume(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn error(&self, expected: &str) -> Error {
        Error::type_syntax(self.text, self.pos, expected)
    }
}
