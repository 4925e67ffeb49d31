//! Indentation configuration for listings.

use serde::Deserialize;

/// Indentation style for rendered source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndentRepr")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation.
    pub const TWO: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const FOUR: Self = Self::Spaces(4);

    /// Append `depth` indentation units to `buffer`.
    pub fn write(&self, buffer: &mut String, depth: usize) {
        for _ in 0..depth {
            match self {
                Self::Spaces(width) => {
                    buffer.extend(std::iter::repeat_n(' ', usize::from(*width)));
                }
                Self::Tab => buffer.push('\t'),
            }
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO
    }
}

/// Accepted configuration spellings: `indent = 4` or `indent = "tab"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Width(u8),
    Keyword(String),
}

impl TryFrom<IndentRepr> for Indent {
    type Error = String;

    fn try_from(repr: IndentRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentRepr::Width(width) => Ok(Self::Spaces(width)),
            IndentRepr::Keyword(keyword) if keyword == "tab" => Ok(Self::Tab),
            IndentRepr::Keyword(other) => Err(format!(
                "expected a width or \"tab\" for indent, found \"{other}\""
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(indent: Indent, depth: usize) -> String {
        let mut buffer = String::new();
        indent.write(&mut buffer, depth);
        buffer
    }

    #[test]
    fn test_indent_write() {
        assert_eq!(render(Indent::Spaces(2), 1), "  ");
        assert_eq!(render(Indent::Spaces(4), 2), "        ");
        assert_eq!(render(Indent::Spaces(3), 1), "   ");
        assert_eq!(render(Indent::Tab, 2), "\t\t");
        assert_eq!(render(Indent::Tab, 0), "");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TWO);
    }
}
