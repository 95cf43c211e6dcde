//! Parsing type text (`java.util.Map<K, ? extends V>[]`) into a [`TypeRef`].
//!
//! Generators describe types as text; this turns that text into the tree form
//! import resolution works on.

use std::str::FromStr;

use thiserror::Error;

use crate::base::{NameError, QualifiedName};

use super::types::{BoundKind, TypeRef};

/// Errors raised while parsing type text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    /// The text ended where more input was required.
    #[error("unexpected end of type '{text}'")]
    UnexpectedEnd { text: String },

    /// A character that does not fit the grammar at this point.
    #[error("unexpected '{found}' at offset {offset} in type '{text}'")]
    Unexpected {
        text: String,
        offset: usize,
        found: char,
    },

    /// A name inside the type text is malformed.
    #[error(transparent)]
    Name(#[from] NameError),
}

impl TypeRef {
    /// Parse type text into a reference.
    pub fn parse(text: &str) -> Result<Self, TypeParseError> {
        let mut parser = TypeParser { text, pos: 0 };
        let ty = parser.type_ref()?;
        parser.skip_ws();
        match parser.peek() {
            None => Ok(ty),
            Some(found) => Err(parser.unexpected(found)),
        }
    }
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct TypeParser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.bump(c);
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump(expected);
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeParseError> {
        if self.eat(expected) {
            return Ok(());
        }
        match self.peek() {
            Some(found) => Err(self.unexpected(found)),
            None => Err(self.end()),
        }
    }

    fn unexpected(&self, found: char) -> TypeParseError {
        TypeParseError::Unexpected {
            text: self.text.to_string(),
            offset: self.pos,
            found,
        }
    }

    fn end(&self) -> TypeParseError {
        TypeParseError::UnexpectedEnd {
            text: self.text.to_string(),
        }
    }

    /// Consume a run of name characters (identifier parts and dots).
    fn word(&mut self) -> &'a str {
        self.skip_ws();
        let text = self.text;
        let start = self.pos;
        while let Some(c) = self
            .peek()
            .filter(|c| !c.is_whitespace() && !matches!(c, '<' | '>' | ',' | '[' | ']' | '?'))
        {
            self.bump(c);
        }
        &text[start..self.pos]
    }

    fn type_ref(&mut self) -> Result<TypeRef, TypeParseError> {
        let word = self.word();
        if word.is_empty() {
            return Err(match self.peek() {
                Some(found) => self.unexpected(found),
                None => self.end(),
            });
        }
        let mut ty = TypeRef::new(QualifiedName::parse(word)?);

        if self.eat('<') {
            loop {
                ty = self.type_arg(ty)?;
                if self.eat(',') {
                    continue;
                }
                self.expect('>')?;
                break;
            }
        }

        while self.eat('[') {
            self.expect(']')?;
            ty = ty.array();
        }
        Ok(ty)
    }

    fn type_arg(&mut self, owner: TypeRef) -> Result<TypeRef, TypeParseError> {
        if !self.eat('?') {
            let arg = self.type_ref()?;
            return Ok(owner.with_arg(arg));
        }

        self.skip_ws();
        if matches!(self.peek(), Some(',' | '>') | None) {
            return Ok(owner.with_wildcard());
        }
        let offset = self.pos;
        let kind = match self.word() {
            "extends" => BoundKind::Extends,
            "super" => BoundKind::Super,
            _ => {
                self.pos = offset;
                return Err(match self.peek() {
                    Some(found) => self.unexpected(found),
                    None => self.end(),
                });
            }
        };
        let bound = self.type_ref()?;
        Ok(owner.with_bounded_wildcard(kind, bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TypeArg;

    #[test]
    fn test_parse_simple_and_qualified() {
        let ty = TypeRef::parse("java.util.List").unwrap();
        assert_eq!(ty.name.as_str(), "java.util.List");
        assert!(ty.args.is_empty());

        let ty = TypeRef::parse(" T ").unwrap();
        assert!(ty.name.is_simple());
    }

    #[test]
    fn test_parse_nested_generics() {
        let ty: TypeRef = "ns1.List<ns2.Map<ns2.String, ns1.List<T>>>".parse().unwrap();
        assert_eq!(ty.to_string(), "ns1.List<ns2.Map<ns2.String, ns1.List<T>>>");
        let TypeArg::Type(map) = &ty.args[0] else {
            panic!("expected a concrete argument");
        };
        assert_eq!(map.args.len(), 2);
    }

    #[test]
    fn test_parse_wildcards_and_arrays() {
        let ty = TypeRef::parse("a.Foo<?, ? extends b.Bar, ? super C>[][]").unwrap();
        assert_eq!(ty.array_dims, 2);
        assert_eq!(ty.to_string(), "a.Foo<?, ? extends b.Bar, ? super C>[][]");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            TypeRef::parse("a.List<"),
            Err(TypeParseError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            TypeRef::parse("a.List<b.C"),
            Err(TypeParseError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            TypeRef::parse("a.List>"),
            Err(TypeParseError::Unexpected { found: '>', .. })
        ));
        assert!(matches!(
            TypeRef::parse("a.Foo<? within B>"),
            Err(TypeParseError::Unexpected { found: 'w', .. })
        ));
        assert!(matches!(
            TypeRef::parse("a..B"),
            Err(TypeParseError::Name(NameError::EmptySegment { .. }))
        ));
        assert!(matches!(
            TypeRef::parse(""),
            Err(TypeParseError::UnexpectedEnd { .. })
        ));
    }
}
