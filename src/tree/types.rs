//! Type references — every place a type is *used* in a compilation unit.

use std::fmt;

use crate::base::QualifiedName;

/// A use of a type: field type, return type, parameter type, generic
/// argument, supertype clause, annotation, or thrown exception.
///
/// The name is either simple (`List`) or qualified (`java.util.List`).
/// Import resolution rewrites the name in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    /// The referenced type's name.
    pub name: QualifiedName,
    /// Generic arguments, in source order.
    pub args: Vec<TypeArg>,
    /// Number of trailing `[]`.
    pub array_dims: u8,
}

/// A generic argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeArg {
    /// A concrete type argument: `List<String>`.
    Type(TypeRef),
    /// A wildcard, optionally bounded: `?`, `? extends T`, `? super T`.
    Wildcard(Option<WildcardBound>),
}

/// Bound of a wildcard generic argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildcardBound {
    pub kind: BoundKind,
    pub ty: Box<TypeRef>,
}

/// Direction of a wildcard bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundKind {
    Extends,
    Super,
}

impl TypeRef {
    /// A reference with no generic arguments.
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            args: Vec::new(),
            array_dims: 0,
        }
    }

    /// Add a concrete generic argument.
    pub fn with_arg(mut self, arg: TypeRef) -> Self {
        self.args.push(TypeArg::Type(arg));
        self
    }

    /// Add an unbounded wildcard argument (`?`).
    pub fn with_wildcard(mut self) -> Self {
        self.args.push(TypeArg::Wildcard(None));
        self
    }

    /// Add a bounded wildcard argument (`? extends T` / `? super T`).
    pub fn with_bounded_wildcard(mut self, kind: BoundKind, ty: TypeRef) -> Self {
        self.args.push(TypeArg::Wildcard(Some(WildcardBound {
            kind,
            ty: Box::new(ty),
        })));
        self
    }

    /// Make this an array type with one more dimension.
    pub fn array(mut self) -> Self {
        self.array_dims = self.array_dims.saturating_add(1);
        self
    }

    /// Iterate over the type references nested directly in the generic
    /// arguments (concrete arguments and wildcard bounds), left to right.
    pub fn arg_refs(&self) -> impl Iterator<Item = &TypeRef> {
        self.args.iter().filter_map(TypeArg::type_ref)
    }
}

impl TypeArg {
    /// The type reference carried by this argument, if any.
    pub fn type_ref(&self) -> Option<&TypeRef> {
        match self {
            TypeArg::Type(ty) => Some(ty),
            TypeArg::Wildcard(Some(bound)) => Some(&bound.ty),
            TypeArg::Wildcard(None) => None,
        }
    }

    /// Mutable access to the type reference carried by this argument.
    pub fn type_ref_mut(&mut self) -> Option<&mut TypeRef> {
        match self {
            TypeArg::Type(ty) => Some(ty),
            TypeArg::Wildcard(Some(bound)) => Some(&mut bound.ty),
            TypeArg::Wildcard(None) => None,
        }
    }
}

impl From<QualifiedName> for TypeRef {
    fn from(name: QualifiedName) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        for _ in 0..self.array_dims {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArg::Type(ty) => write!(f, "{ty}"),
            TypeArg::Wildcard(None) => f.write_str("?"),
            TypeArg::Wildcard(Some(bound)) => {
                let keyword = match bound.kind {
                    BoundKind::Extends => "extends",
                    BoundKind::Super => "super",
                };
                write!(f, "? {keyword} {}", bound.ty)
            }
        }
    }
}
