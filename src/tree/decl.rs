//! Declarations: types, fields, methods and their parameters.

use smol_str::SmolStr;

use super::types::TypeRef;

/// Kind of a type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// A declared generic type parameter: `T extends Comparable<T>`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeParam {
    pub name: SmolStr,
    pub bounds: Vec<TypeRef>,
}

impl TypeParam {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded_by(mut self, bound: TypeRef) -> Self {
        self.bounds.push(bound);
        self
    }
}

/// A type declaration (class, interface, enum or annotation type).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    pub kind: TypeKind,
    pub name: SmolStr,
    pub annotations: Vec<TypeRef>,
    pub type_params: Vec<TypeParam>,
    /// Superclass for classes; super-interfaces for interfaces.
    pub extends: Vec<TypeRef>,
    pub implements: Vec<TypeRef>,
    pub members: Vec<Member>,
}

/// A member of a type declaration, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Type(TypeDecl),
}

/// A field declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDecl {
    pub name: SmolStr,
    pub annotations: Vec<TypeRef>,
    pub ty: TypeRef,
}

/// A method or constructor declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDecl {
    pub name: SmolStr,
    pub annotations: Vec<TypeRef>,
    pub type_params: Vec<TypeParam>,
    /// `None` for `void` methods and constructors.
    pub return_type: Option<TypeRef>,
    pub params: Vec<ParamDecl>,
    pub throws: Vec<TypeRef>,
    pub is_constructor: bool,
}

/// A method parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamDecl {
    pub name: SmolStr,
    pub annotations: Vec<TypeRef>,
    pub ty: TypeRef,
}

impl TypeDecl {
    pub fn new(kind: TypeKind, name: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            name: name.into(),
            annotations: Vec::new(),
            type_params: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn class(name: impl Into<SmolStr>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    pub fn interface(name: impl Into<SmolStr>) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    pub fn annotated(mut self, annotation: TypeRef) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn extends(mut self, ty: TypeRef) -> Self {
        self.extends.push(ty);
        self
    }

    pub fn implements(mut self, ty: TypeRef) -> Self {
        self.implements.push(ty);
        self
    }

    pub fn field(mut self, name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        self.members.push(Member::Field(FieldDecl::new(name, ty)));
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn method(self, method: MethodDecl) -> Self {
        self.member(Member::Method(method))
    }

    pub fn nested(self, decl: TypeDecl) -> Self {
        self.member(Member::Type(decl))
    }

    /// Iterate over the fields of this declaration (not of nested types).
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Iterate over the methods of this declaration (not of nested types).
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }
}

impl FieldDecl {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            ty,
        }
    }
}

impl MethodDecl {
    /// A `void` method with no parameters.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            type_params: Vec::new(),
            return_type: None,
            params: Vec::new(),
            throws: Vec::new(),
            is_constructor: false,
        }
    }

    pub fn constructor(name: impl Into<SmolStr>) -> Self {
        Self {
            is_constructor: true,
            ..Self::new(name)
        }
    }

    pub fn annotated(mut self, annotation: TypeRef) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn param(mut self, name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        self.params.push(ParamDecl {
            name: name.into(),
            annotations: Vec::new(),
            ty,
        });
        self
    }

    pub fn throws(mut self, ty: TypeRef) -> Self {
        self.throws.push(ty);
        self
    }
}
