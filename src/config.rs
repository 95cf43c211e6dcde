//! Generator configuration — built once, shared by reference.
//!
//! [`PackConfig`] carries the target language's built-in namespace, the
//! behaviour switches of import resolution and the model type-code table.
//! It is an ordinary immutable value: build it at startup and pass `&config`
//! to whatever needs it, including worker threads.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::QualifiedName;
use crate::tree::TypeRef;

/// Lookup table from model type codes (`string`, `date`, ...) to the
/// qualified names generators should emit for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeCodes {
    codes: IndexMap<SmolStr, QualifiedName>,
}

impl TypeCodes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table for the Java target.
    pub fn java() -> Self {
        const JAVA: &[(&str, &str)] = &[
            ("string", "java.lang.String"),
            ("boolean", "java.lang.Boolean"),
            ("integer", "java.lang.Integer"),
            ("long", "java.lang.Long"),
            ("float", "java.lang.Float"),
            ("double", "java.lang.Double"),
            ("decimal", "java.math.BigDecimal"),
            ("biginteger", "java.math.BigInteger"),
            ("date", "java.time.LocalDate"),
            ("datetime", "java.time.LocalDateTime"),
            ("time", "java.time.LocalTime"),
            ("uuid", "java.util.UUID"),
            ("list", "java.util.List"),
            ("set", "java.util.Set"),
            ("map", "java.util.Map"),
            ("binary", "java.nio.ByteBuffer"),
        ];
        let codes = JAVA
            .iter()
            .map(|&(code, name)| (SmolStr::new(code), QualifiedName::from_trusted(name)))
            .collect();
        Self { codes }
    }

    /// Add or replace a mapping.
    pub fn with(mut self, code: impl Into<SmolStr>, name: QualifiedName) -> Self {
        self.codes.insert(code.into(), name);
        self
    }

    /// Look up the qualified name for a type code.
    pub fn get(&self, code: &str) -> Option<&QualifiedName> {
        self.codes.get(code)
    }

    /// Iterate over all mappings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QualifiedName)> {
        self.codes.iter().map(|(code, name)| (code.as_str(), name))
    }

    /// Get the number of mappings.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Configuration for import resolution and type construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackConfig {
    /// Namespace whose members are visible without an import.
    pub builtin_namespace: QualifiedName,
    /// Shorten references in `throws` lists.
    pub rewrite_throws: bool,
    /// Treat `Outer$Inner` as the nested type `Outer.Inner`.
    pub nested_names: bool,
    /// Never shorten a foreign type to a name this unit declares itself.
    pub reserve_declared_names: bool,
    /// Model type-code table.
    pub type_codes: TypeCodes,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            builtin_namespace: QualifiedName::from_trusted("java.lang"),
            rewrite_throws: true,
            nested_names: true,
            reserve_declared_names: false,
            type_codes: TypeCodes::java(),
        }
    }
}

impl PackConfig {
    /// Default configuration for the Java target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the built-in namespace.
    pub fn with_builtin_namespace(mut self, namespace: QualifiedName) -> Self {
        self.builtin_namespace = namespace;
        self
    }

    /// Enable or disable rewriting of `throws` lists.
    pub fn with_rewrite_throws(mut self, enabled: bool) -> Self {
        self.rewrite_throws = enabled;
        self
    }

    /// Enable or disable nested-name canonicalization.
    pub fn with_nested_names(mut self, enabled: bool) -> Self {
        self.nested_names = enabled;
        self
    }

    /// Enable or disable reserving declared type names.
    pub fn with_reserve_declared_names(mut self, enabled: bool) -> Self {
        self.reserve_declared_names = enabled;
        self
    }

    /// Replace the type-code table.
    pub fn with_type_codes(mut self, codes: TypeCodes) -> Self {
        self.type_codes = codes;
        self
    }

    /// Whether `name` lives in the built-in namespace.
    pub fn is_builtin(&self, name: &QualifiedName) -> bool {
        name.is_in_namespace(&self.builtin_namespace)
    }

    /// Build a fully qualified reference for a model type code.
    ///
    /// `args` become the generic arguments, in order.
    pub fn type_ref_for_code(
        &self,
        code: &str,
        args: impl IntoIterator<Item = TypeRef>,
    ) -> Option<TypeRef> {
        let name = self.type_codes.get(code)?;
        Some(
            args.into_iter()
                .fold(TypeRef::new(name.clone()), TypeRef::with_arg),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PackConfig::default();
        assert_eq!(config.builtin_namespace.as_str(), "java.lang");
        assert!(config.rewrite_throws);
        assert!(config.nested_names);
        assert!(!config.reserve_declared_names);
        assert!(!config.type_codes.is_empty());
    }

    #[test]
    fn test_java_type_codes_are_valid_names() {
        for (code, name) in TypeCodes::java().iter() {
            assert_eq!(
                QualifiedName::parse(name.as_str()).as_ref(),
                Ok(name),
                "type code '{code}'"
            );
        }
    }

    #[test]
    fn test_is_builtin() {
        let config = PackConfig::default();
        assert!(config.is_builtin(&QualifiedName::parse("java.lang.String").unwrap()));
        assert!(!config.is_builtin(&QualifiedName::parse("java.lang.annotation.Target").unwrap()));
    }

    #[test]
    fn test_type_ref_for_code() {
        let config = PackConfig::default();
        let string = config.type_ref_for_code("string", []).unwrap();
        let list = config.type_ref_for_code("list", [string]).unwrap();
        assert_eq!(list.to_string(), "java.util.List<java.lang.String>");
        assert!(config.type_ref_for_code("unknown", []).is_none());
    }

    #[test]
    fn test_custom_type_codes() {
        let codes = TypeCodes::new().with("money", QualifiedName::parse("org.joda.Money").unwrap());
        let config = PackConfig::new().with_type_codes(codes);
        assert_eq!(config.type_codes.len(), 1);
        assert_eq!(
            config.type_ref_for_code("money", []).unwrap().to_string(),
            "org.joda.Money"
        );
        assert!(config.type_ref_for_code("string", []).is_none());
    }
}
