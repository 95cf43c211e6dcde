//! Collision handling and import ordering across many shapes of input.

use rstest::rstest;

use classgen::base::QualifiedName;
use classgen::config::PackConfig;
use classgen::pack::{pack, pack_with};
use classgen::tree::{CompilationUnit, ImportEntry, TypeDecl, TypeRef};

fn name(text: &str) -> QualifiedName {
    QualifiedName::parse(text).unwrap()
}

/// A unit whose single class has one field per type, in order.
fn unit_with_fields(package: &str, types: &[&str]) -> CompilationUnit {
    let decl = types
        .iter()
        .enumerate()
        .fold(TypeDecl::class("Subject"), |decl, (i, ty)| {
            decl.field(format!("f{i}"), TypeRef::parse(ty).unwrap())
        });
    CompilationUnit::new(Some(name(package))).with_type(decl)
}

fn field_types(unit: &CompilationUnit) -> Vec<String> {
    unit.types[0].fields().map(|f| f.ty.to_string()).collect()
}

fn import_names(unit: &CompilationUnit) -> Vec<&str> {
    unit.imports.iter().map(|i| i.name.as_str()).collect()
}

#[rstest]
#[case(&["com.a.Foo", "com.b.Foo"], &["Foo", "com.b.Foo"], &["com.a.Foo"])]
#[case(&["com.b.Foo", "com.a.Foo"], &["Foo", "com.a.Foo"], &["com.b.Foo"])]
#[case(
    &["x.Foo", "y.Foo", "z.Foo", "x.Foo"],
    &["Foo", "y.Foo", "z.Foo", "Foo"],
    &["x.Foo"]
)]
#[case(
    &["a.List<b.Foo>", "c.Foo", "d.List"],
    &["List<Foo>", "c.Foo", "d.List"],
    &["a.List", "b.Foo"]
)]
#[case(
    &["a.Map<c.Foo, b.Foo>", "b.Foo"],
    &["Map<Foo, b.Foo>", "b.Foo"],
    &["a.Map", "c.Foo"]
)]
fn test_first_visited_wins(
    #[case] types: &[&str],
    #[case] expected_fields: &[&str],
    #[case] expected_imports: &[&str],
) {
    let mut unit = unit_with_fields("p", types);
    pack(&mut unit);

    assert_eq!(field_types(&unit), expected_fields);
    assert_eq!(import_names(&unit), expected_imports);
}

#[rstest]
#[case("java.lang.String", "String", true)]
#[case("java.lang.Integer", "Integer", true)]
#[case("java.lang.reflect.Method", "Method", false)]
#[case("java.lang.annotation.Retention", "Retention", false)]
#[case("p.Local", "Local", true)]
#[case("p.sub.Deeper", "Deeper", false)]
fn test_implicit_namespaces(#[case] ty: &str, #[case] short: &str, #[case] implicit: bool) {
    let mut unit = unit_with_fields("p", &[ty]);
    pack(&mut unit);

    assert_eq!(field_types(&unit), vec![short]);
    assert_eq!(unit.imports.is_empty(), implicit);
}

#[rstest]
#[case("kotlin", "kotlin.String", true)]
#[case("kotlin", "java.lang.String", false)]
#[case("System", "System.Console", true)]
fn test_configurable_builtin_namespace(
    #[case] builtin: &str,
    #[case] ty: &str,
    #[case] implicit: bool,
) {
    let mut unit = unit_with_fields("app", &[ty]);
    let config = PackConfig::default().with_builtin_namespace(name(builtin));
    pack_with(&mut unit, &config);

    assert_eq!(unit.imports.is_empty(), implicit);
}

#[test]
fn test_import_order_is_ordinal() {
    let mut unit = unit_with_fields(
        "p",
        &["org.Zeta", "com.beta.Alpha", "com.Beta.Gamma", "Com.x.Delta", "com.beta.alpha.Eps"],
    );
    pack(&mut unit);

    assert_eq!(
        import_names(&unit),
        vec![
            "Com.x.Delta",
            "com.Beta.Gamma",
            "com.beta.Alpha",
            "com.beta.alpha.Eps",
            "org.Zeta",
        ]
    );
}

#[test]
fn test_generated_imports_are_strictly_ascending_and_unique() {
    let mut unit = unit_with_fields(
        "p",
        &[
            "b.One", "a.Two", "c.One", "a.Three", "b.Two", "d.Four<a.Two, e.Four>", "f.Five[]",
        ],
    );
    pack(&mut unit);

    let names = import_names(&unit);
    assert!(names.windows(2).all(|w| w[0] < w[1]), "{names:?}");

    let mut simple: Vec<_> = unit.imports.iter().map(|i| i.name.simple_str()).collect();
    simple.sort_unstable();
    simple.dedup();
    assert_eq!(simple.len(), unit.imports.len());
}

#[test]
fn test_existing_import_beats_generated_reference() {
    let mut unit = unit_with_fields("p", &["java.util.Date"])
        .with_import(ImportEntry::single(name("java.sql.Date")));
    pack(&mut unit);

    assert_eq!(field_types(&unit), vec!["java.util.Date"]);
    assert_eq!(import_names(&unit), vec!["java.sql.Date"]);
}

#[test]
fn test_wildcard_import_does_not_claim_names() {
    let mut unit = unit_with_fields("p", &["java.util.List"])
        .with_import(ImportEntry::wildcard(name("java.awt")));
    pack(&mut unit);

    assert_eq!(field_types(&unit), vec!["List"]);
    assert_eq!(import_names(&unit), vec!["java.awt", "java.util.List"]);
    assert!(unit.imports[0].is_wildcard);
}

#[test]
fn test_static_import_does_not_claim_names() {
    let mut unit = unit_with_fields("p", &["a.Util"])
        .with_import(ImportEntry::static_member(name("b.Util")));
    pack(&mut unit);

    assert_eq!(field_types(&unit), vec!["Util"]);
    assert_eq!(import_names(&unit), vec!["b.Util", "a.Util"]);
}
