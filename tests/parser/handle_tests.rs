//! Handle population tests.
//!
//! A call-logging handle checks exactly which capabilities each entry point
//! touches, and that failed parses touch none.

use xreflect_foundation::{DeclarationKind, ImportTable, Type};
use xreflect_parser::{
    ClassHandle, ConstructorHandle, DeclarationParser, FieldHandle, MemberHandle, MethodHandle,
    NamedHandle, NamedMemberHandle,
};

/// Records every capability call as a short string.
#[derive(Debug, Default)]
struct CallLog {
    calls: Vec<String>,
}

impl CallLog {
    fn record(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }
}

fn join(types: &[Type]) -> String {
    types.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

impl NamedHandle for CallLog {
    fn named(&mut self, segments: Vec<String>) {
        self.record(format!("named {}", segments.join("/")));
    }
}

impl ClassHandle for CallLog {
    fn in_package(&mut self, package: String) {
        self.record(format!("in_package {package}"));
    }
}

impl MemberHandle for CallLog {
    fn make_accessible(&mut self) {
        self.record("make_accessible");
    }
}

impl NamedMemberHandle for CallLog {
    fn as_static(&mut self) {
        self.record("as_static");
    }
}

impl FieldHandle for CallLog {
    fn returns(&mut self, ty: Type) {
        self.record(format!("field_type {ty}"));
    }

    fn as_final(&mut self) {
        self.record("as_final");
    }
}

impl MethodHandle for CallLog {
    fn returns(&mut self, ty: Type) {
        self.record(format!("returns {ty}"));
    }

    fn parameters(&mut self, types: Vec<Type>) {
        self.record(format!("method_parameters {}", join(&types)));
    }
}

impl ConstructorHandle for CallLog {
    fn parameters(&mut self, types: Vec<Type>) {
        self.record(format!("constructor_parameters {}", join(&types)));
    }
}

fn calls(log: &CallLog) -> Vec<&str> {
    log.calls.iter().map(String::as_str).collect()
}

#[test]
fn field_calls() {
    let log = DeclarationParser::new("private static final int x;")
        .parse_field(CallLog::default())
        .unwrap();
    assert_eq!(
        calls(&log),
        vec!["make_accessible", "as_static", "as_final", "named x", "field_type int"]
    );
}

#[test]
fn plain_field_calls() {
    let log = DeclarationParser::new("int x;")
        .parse_field(CallLog::default())
        .unwrap();
    assert_eq!(calls(&log), vec!["named x", "field_type int"]);
}

#[test]
fn method_calls() {
    let log = DeclarationParser::new("protected static long sum(int[] values);")
        .parse_method(CallLog::default())
        .unwrap();
    assert_eq!(
        calls(&log),
        vec![
            "make_accessible",
            "as_static",
            "named sum",
            "returns long",
            "method_parameters int[]"
        ]
    );
}

#[test]
fn empty_parameter_list_is_not_written() {
    let log = DeclarationParser::new("void run();")
        .parse_method(CallLog::default())
        .unwrap();
    assert_eq!(calls(&log), vec!["named run", "returns void"]);

    let log = DeclarationParser::new("public Foo();")
        .parse_constructor(CallLog::default())
        .unwrap();
    assert!(log.calls.is_empty());
}

#[test]
fn constructor_calls() {
    let log = DeclarationParser::new("private Foo Foo(String s, char c);")
        .parse_constructor(CallLog::default())
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        calls(&log),
        vec!["make_accessible", "constructor_parameters java.lang.String,char"]
    );
}

#[test]
fn class_calls() {
    let log = DeclarationParser::new("package a.b; final class Outer$Inner")
        .parse_class(CallLog::default())
        .unwrap();
    assert_eq!(calls(&log), vec!["in_package a.b", "named Outer/Inner"]);

    let log = DeclarationParser::new("enum Color")
        .parse_class(CallLog::default())
        .unwrap();
    assert_eq!(calls(&log), vec!["named Color"]);
}

#[test]
fn static_and_final_do_not_reach_constructors_or_classes() {
    let log = DeclarationParser::new("static final class Foo")
        .parse_class(CallLog::default())
        .unwrap();
    assert_eq!(calls(&log), vec!["named Foo"]);
}

#[test]
fn handle_reference_can_be_passed() {
    let mut log = CallLog::default();
    DeclarationParser::new("int x;")
        .parse_field(&mut log)
        .unwrap();
    assert_eq!(log.calls.len(), 2);
}

#[test]
fn failed_parse_leaves_handle_untouched() {
    let imports = ImportTable::new();
    let cases = [
        (DeclarationKind::Field, "static static int x;"),
        (DeclarationKind::Field, "public private int x;"),
        (DeclarationKind::Field, "private Missing x;"),
        (DeclarationKind::Method, "private void run(int a, Missing b);"),
        (DeclarationKind::Method, "private static Missing run();"),
        (DeclarationKind::Constructor, "private Foo Foo(Missing m);"),
        (DeclarationKind::Class, "public public class Foo"),
        (DeclarationKind::Class, "package a; class"),
    ];

    for (kind, input) in cases {
        let mut log = CallLog::default();
        let parser = DeclarationParser::new(input).imports(&imports);
        let result = match kind {
            DeclarationKind::Field => parser.parse_field(&mut log).map(drop),
            DeclarationKind::Method => parser.parse_method(&mut log).map(drop),
            DeclarationKind::Constructor => parser.parse_constructor(&mut log).map(drop),
            DeclarationKind::Class => parser.parse_class(&mut log).map(drop),
        };
        assert!(result.is_err(), "{input:?} parsed");
        assert!(log.calls.is_empty(), "{input:?} wrote {:?}", log.calls);
    }
}
