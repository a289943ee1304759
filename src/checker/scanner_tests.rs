use super::*;
use crate::checker::test_fixtures::{
    TypesBuilder, field, function, method, method_decl, slot, type_decl,
};
use crate::model::{Location, Subject, TypeId};

struct Fixture {
    types: TypeTable,
    hidden: TypeId,
    exported: TypeId,
}

/// `type hidden struct{}` and `type Exported struct{}`.
fn fixture() -> (TypesBuilder, TypeId, TypeId) {
    let mut b = TypesBuilder::new();
    let hidden_body = b.structure(vec![]);
    let hidden = b.named_as("hidden", false, hidden_body);
    let exported_body = b.structure(vec![]);
    let exported = b.named_as("Exported", true, exported_body);
    (b, hidden, exported)
}

fn basic() -> Fixture {
    let (b, hidden, exported) = fixture();
    Fixture {
        types: b.build(),
        hidden,
        exported,
    }
}

fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn exported_function_with_private_param_is_reported() {
    let f = basic();
    let decls = vec![function("F", vec![slot("a", f.hidden, 7, 8)], vec![])];

    let diagnostics = scan(&f.types, &decls, ChecksConfig::default());

    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics[0];
    assert_eq!(d.location, Location::new("a.go", 7, 8));
    assert_eq!(d.leaked_type, "hidden");
    assert_eq!(d.subject, Subject::Function("F".to_string()));
    assert_eq!(d.slot, SlotKind::Param);
    assert_eq!(d.message, "private type hidden is used in the exported function F");
}

#[test]
fn private_function_is_skipped() {
    let f = basic();
    let decls = vec![function("f", vec![slot("a", f.hidden, 7, 8)], vec![])];

    assert!(scan(&f.types, &decls, ChecksConfig::default()).is_empty());
}

#[test]
fn exported_method_of_exported_receiver_is_reported() {
    let f = basic();
    let decls = vec![method_decl(
        "M",
        Some(f.exported),
        vec![slot("a", f.hidden, 3, 20)],
        vec![],
    )];

    let diagnostics = scan(&f.types, &decls, ChecksConfig::default());

    assert_eq!(
        messages(&diagnostics),
        vec!["private type hidden is used in the exported method M"]
    );
}

#[test]
fn method_of_private_receiver_is_skipped() {
    let f = basic();
    let decls = vec![
        method_decl("M", Some(f.hidden), vec![slot("a", f.hidden, 3, 20)], vec![]),
        method_decl("N", Some(f.hidden), vec![], vec![slot("", f.hidden, 4, 20)]),
    ];

    assert!(scan(&f.types, &decls, ChecksConfig::default()).is_empty());
}

#[test]
fn method_of_pointer_to_private_receiver_is_skipped() {
    let (mut b, hidden, _) = fixture();
    let ptr_hidden = b.pointer(hidden);
    let types = b.build();
    let decls = vec![method_decl(
        "M",
        Some(ptr_hidden),
        vec![slot("a", hidden, 3, 20)],
        vec![],
    )];

    assert!(scan(&types, &decls, ChecksConfig::default()).is_empty());
}

#[test]
fn private_receiver_skip_ignores_skip_interfaces() {
    let (mut b, hidden, _) = fixture();
    let iface = b.interface(vec![]);
    let private_iface = b.named_as("reader", false, iface);
    let types = b.build();
    let decls = vec![method_decl(
        "M",
        Some(private_iface),
        vec![slot("a", hidden, 3, 20)],
        vec![],
    )];
    let checks = ChecksConfig {
        skip_interfaces: true,
        ..ChecksConfig::default()
    };

    assert!(scan(&types, &decls, checks).is_empty());
}

#[test]
fn method_without_receiver_has_no_receiver_constraint() {
    let f = basic();
    let decls = vec![method_decl("M", None, vec![slot("a", f.hidden, 3, 20)], vec![])];

    let diagnostics = scan(&f.types, &decls, ChecksConfig::default());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].subject, Subject::Method("M".to_string()));
}

#[test]
fn private_method_of_exported_receiver_is_skipped() {
    let f = basic();
    let decls = vec![method_decl(
        "unexportedType",
        Some(f.exported),
        vec![slot("a", f.hidden, 3, 20)],
        vec![],
    )];

    assert!(scan(&f.types, &decls, ChecksConfig::default()).is_empty());
}

#[test]
fn map_value_leak_names_value_type() {
    let (mut b, hidden, exported) = fixture();
    let map = b.map(exported, hidden);
    let types = b.build();
    let decls = vec![function("UnexportedMapValue", vec![slot("m", map, 5, 25)], vec![])];

    let diagnostics = scan(&types, &decls, ChecksConfig::default());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].leaked_type, "hidden");
}

#[test]
fn each_param_is_reported_independently() {
    let (mut b, hidden, exported) = fixture();
    let other = b.named("other", false);
    let types = b.build();
    let decls = vec![function(
        "F",
        vec![
            slot("a", hidden, 1, 8),
            slot("b", exported, 1, 18),
            slot("c", other, 1, 30),
        ],
        vec![],
    )];

    let diagnostics = scan(&types, &decls, ChecksConfig::default());

    let locations: Vec<_> = diagnostics.iter().map(|d| d.location.column).collect();
    assert_eq!(locations, vec![8, 30]);
    let leaked: Vec<_> = diagnostics.iter().map(|d| d.leaked_type.as_str()).collect();
    assert_eq!(leaked, vec!["hidden", "other"]);
}

#[test]
fn params_are_reported_before_results() {
    let f = basic();
    let decls = vec![function(
        "F",
        vec![slot("a", f.hidden, 1, 8)],
        vec![slot("", f.hidden, 1, 20)],
    )];

    let diagnostics = scan(&f.types, &decls, ChecksConfig::default());

    let kinds: Vec<_> = diagnostics.iter().map(|d| d.slot).collect();
    assert_eq!(kinds, vec![SlotKind::Param, SlotKind::Result]);
}

#[test]
fn skip_func_args_only_checks_results() {
    let f = basic();
    let decls = vec![function(
        "F",
        vec![slot("a", f.hidden, 1, 8)],
        vec![slot("", f.hidden, 1, 20)],
    )];
    let checks = ChecksConfig {
        skip_func_args: true,
        ..ChecksConfig::default()
    };

    let diagnostics = scan(&f.types, &decls, checks);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].slot, SlotKind::Result);
}

#[test]
fn skip_func_returns_only_checks_params() {
    let f = basic();
    let decls = vec![function(
        "F",
        vec![slot("a", f.hidden, 1, 8)],
        vec![slot("", f.hidden, 1, 20)],
    )];
    let checks = ChecksConfig {
        skip_func_returns: true,
        ..ChecksConfig::default()
    };

    let diagnostics = scan(&f.types, &decls, checks);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].slot, SlotKind::Param);
}

#[test]
fn type_declaration_with_public_private_field_is_reported_once() {
    let (mut b, hidden, _) = fixture();
    let body = b.structure(vec![field("U", true, hidden), field("V", true, hidden)]);
    let types = b.build();
    let decls = vec![type_decl("UnexportedStructField", body, 11)];

    let diagnostics = scan(&types, &decls, ChecksConfig::default());

    assert_eq!(
        messages(&diagnostics),
        vec!["private type hidden is used in the exported type declaration UnexportedStructField"]
    );
    assert_eq!(diagnostics[0].location, Location::new("a.go", 11, 6));
    assert_eq!(diagnostics[0].slot, SlotKind::TypeDeclaration);
}

#[test]
fn type_declaration_with_private_field_is_clean() {
    let (mut b, hidden, _) = fixture();
    let body = b.structure(vec![field("u", false, hidden)]);
    let types = b.build();
    let decls = vec![type_decl("UnexportedFieldDoesNotTriggerReport", body, 3)];

    assert!(scan(&types, &decls, ChecksConfig::default()).is_empty());
}

#[test]
fn private_type_declaration_is_skipped() {
    let (mut b, hidden, _) = fixture();
    let body = b.structure(vec![field("U", true, hidden)]);
    let types = b.build();
    let decls = vec![type_decl("unexportedTypeDoesNotTriggerReport", body, 3)];

    assert!(scan(&types, &decls, ChecksConfig::default()).is_empty());
}

#[test]
fn skip_types_ignores_type_declarations_but_not_functions() {
    let (mut b, hidden, _) = fixture();
    let slice = b.pointer(hidden);
    let types = b.build();
    let decls = vec![
        type_decl("UnexportedSlice", slice, 2),
        function("F", vec![slot("a", hidden, 4, 8)], vec![]),
    ];
    let checks = ChecksConfig {
        skip_types: true,
        ..ChecksConfig::default()
    };

    let diagnostics = scan(&types, &decls, checks);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].subject, Subject::Function("F".to_string()));
}

#[test]
fn interface_type_declaration_is_skipped_with_skip_interfaces() {
    let (mut b, hidden, _) = fixture();
    let returns_hidden = b.signature(vec![], vec![hidden]);
    let body = b.interface(vec![method("Method", true, returns_hidden)]);
    let types = b.build();
    let decls = vec![type_decl("I", body, 9)];

    let strict = scan(&types, &decls, ChecksConfig::default());
    let lenient = scan(
        &types,
        &decls,
        ChecksConfig {
            skip_interfaces: true,
            ..ChecksConfig::default()
        },
    );

    assert_eq!(strict.len(), 1);
    assert_eq!(strict[0].leaked_type, "hidden");
    assert!(lenient.is_empty());
}

#[test]
fn private_interface_param_is_skipped_with_skip_interfaces() {
    let (mut b, _, _) = fixture();
    let iface = b.interface(vec![]);
    let reader = b.named_as("reader", false, iface);
    let types = b.build();
    let decls = vec![function("Read", vec![slot("r", reader, 1, 10)], vec![])];

    assert_eq!(scan(&types, &decls, ChecksConfig::default()).len(), 1);
    assert!(
        scan(
            &types,
            &decls,
            ChecksConfig {
                skip_interfaces: true,
                ..ChecksConfig::default()
            }
        )
        .is_empty()
    );
}

#[test]
fn dangling_slot_type_does_not_abort_scan() {
    let f = basic();
    let decls = vec![
        function("Broken", vec![slot("a", TypeId(999), 1, 8)], vec![]),
        function("F", vec![slot("a", f.hidden, 2, 8)], vec![]),
    ];

    let diagnostics = scan(&f.types, &decls, ChecksConfig::default());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].subject, Subject::Function("F".to_string()));
}

#[test]
fn diagnostics_follow_declaration_order() {
    let f = basic();
    let decls: Vec<_> = (0..64)
        .map(|i| {
            function(
                &format!("F{i}"),
                vec![slot("a", f.hidden, i + 1, 8)],
                vec![slot("", f.exported, i + 1, 20)],
            )
        })
        .collect();

    let diagnostics = scan(&f.types, &decls, ChecksConfig::default());

    let lines: Vec<_> = diagnostics.iter().map(|d| d.location.line).collect();
    assert_eq!(lines, (1..=64).collect::<Vec<_>>());
}

#[test]
fn repeated_scans_are_identical() {
    let (mut b, hidden, exported) = fixture();
    let map = b.map(exported, hidden);
    let types = b.build();
    let decls = vec![
        function("A", vec![slot("m", map, 1, 8)], vec![slot("", hidden, 1, 30)]),
        type_decl("T", map, 3),
        method_decl("M", Some(exported), vec![], vec![slot("", hidden, 5, 30)]),
    ];

    let first = scan(&types, &decls, ChecksConfig::default());
    let second = scan(&types, &decls, ChecksConfig::default());

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[test]
fn scan_declaration_matches_scan_for_single_declaration() {
    let f = basic();
    let decl = function("F", vec![slot("a", f.hidden, 7, 8)], vec![]);
    let scanner = DeclarationScanner::new(&f.types, ChecksConfig::default());

    assert_eq!(
        scanner.scan_declaration(&decl),
        scan(&f.types, std::slice::from_ref(&decl), ChecksConfig::default())
    );
}
