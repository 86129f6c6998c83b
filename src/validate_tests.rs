use crate::config::TransformConfig;
use crate::diagnostics::*;
use crate::exports::{ExportResolver, ExportedSymbol, ModuleExports, SymbolKind};
use crate::options::decode_component_options;
use crate::validate::validate_component;
use oxc_allocator::Allocator;
use oxc_ast::ast::{Class, Declaration, ExportDefaultDeclarationKind, Program, Statement};
use oxc_parser::Parser;
use oxc_span::{SourceType, Span};

fn first_class<'p, 'a>(program: &'p Program<'a>) -> &'p Class<'a> {
    for stmt in &program.body {
        match stmt {
            Statement::ClassDeclaration(class) => return class,
            Statement::ExportNamedDeclaration(export) => {
                if let Some(Declaration::ClassDeclaration(class)) = &export.declaration {
                    return class;
                }
            }
            Statement::ExportDefaultDeclaration(export) => {
                if let ExportDefaultDeclarationKind::ClassDeclaration(class) = &export.declaration {
                    return class;
                }
            }
            _ => {}
        }
    }
    panic!("no class in program");
}

/// Validates the first class of `source` against its first decorator.
/// Uses the module's own export table unless `exports` is given.
fn run(
    source: &str,
    config: &TransformConfig,
    exports: Option<&dyn ExportResolver>,
) -> (bool, Vec<Diagnostic>) {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_typescript(true).with_module(true);
    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);

    let module_exports = ModuleExports::from_program(&ret.program);
    let exports = exports.unwrap_or(&module_exports);
    let class = first_class(&ret.program);
    let options = decode_component_options(&class.decorators[0]).expect("options object");

    let mut diagnostics = Diagnostics::new("test.tsx");
    let ok = validate_component(config, &mut diagnostics, exports, &options, class, 0);
    (ok, diagnostics.into_vec())
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.code.as_str()).collect()
}

fn testing() -> TransformConfig {
    TransformConfig::testing()
}

// ═══════════════════════════════════════════════════════════════════════════════
// STRUCTURE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_valid_component_passes() {
    let (ok, diagnostics) = run(
        "@Component({ tag: 'my-cmp', shadow: true })\nexport class MyCmp {}",
        &TransformConfig::default(),
        None,
    );
    assert!(ok);
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
}

#[test]
fn test_extends_is_rejected_and_bound_to_heritage() {
    let source = "@Component({ tag: 'my-cmp' })\nclass MyCmp extends HTMLElement {}";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_EXTENDS]);
    assert_eq!(diagnostics[0].snippet(source), "HTMLElement");
}

#[test]
fn test_extends_wins_regardless_of_other_fields() {
    let source = "@Component({ tag: 'bad', shadow: true, scoped: true })\nclass MyCmp extends Base {}";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_EXTENDS]);
}

#[test]
fn test_second_decorator_is_rejected() {
    let source = "@Component({ tag: 'my-cmp' })\n@Injectable()\nclass MyCmp {}";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_MULTI_DECORATOR]);
    assert!(diagnostics[0].snippet(source).contains("Injectable()"));
}

#[test]
fn test_constructor_with_arguments_is_rejected() {
    let source = "@Component({ tag: 'my-cmp' })\nclass MyCmp { constructor(el) {} }";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_CONSTRUCTOR_ARGS]);
    assert_eq!(diagnostics[0].snippet(source), "el");

    let (ok, _) = run(
        "@Component({ tag: 'my-cmp' })\nclass MyCmp { constructor() {} }",
        &testing(),
        None,
    );
    assert!(ok);
}

#[test]
fn test_non_static_options_are_reported_individually() {
    let source = "@Component({ tag: TAG, shadow: isShadow() })\nclass MyCmp {}";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_OPTION_NOT_STATIC, ERR_OPTION_NOT_STATIC]);
    assert_eq!(diagnostics[0].snippet(source), "TAG");
    assert_eq!(diagnostics[1].snippet(source), "isShadow()");
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENCAPSULATION & TAG
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_shadow_and_scoped_yield_exactly_one_diagnostic() {
    let source = "@Component({ tag: 'my-cmp', shadow: true, scoped: true })\nclass MyCmp {}";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_ENCAPSULATION]);

    let scoped_value = source.find("scoped: true").unwrap() + "scoped: ".len();
    assert_eq!(diagnostics[0].start as usize, scoped_value);
}

#[test]
fn test_shadow_and_scoped_win_over_non_static_options() {
    let source = "@Component({ tag: 'my-cmp', shadow: true, scoped: true, styles: css, assetsDir: dir })\nclass MyCmp {}";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_ENCAPSULATION]);
}

#[test]
fn test_shadow_false_with_scoped_is_fine() {
    let (ok, diagnostics) = run(
        "@Component({ tag: 'my-cmp', shadow: false, scoped: true })\nclass MyCmp {}",
        &testing(),
        None,
    );
    assert!(ok, "{:?}", diagnostics);
}

#[test]
fn test_missing_tag_binds_to_decorator() {
    let source = "@Component({ shadow: true })\nclass MyCmp {}";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_TAG_MISSING]);
    assert!(diagnostics[0].snippet(source).starts_with("@Component"));

    let (ok, diagnostics) = run("@Component({ tag: '   ' })\nclass MyCmp {}", &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_TAG_MISSING]);
}

#[test]
fn test_tag_without_hyphen_is_invalid() {
    let source = "@Component({ tag: 'foo' })\nclass Foo {}";
    let (ok, diagnostics) = run(source, &testing(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_TAG_INVALID]);
    assert_eq!(diagnostics[0].snippet(source), "'foo'");

    let (ok, diagnostics) = run("@Component({ tag: 'foo-bar' })\nclass Foo {}", &testing(), None);
    assert!(ok, "{:?}", diagnostics);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SINGLE EXPORT
// ═══════════════════════════════════════════════════════════════════════════════

fn symbol(name: &str, kind: SymbolKind, declaration: Span) -> ExportedSymbol {
    ExportedSymbol {
        name: name.to_string(),
        local_name: Some(name.to_string()),
        kind,
        type_only: false,
        declaration,
        modifier: None,
    }
}

const MY_COMPONENT: &str = "@Component({ tag: 'my-component' })\nclass MyComponent {}";

#[test]
fn test_helper_export_fails_with_fake_resolver() {
    let helper_decl = Span::new(200, 230);
    let exports = vec![
        symbol("MyComponent", SymbolKind::Class, Span::new(0, 10)),
        symbol("Helper", SymbolKind::Function, helper_decl),
    ];
    let (ok, diagnostics) = run(MY_COMPONENT, &TransformConfig::default(), Some(&exports as &dyn ExportResolver));
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_SINGLE_EXPORT]);
    assert_eq!(diagnostics[0].span(), helper_decl);
    assert!(diagnostics[0].message.contains("\"Helper\""));
}

#[test]
fn test_interface_export_passes_with_fake_resolver() {
    let exports = vec![
        symbol("MyComponent", SymbolKind::Class, Span::new(0, 10)),
        symbol("SomeInterface", SymbolKind::Interface, Span::new(200, 230)),
    ];
    let (ok, diagnostics) = run(MY_COMPONENT, &TransformConfig::default(), Some(&exports as &dyn ExportResolver));
    assert!(ok, "{:?}", diagnostics);
}

#[test]
fn test_every_offending_export_is_reported() {
    let exports = vec![
        symbol("MyComponent", SymbolKind::Class, Span::new(0, 10)),
        symbol("helper", SymbolKind::Function, Span::new(20, 30)),
        ExportedSymbol {
            modifier: Some(Span::new(40, 46)),
            ..symbol("VERSION", SymbolKind::Variable, Span::new(40, 60))
        },
        ExportedSymbol {
            type_only: true,
            ..symbol("Props", SymbolKind::Import, Span::new(70, 80))
        },
    ];
    let (ok, diagnostics) = run(MY_COMPONENT, &TransformConfig::default(), Some(&exports as &dyn ExportResolver));
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_SINGLE_EXPORT, ERR_SINGLE_EXPORT]);
    assert_eq!(diagnostics[0].span(), Span::new(20, 30));
    assert_eq!(diagnostics[1].span(), Span::new(40, 46));
}

#[test]
fn test_testing_mode_skips_export_check() {
    let exports = vec![symbol("Helper", SymbolKind::Function, Span::new(0, 10))];
    let (ok, diagnostics) = run(MY_COMPONENT, &testing(), Some(&exports as &dyn ExportResolver));
    assert!(ok);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_real_module_extra_export_binds_to_export_keyword() {
    let source = "@Component({ tag: 'my-cmp' })\nexport class MyCmp {}\nexport function helper() {}\nexport interface Props {}";
    let (ok, diagnostics) = run(source, &TransformConfig::default(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_SINGLE_EXPORT]);
    assert_eq!(diagnostics[0].snippet(source), "export");
    let helper_export = source.find("export function").unwrap();
    assert_eq!(diagnostics[0].start as usize, helper_export);
}

#[test]
fn test_default_export_of_the_class_is_allowed() {
    let (ok, diagnostics) = run(
        "@Component({ tag: 'my-cmp' })\nclass MyCmp {}\nexport default MyCmp;",
        &TransformConfig::default(),
        None,
    );
    assert!(ok, "{:?}", diagnostics);
}

#[test]
fn test_reexport_star_is_rejected() {
    let (ok, diagnostics) = run(
        "@Component({ tag: 'my-cmp' })\nexport class MyCmp {}\nexport * from './utils';",
        &TransformConfig::default(),
        None,
    );
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_SINGLE_EXPORT]);
}

#[test]
fn test_type_reexports_are_allowed() {
    let (ok, diagnostics) = run(
        "import type { Size } from './size';\n@Component({ tag: 'my-cmp' })\nexport class MyCmp {}\nexport type { Size };\nexport type Mode = 'a' | 'b';",
        &TransformConfig::default(),
        None,
    );
    assert!(ok, "{:?}", diagnostics);
}

#[test]
fn test_overloaded_export_is_reported_once() {
    let source = "@Component({ tag: 'my-cmp' })\nexport class MyCmp {}\nexport function helper(): void;\nexport function helper(a?: number) {}";
    let (ok, diagnostics) = run(source, &TransformConfig::default(), None);
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_SINGLE_EXPORT]);
    let implementation = source.find("export function helper(a").unwrap();
    assert_eq!(diagnostics[0].start as usize, implementation);
}

#[test]
fn test_reexport_under_the_class_name_is_rejected() {
    let exports = vec![ExportedSymbol {
        local_name: None,
        ..symbol("MyComponent", SymbolKind::External, Span::new(50, 80))
    }];
    let (ok, diagnostics) = run(MY_COMPONENT, &TransformConfig::default(), Some(&exports as &dyn ExportResolver));
    assert!(!ok);
    assert_eq!(codes(&diagnostics), vec![ERR_SINGLE_EXPORT]);
    assert_eq!(diagnostics[0].span(), Span::new(50, 80));
}
