use crate::config::TransformConfig;
use crate::declaration::Encapsulation;
use crate::diagnostics::{ERR_ENCAPSULATION, ERR_SINGLE_EXPORT};
use crate::error::TransformError;
use crate::transform::{transform_component_source, TransformOutput};

fn transform(source: &str, config: &TransformConfig) -> TransformOutput {
    transform_component_source(source, "src/components/my-cmp/my-cmp.tsx", config).unwrap()
}

#[test]
fn test_hoists_decorator_into_static_members() {
    let source = r#"
import { Component, h } from '@stencil/core';

@Component({
    tag: ' my-cmp ',
    shadow: true,
    styleUrl: 'my-cmp.scss',
    assetsDirs: ['icons'],
    assetsDir: 'assets',
})
export class MyCmp {
    render() {
        return <div>Hello</div>;
    }
}
"#;
    let output = transform(source, &TransformConfig::default());

    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(output.components.len(), 1);
    let component = &output.components[0];
    assert_eq!(component.class_name.as_deref(), Some("MyCmp"));
    assert_eq!(component.tag, "my-cmp");
    assert_eq!(component.encapsulation, Some(Encapsulation::Shadow));

    let code = &output.code;
    assert!(!code.contains("@Component"), "{}", code);
    assert!(code.contains("static is = \"my-cmp\""), "{}", code);
    assert!(code.contains("static encapsulation = \"shadow\""), "{}", code);
    assert!(code.contains("static originalStyleUrls"), "{}", code);
    assert!(code.contains("\"my-cmp.scss\""), "{}", code);
    assert!(code.contains("\"my-cmp.css\""), "{}", code);
    assert!(code.contains("static assetsDirs"), "{}", code);

    let is = code.find("static is").unwrap();
    let encapsulation = code.find("static encapsulation").unwrap();
    let original = code.find("static originalStyleUrls").unwrap();
    let compiled = code.find("static styleUrls").unwrap();
    let assets = code.find("static assetsDirs").unwrap();
    assert!(is < encapsulation && encapsulation < original && original < compiled && compiled < assets);

    let icons = code.find("\"icons\"").unwrap();
    let assets_dir = code.find("\"assets\"").unwrap();
    assert!(icons < assets_dir);
}

#[test]
fn test_invalid_component_keeps_decorator_and_gets_no_members() {
    let source = "@Component({ tag: 'my-cmp', shadow: true, scoped: true })\nexport class MyCmp {}\n";
    let output = transform(source, &TransformConfig::default());

    assert_eq!(output.diagnostics.len(), 1);
    let diagnostic = &output.diagnostics[0];
    assert_eq!(diagnostic.code, ERR_ENCAPSULATION);
    assert_eq!(diagnostic.file, "src/components/my-cmp/my-cmp.tsx");
    assert_eq!(diagnostic.line, 1);
    assert!(output.components.is_empty());
    assert!(output.code.contains("@Component"), "{}", output.code);
    assert!(!output.code.contains("static is"), "{}", output.code);
}

#[test]
fn test_each_class_is_processed_independently() {
    let source = r#"
@Component({ tag: 'first-cmp' })
class FirstCmp {}

@Component({ tag: 'second' })
class SecondCmp {}

class Plain {}
"#;
    let output = transform(source, &TransformConfig::testing());

    assert_eq!(output.components.len(), 1);
    assert_eq!(output.components[0].tag, "first-cmp");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].line, 5);
    assert!(output.code.contains("static is = \"first-cmp\""), "{}", output.code);
}

#[test]
fn test_single_export_diagnostics_in_module() {
    let source = "@Component({ tag: 'my-cmp' })\nexport class MyCmp {}\nexport const a = 1;\nexport function b() {}\n";

    let output = transform(source, &TransformConfig::default());
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec![ERR_SINGLE_EXPORT, ERR_SINGLE_EXPORT]);
    assert_eq!(output.diagnostics[0].line, 3);
    assert_eq!(output.diagnostics[1].line, 4);

    let output = transform(source, &TransformConfig::testing());
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.components.len(), 1);
}

#[test]
fn test_decorator_without_options_is_left_alone() {
    let source = "@Component\nclass MyCmp {}\n";
    let output = transform(source, &TransformConfig::testing());
    assert!(output.diagnostics.is_empty());
    assert!(output.components.is_empty());
    assert!(output.code.contains("@Component"), "{}", output.code);
}

#[test]
fn test_configured_decorators_are_stripped_from_component_classes() {
    let config = TransformConfig {
        decorators_to_remove: vec!["Legacy".to_string(), "Component".to_string()],
        ..TransformConfig::testing()
    };
    let source = "@Legacy()\n@Component({ tag: 'my-cmp' })\nclass MyCmp {}\n\n@Legacy()\nclass Other {}\n";
    let output = transform(source, &config);

    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(output.components.len(), 1);
    assert!(output.code.contains("static is = \"my-cmp\""), "{}", output.code);
    assert_eq!(output.code.matches("@Legacy").count(), 1, "{}", output.code);
}

#[test]
fn test_custom_decorator_name() {
    let config = TransformConfig::from_json(r#"{ "isTesting": true, "decoratorName": "Element" }"#).unwrap();
    let output = transform("@Element({ tag: 'x-el' })\nclass XEl {}\n", &config);
    assert_eq!(output.components.len(), 1);
    assert!(output.code.contains("static is = \"x-el\""), "{}", output.code);
}

#[test]
fn test_parse_failure_is_a_host_error() {
    let err = transform_component_source("class {", "broken.ts", &TransformConfig::default()).unwrap_err();
    assert!(matches!(err, TransformError::Parse { ref file, .. } if file == "broken.ts"));
}

#[test]
fn test_output_serializes_camel_case() {
    let output = transform(
        "@Component({ tag: 'my-cmp', styleUrls: { ios: 'a.ios.scss' } })\nclass MyCmp {}\n",
        &TransformConfig::testing(),
    );
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["filePath"], "src/components/my-cmp/my-cmp.tsx");
    assert_eq!(json["components"][0]["styleUrls"]["ios"][0], "a.ios.css");
    assert!(json["diagnostics"].as_array().unwrap().is_empty());
}
