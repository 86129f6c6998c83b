//! Literal construction: in-memory values → oxc AST literals.

use oxc_allocator::Box as oxc_box;
use oxc_ast::ast::*;
use oxc_ast::AstBuilder;
use oxc_span::SPAN;
use oxc_syntax::number::NumberBase;

use crate::styles::CompilerModeStyles;

/// A value that can be emitted as a literal class member initializer.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    List(Vec<LiteralValue>),
    /// Keys keep their insertion order.
    Map(Vec<(String, LiteralValue)>),
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl From<&[String]> for LiteralValue {
    fn from(values: &[String]) -> Self {
        LiteralValue::List(values.iter().map(|v| LiteralValue::from(v.as_str())).collect())
    }
}

impl From<&CompilerModeStyles> for LiteralValue {
    fn from(styles: &CompilerModeStyles) -> Self {
        LiteralValue::Map(
            styles
                .iter()
                .map(|(mode, paths)| (mode.to_string(), LiteralValue::from(paths)))
                .collect(),
        )
    }
}

impl LiteralValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Builds the AST expression for this value.
    pub fn to_expression<'a>(&self, ast: AstBuilder<'a>) -> Expression<'a> {
        match self {
            LiteralValue::String(s) => {
                let atom = ast.allocator.alloc_str(s);
                ast.expression_string_literal(SPAN, atom, None)
            }
            LiteralValue::Number(n) => {
                ast.expression_numeric_literal(SPAN, *n, None, NumberBase::Decimal)
            }
            LiteralValue::Boolean(b) => ast.expression_boolean_literal(SPAN, *b),
            LiteralValue::List(items) => {
                let mut elements = ast.vec();
                for item in items {
                    elements.push(ArrayExpressionElement::from(item.to_expression(ast)));
                }
                ast.expression_array(SPAN, elements)
            }
            LiteralValue::Map(entries) => {
                let mut properties = ast.vec();
                for (key, value) in entries {
                    let key_atom = ast.allocator.alloc_str(key);
                    let key = PropertyKey::StringLiteral(
                        ast.alloc(ast.string_literal(SPAN, key_atom, None)),
                    );
                    properties.push(ast.object_property_kind_object_property(
                        SPAN,
                        PropertyKind::Init,
                        key,
                        value.to_expression(ast),
                        false,
                        false,
                        false,
                    ));
                }
                ast.expression_object(SPAN, properties)
            }
        }
    }
}

/// `static <name> = <value>;`
pub fn static_property<'a>(ast: AstBuilder<'a>, name: &str, value: &LiteralValue) -> ClassElement<'a> {
    let name_atom = ast.allocator.alloc_str(name);
    let key = PropertyKey::StaticIdentifier(ast.alloc(ast.identifier_name(SPAN, name_atom)));
    ast.class_element_property_definition(
        SPAN,
        PropertyDefinitionType::PropertyDefinition,
        ast.vec(),
        key,
        None::<oxc_box<TSTypeAnnotation>>,
        Some(value.to_expression(ast)),
        false, // computed
        true,  // static
        false, // declare
        false, // override
        false, // optional
        false, // definite
        false, // readonly
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_codegen::Codegen;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn print_with_member(name: &str, value: &LiteralValue) -> String {
        let allocator = Allocator::default();
        let source_type = SourceType::default().with_typescript(true).with_module(true);
        let mut program = Parser::new(&allocator, "class A {}", source_type)
            .parse()
            .program;
        let ast = AstBuilder::new(&allocator);
        if let Some(Statement::ClassDeclaration(class)) = program.body.first_mut() {
            class.body.body.push(static_property(ast, name, value));
        }
        Codegen::new().build(&program).code
    }

    #[test]
    fn test_string_member() {
        let code = print_with_member("is", &LiteralValue::from("my-cmp"));
        assert!(code.contains("static is = \"my-cmp\""), "{}", code);
    }

    #[test]
    fn test_nested_map_member() {
        let mut styles = CompilerModeStyles::new();
        styles.append("ios", vec!["a.css".to_string(), "b.css".to_string()]);
        let code = print_with_member("styleUrls", &LiteralValue::from(&styles));
        assert!(code.contains("static styleUrls"), "{}", code);
        assert!(code.contains("\"ios\""), "{}", code);
        assert!(code.contains("\"a.css\""), "{}", code);
        assert!(code.contains("\"b.css\""), "{}", code);
    }

    #[test]
    fn test_scalar_members() {
        let code = print_with_member("flag", &LiteralValue::Boolean(true));
        assert!(code.contains("static flag = true"), "{}", code);
        let code = print_with_member("count", &LiteralValue::Number(3.0));
        assert!(code.contains("static count = 3"), "{}", code);
    }
}
