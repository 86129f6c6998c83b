//! Component Options Decoding
//!
//! Reads the object literal passed to the component decorator into the
//! author-facing `ComponentOptions`. Multi-shape fields are collapsed into
//! tagged unions here so nothing downstream inspects raw AST values.

use oxc_ast::ast::{Decorator, Expression, ObjectExpression, ObjectPropertyKind, PropertyKey};
use oxc_span::{GetSpan, Span};

use crate::styles::{OneOrMany, StyleUrlsInput};

/// A decoded value plus the span of the expression it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

/// A recognised option whose value is not a literal of an accepted shape.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidOption {
    pub name: String,
    pub expected: &'static str,
    pub span: Span,
}

/// Author-facing configuration attached to a component class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentOptions {
    pub tag: Option<Spanned<String>>,
    pub shadow: Option<Spanned<bool>>,
    pub scoped: Option<Spanned<bool>>,
    pub style_url: Option<Spanned<String>>,
    pub style_urls: Option<Spanned<StyleUrlsInput>>,
    pub styles: Option<Spanned<String>>,
    pub assets_dir: Option<Spanned<String>>,
    pub assets_dirs: Option<Spanned<Vec<String>>>,
    pub invalid: Vec<InvalidOption>,
    /// Span of the whole options object.
    pub span: Span,
}

impl ComponentOptions {
    pub fn is_shadow(&self) -> bool {
        self.shadow.as_ref().is_some_and(|s| s.value)
    }

    pub fn is_scoped(&self) -> bool {
        self.scoped.as_ref().is_some_and(|s| s.value)
    }

    /// Trimmed tag, if one was given.
    pub fn trimmed_tag(&self) -> Option<&str> {
        self.tag.as_ref().map(|t| t.value.trim())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DECODING
// ═══════════════════════════════════════════════════════════════════════════════

/// Decodes the decorator's first argument.
///
/// Returns `None` when there is nothing to decode: a bare decorator, a call
/// without arguments, or a first argument that is not an object literal.
pub fn decode_component_options(decorator: &Decorator) -> Option<ComponentOptions> {
    let Expression::CallExpression(call) = unwrap_expression(&decorator.expression) else {
        return None;
    };
    let first = call.arguments.first()?.as_expression()?;
    let Expression::ObjectExpression(object) = unwrap_expression(first) else {
        return None;
    };
    Some(decode_object(object))
}

fn decode_object(object: &ObjectExpression) -> ComponentOptions {
    let mut options = ComponentOptions {
        span: object.span,
        ..Default::default()
    };

    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(prop) = property else {
            continue;
        };
        let Some(name) = property_name(&prop.key) else {
            continue;
        };
        let value = unwrap_expression(&prop.value);
        let span = value.span();

        match name {
            "tag" => options.tag = expect(&mut options.invalid, name, "a string", span, static_string(value)),
            "shadow" => options.shadow = expect(&mut options.invalid, name, "a boolean", span, static_bool(value)),
            "scoped" => options.scoped = expect(&mut options.invalid, name, "a boolean", span, static_bool(value)),
            "styleUrl" => {
                options.style_url = expect(&mut options.invalid, name, "a string", span, static_string(value))
            }
            "styleUrls" => {
                options.style_urls = expect(
                    &mut options.invalid,
                    name,
                    "a list of strings or an object of modes",
                    span,
                    static_style_urls(value),
                )
            }
            "styles" => options.styles = expect(&mut options.invalid, name, "a string", span, static_string(value)),
            "assetsDir" => {
                options.assets_dir = expect(&mut options.invalid, name, "a string", span, static_string(value))
            }
            "assetsDirs" => {
                options.assets_dirs = expect(
                    &mut options.invalid,
                    name,
                    "a list of strings",
                    span,
                    static_string_list(value),
                )
            }
            _ => {}
        }
    }

    options
}

fn expect<T>(
    invalid: &mut Vec<InvalidOption>,
    name: &str,
    expected: &'static str,
    span: Span,
    decoded: Option<T>,
) -> Option<Spanned<T>> {
    match decoded {
        Some(value) => Some(Spanned::new(value, span)),
        None => {
            invalid.push(InvalidOption {
                name: name.to_string(),
                expected,
                span,
            });
            None
        }
    }
}

/// Returns the span of the option named `name`, if present in the literal.
pub fn find_option_span(options: &ComponentOptions, name: &str) -> Option<Span> {
    match name {
        "tag" => options.tag.as_ref().map(|v| v.span),
        "shadow" => options.shadow.as_ref().map(|v| v.span),
        "scoped" => options.scoped.as_ref().map(|v| v.span),
        "styleUrl" => options.style_url.as_ref().map(|v| v.span),
        "styleUrls" => options.style_urls.as_ref().map(|v| v.span),
        "styles" => options.styles.as_ref().map(|v| v.span),
        "assetsDir" => options.assets_dir.as_ref().map(|v| v.span),
        "assetsDirs" => options.assets_dirs.as_ref().map(|v| v.span),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// STATIC VALUE HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Name of the decorator: `Foo` for both `@Foo` and `@Foo(...)`.
pub fn decorator_name<'d>(decorator: &'d Decorator) -> Option<&'d str> {
    match unwrap_expression(&decorator.expression) {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::CallExpression(call) => match unwrap_expression(&call.callee) {
            Expression::Identifier(ident) => Some(ident.name.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Looks through parentheses and `as` / `satisfies` wrappers.
fn unwrap_expression<'e, 'a>(expr: &'e Expression<'a>) -> &'e Expression<'a> {
    match expr {
        Expression::ParenthesizedExpression(paren) => unwrap_expression(&paren.expression),
        Expression::TSAsExpression(as_expr) => unwrap_expression(&as_expr.expression),
        Expression::TSSatisfiesExpression(sat) => unwrap_expression(&sat.expression),
        _ => expr,
    }
}

fn property_name<'k>(key: &'k PropertyKey) -> Option<&'k str> {
    match key {
        PropertyKey::StaticIdentifier(id) => Some(id.name.as_str()),
        PropertyKey::StringLiteral(s) => Some(s.value.as_str()),
        _ => None,
    }
}

fn static_string(expr: &Expression) -> Option<String> {
    match unwrap_expression(expr) {
        Expression::StringLiteral(s) => Some(s.value.to_string()),
        Expression::TemplateLiteral(t) if t.expressions.is_empty() => t
            .quasis
            .first()
            .and_then(|q| q.value.cooked.as_ref())
            .map(|cooked| cooked.to_string()),
        _ => None,
    }
}

fn static_bool(expr: &Expression) -> Option<bool> {
    match unwrap_expression(expr) {
        Expression::BooleanLiteral(b) => Some(b.value),
        _ => None,
    }
}

fn static_string_list(expr: &Expression) -> Option<Vec<String>> {
    let Expression::ArrayExpression(array) = unwrap_expression(expr) else {
        return None;
    };
    array
        .elements
        .iter()
        .map(|element| element.as_expression().and_then(static_string))
        .collect()
}

fn static_one_or_many(expr: &Expression) -> Option<OneOrMany> {
    if let Some(path) = static_string(expr) {
        return Some(OneOrMany::One(path));
    }
    static_string_list(expr).map(OneOrMany::Many)
}

fn static_style_urls(expr: &Expression) -> Option<StyleUrlsInput> {
    match unwrap_expression(expr) {
        Expression::ArrayExpression(_) => static_string_list(expr).map(StyleUrlsInput::List),
        Expression::ObjectExpression(object) => {
            let mut modes = Vec::new();
            for property in &object.properties {
                let ObjectPropertyKind::ObjectProperty(prop) = property else {
                    return None;
                };
                let mode = property_name(&prop.key)?;
                modes.push((mode.to_string(), static_one_or_many(&prop.value)?));
            }
            Some(StyleUrlsInput::Modes(modes))
        }
        _ => None,
    }
}
