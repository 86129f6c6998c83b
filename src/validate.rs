//! Component Annotation Validator
//!
//! Structural and semantic checks a component class must pass before its
//! decorator can be hoisted into static members. Each failure appends one
//! diagnostic bound to the most specific node available. Only non-literal
//! options and extra module exports can report several at once.

use oxc_ast::ast::{Class, ClassElement, Decorator, MethodDefinitionKind};
use oxc_span::{GetSpan, Span};

use crate::config::TransformConfig;
use crate::diagnostics::{
    Diagnostics, ERR_CONSTRUCTOR_ARGS, ERR_ENCAPSULATION, ERR_EXTENDS, ERR_MULTI_DECORATOR,
    ERR_OPTION_NOT_STATIC, ERR_SINGLE_EXPORT, ERR_TAG_INVALID, ERR_TAG_MISSING,
};
use crate::exports::{ExportResolver, ExportedSymbol, SymbolKind};
use crate::options::{find_option_span, ComponentOptions};
use crate::tag::validate_component_tag;

/// Runs every component check. Returns `true` when synthesis may proceed.
pub fn validate_component(
    config: &TransformConfig,
    diagnostics: &mut Diagnostics,
    exports: &dyn ExportResolver,
    options: &ComponentOptions,
    class: &Class,
    decorator_index: usize,
) -> bool {
    let Some(decorator) = class.decorators.get(decorator_index) else {
        return false;
    };

    if let Some(super_class) = &class.super_class {
        diagnostics.error(
            ERR_EXTENDS,
            format!(
                "Classes decorated with @{} can not extend from a base class.",
                config.decorator_name
            ),
            super_class.span(),
        );
        return false;
    }

    if let Some(other) = other_decorator(class, decorator_index) {
        diagnostics.error(
            ERR_MULTI_DECORATOR,
            format!(
                "Classes decorated with @{} can not be decorated with more decorators.",
                config.decorator_name
            ),
            other.span,
        );
        return false;
    }

    if options.is_shadow() && options.is_scoped() {
        diagnostics.error(
            ERR_ENCAPSULATION,
            "Components cannot be \"scoped\" and \"shadow\" at the same time, they are mutually exclusive configurations.",
            find_option_span(options, "scoped").unwrap_or(decorator.span),
        );
        return false;
    }

    if !options.invalid.is_empty() {
        for invalid in &options.invalid {
            diagnostics.error(
                ERR_OPTION_NOT_STATIC,
                format!(
                    "The \"{}\" option of @{} must be {}, written as a literal.",
                    invalid.name, config.decorator_name, invalid.expected
                ),
                invalid.span,
            );
        }
        return false;
    }

    let tag = match options.trimmed_tag() {
        Some(tag) if !tag.is_empty() => tag,
        _ => {
            diagnostics.error(
                ERR_TAG_MISSING,
                format!("tag missing in @{} decorator.", config.decorator_name),
                decorator.span,
            );
            return false;
        }
    };

    if let Some(rule) = validate_component_tag(tag) {
        diagnostics.error(
            ERR_TAG_INVALID,
            format!(
                "{}. Please refer to https://html.spec.whatwg.org/multipage/custom-elements.html#valid-custom-element-name for more info.",
                rule
            ),
            find_option_span(options, "tag").unwrap_or(decorator.span),
        );
        return false;
    }

    if let Some(param) = first_constructor_param(class) {
        diagnostics.error(
            ERR_CONSTRUCTOR_ARGS,
            format!(
                "Classes decorated with @{} can not have a \"constructor\" that takes arguments.",
                config.decorator_name
            ),
            param,
        );
        return false;
    }

    if !config.is_testing {
        let offending = non_type_exports(exports, class);
        for symbol in &offending {
            diagnostics.error(
                ERR_SINGLE_EXPORT,
                format!(
                    "To allow efficient bundling, modules using @{}() can only have a single export which is the component class itself. \"{}\" should be moved to a separate file.",
                    config.decorator_name, symbol.name
                ),
                symbol.report_span(),
            );
        }
        if !offending.is_empty() {
            return false;
        }
    }

    true
}

fn other_decorator<'c, 'a>(class: &'c Class<'a>, decorator_index: usize) -> Option<&'c Decorator<'a>> {
    class
        .decorators
        .iter()
        .enumerate()
        .find(|(i, _)| *i != decorator_index)
        .map(|(_, d)| d)
}

fn first_constructor_param(class: &Class) -> Option<Span> {
    class.body.body.iter().find_map(|element| match element {
        ClassElement::MethodDefinition(method) if method.kind == MethodDefinitionKind::Constructor => {
            let params = &method.value.params;
            params
                .items
                .first()
                .map(|p| p.span)
                .or_else(|| params.rest.as_ref().map(|r| r.span))
        }
        _ => None,
    })
}

/// Exports other than type-only symbols and the component class itself.
fn non_type_exports<'e>(exports: &'e dyn ExportResolver, class: &Class) -> Vec<&'e ExportedSymbol> {
    let class_name = class.id.as_ref().map(|id| id.name.as_str());
    exports
        .exported_symbols()
        .iter()
        .filter(|symbol| !symbol.is_type_only())
        .filter(|symbol| {
            let is_class_itself = symbol.declaration == class.span
                || (class_name.is_some() && symbol.local_name.as_deref() == class_name)
                || (class_name.is_some()
                    && symbol.kind != SymbolKind::External
                    && symbol.local_name.is_none()
                    && Some(symbol.name.as_str()) == class_name);
            !is_class_itself
        })
        .collect()
}
