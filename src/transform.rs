//! Host driver: parse a module, run the decorator pass on every class,
//! print the rewritten program.

use log::debug;
use oxc_allocator::Allocator;
use oxc_ast::ast::Class;
use oxc_ast::AstBuilder;
use oxc_ast_visit::{walk_mut, VisitMut};
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::Serialize;
use std::path::Path;

use crate::config::TransformConfig;
use crate::declaration::{component_decorator_to_static, strip_class_decorators, ComponentDeclaration};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::TransformError;
use crate::exports::{ExportResolver, ModuleExports};
use crate::literal::static_property;
use crate::options::decorator_name;

/// Result of transforming one source file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    pub file_path: String,
    pub code: String,
    pub components: Vec<ComponentDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TransformOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == "error")
    }
}

struct ComponentTransformer<'a, 'c> {
    ast: AstBuilder<'a>,
    config: &'c TransformConfig,
    exports: &'c dyn ExportResolver,
    diagnostics: &'c mut Diagnostics,
    components: Vec<ComponentDeclaration>,
}

impl<'a, 'c> ComponentTransformer<'a, 'c> {
    fn find_component_decorator(&self, class: &Class<'a>) -> Option<usize> {
        class
            .decorators
            .iter()
            .position(|d| decorator_name(d) == Some(self.config.decorator_name.as_str()))
    }

    fn transform_class(&mut self, class: &mut Class<'a>) {
        if self.find_component_decorator(class).is_none() {
            return;
        }

        strip_class_decorators(
            class,
            &self.config.decorators_to_remove,
            &self.config.decorator_name,
        );
        let Some(index) = self.find_component_decorator(class) else {
            return;
        };

        let class_name = class
            .id
            .as_ref()
            .map(|id| id.name.to_string())
            .unwrap_or_else(|| "<anonymous>".to_string());

        let mut members = Vec::new();
        let declaration = component_decorator_to_static(
            self.config,
            self.exports,
            self.diagnostics,
            class,
            &mut members,
            index,
        );

        let Some(declaration) = declaration else {
            debug!("skipped component class {}", class_name);
            return;
        };

        for member in &members {
            class
                .body
                .body
                .push(static_property(self.ast, member.name, &member.value));
        }
        debug!(
            "hoisted @{} on {} <{}> into {} static members",
            self.config.decorator_name,
            class_name,
            declaration.tag,
            members.len()
        );
        self.components.push(declaration);
    }
}

impl<'a, 'c> VisitMut<'a> for ComponentTransformer<'a, 'c> {
    fn visit_class(&mut self, class: &mut Class<'a>) {
        self.transform_class(class);
        walk_mut::walk_class(self, class);
    }
}

fn source_type_for(file_path: &str) -> SourceType {
    let jsx = matches!(
        Path::new(file_path).extension().and_then(|e| e.to_str()),
        Some("tsx" | "jsx")
    );
    SourceType::default()
        .with_typescript(true)
        .with_module(true)
        .with_jsx(jsx)
}

/// Transforms every component class declared in `source`.
pub fn transform_component_source(
    source: &str,
    file_path: &str,
    config: &TransformConfig,
) -> Result<TransformOutput, TransformError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type_for(file_path)).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(TransformError::Parse {
            file: file_path.to_string(),
            message,
        });
    }

    let mut program = ret.program;
    let exports = ModuleExports::from_program(&program);
    let mut diagnostics = Diagnostics::new(file_path);

    let components = {
        let mut transformer = ComponentTransformer {
            ast: AstBuilder::new(&allocator),
            config,
            exports: &exports,
            diagnostics: &mut diagnostics,
            components: Vec::new(),
        };
        transformer.visit_program(&mut program);
        transformer.components
    };

    let code = Codegen::new().build(&program).code;
    diagnostics.resolve_locations(source);

    Ok(TransformOutput {
        file_path: file_path.to_string(),
        code,
        components,
        diagnostics: diagnostics.into_vec(),
    })
}
