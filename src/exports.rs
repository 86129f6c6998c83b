//! Module Export Table
//!
//! A narrow symbol-resolution boundary: the validator only needs the list
//! of symbols a module exports, whether each is type-only, and where it was
//! declared. `ModuleExports` answers that from an oxc `Program`; tests can
//! hand the validator any other `ExportResolver`.

use oxc_ast::ast::{
    BindingPattern, Declaration, ExportDefaultDeclarationKind, ImportDeclarationSpecifier,
    ModuleExportName, Program, Statement, TSModuleDeclarationName,
};
use oxc_span::{GetSpan, Span};
use std::collections::HashMap;

const EXPORT_KEYWORD_LEN: u32 = "export".len() as u32;

/// What kind of binding a symbol is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Class,
    Function,
    Variable,
    Enum,
    Namespace,
    Interface,
    TypeAlias,
    Import,
    /// Re-exported from another module; cannot be inspected here.
    External,
}

impl SymbolKind {
    pub fn is_type_only(self) -> bool {
        matches!(self, SymbolKind::Interface | SymbolKind::TypeAlias)
    }
}

/// One symbol exported by a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSymbol {
    /// Name the symbol is exported under (`default` for default exports).
    pub name: String,
    /// Local binding the export refers to, when there is one.
    pub local_name: Option<String>,
    pub kind: SymbolKind,
    /// Exported with `export type` / imported with `import type`.
    pub type_only: bool,
    /// Span of the declaration the symbol resolves to.
    pub declaration: Span,
    /// Span of the leading `export` keyword for inline declarations.
    pub modifier: Option<Span>,
}

impl ExportedSymbol {
    pub fn is_type_only(&self) -> bool {
        self.type_only || self.kind.is_type_only()
    }

    /// Most specific node to report against: the modifier, else the declaration.
    pub fn report_span(&self) -> Span {
        self.modifier.unwrap_or(self.declaration)
    }
}

/// Lists the symbols exported by the module containing a component.
pub trait ExportResolver {
    fn exported_symbols(&self) -> &[ExportedSymbol];
}

impl ExportResolver for Vec<ExportedSymbol> {
    fn exported_symbols(&self) -> &[ExportedSymbol] {
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MODULE EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
struct LocalSymbol {
    kind: SymbolKind,
    type_only: bool,
    declaration: Span,
}

/// Export table of one module, built from its top-level statements.
#[derive(Debug, Clone, Default)]
pub struct ModuleExports {
    locals: HashMap<String, LocalSymbol>,
    exports: Vec<ExportedSymbol>,
}

impl ExportResolver for ModuleExports {
    fn exported_symbols(&self) -> &[ExportedSymbol] {
        &self.exports
    }
}

impl ModuleExports {
    pub fn from_program(program: &Program) -> Self {
        let mut table = ModuleExports::default();

        // Locals first so `export { x }` can resolve declarations that follow it.
        for stmt in &program.body {
            table.collect_locals(stmt);
        }
        for stmt in &program.body {
            table.collect_exports(stmt);
        }

        table
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    fn declare(&mut self, name: &str, kind: SymbolKind, type_only: bool, declaration: Span) {
        self.locals.insert(
            name.to_string(),
            LocalSymbol {
                kind,
                type_only,
                declaration,
            },
        );
    }

    fn collect_locals(&mut self, stmt: &Statement) {
        match stmt {
            Statement::ImportDeclaration(import) => {
                let Some(specifiers) = &import.specifiers else {
                    return;
                };
                for specifier in specifiers {
                    let (local, span, type_only) = match specifier {
                        ImportDeclarationSpecifier::ImportSpecifier(s) => {
                            (&s.local, s.span, s.import_kind.is_type())
                        }
                        ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
                            (&s.local, s.span, false)
                        }
                        ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                            (&s.local, s.span, false)
                        }
                    };
                    self.declare(
                        local.name.as_str(),
                        SymbolKind::Import,
                        type_only || import.import_kind.is_type(),
                        span,
                    );
                }
            }
            Statement::ExportNamedDeclaration(export) => {
                if let Some(decl) = &export.declaration {
                    for (name, kind, span) in declared_names(decl) {
                        self.declare(&name, kind, false, span);
                    }
                }
            }
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                    if let Some(id) = &class.id {
                        self.declare(id.name.as_str(), SymbolKind::Class, false, class.span);
                    }
                }
                ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                    if let Some(id) = &func.id {
                        self.declare(id.name.as_str(), SymbolKind::Function, false, func.span);
                    }
                }
                _ => {}
            },
            _ => {
                if let Some(decl) = stmt.as_declaration() {
                    for (name, kind, span) in declared_names(decl) {
                        self.declare(&name, kind, false, span);
                    }
                }
            }
        }
    }

    fn collect_exports(&mut self, stmt: &Statement) {
        match stmt {
            Statement::ExportNamedDeclaration(export) => {
                let modifier = Span::new(export.span.start, export.span.start + EXPORT_KEYWORD_LEN);
                let export_type_only = export.export_kind.is_type();

                if let Some(decl) = &export.declaration {
                    for (name, kind, span) in declared_names(decl) {
                        self.exports.push(ExportedSymbol {
                            local_name: Some(name.clone()),
                            name,
                            kind,
                            type_only: export_type_only,
                            declaration: span,
                            modifier: Some(modifier),
                        });
                    }
                }

                for specifier in &export.specifiers {
                    let local = module_export_name(&specifier.local);
                    let type_only = export_type_only || specifier.export_kind.is_type();
                    let exported = ExportedSymbol {
                        name: module_export_name(&specifier.exported),
                        local_name: None,
                        kind: SymbolKind::External,
                        type_only,
                        declaration: specifier.span,
                        modifier: None,
                    };

                    if export.source.is_some() {
                        self.exports.push(exported);
                        continue;
                    }

                    let resolved = self.locals.get(&local).copied();
                    self.exports.push(match resolved {
                        Some(symbol) => ExportedSymbol {
                            kind: symbol.kind,
                            type_only: type_only || symbol.type_only,
                            declaration: symbol.declaration,
                            local_name: Some(local),
                            ..exported
                        },
                        None => ExportedSymbol {
                            kind: SymbolKind::Variable,
                            local_name: Some(local),
                            ..exported
                        },
                    });
                }
            }
            Statement::ExportDefaultDeclaration(export) => {
                let modifier = Span::new(export.span.start, export.span.start + EXPORT_KEYWORD_LEN);
                let (local_name, kind, declaration) = match &export.declaration {
                    ExportDefaultDeclarationKind::ClassDeclaration(class) => (
                        class.id.as_ref().map(|id| id.name.to_string()),
                        SymbolKind::Class,
                        class.span,
                    ),
                    ExportDefaultDeclarationKind::FunctionDeclaration(func) => (
                        func.id.as_ref().map(|id| id.name.to_string()),
                        SymbolKind::Function,
                        func.span,
                    ),
                    ExportDefaultDeclarationKind::TSInterfaceDeclaration(iface) => (
                        Some(iface.id.name.to_string()),
                        SymbolKind::Interface,
                        iface.span,
                    ),
                    ExportDefaultDeclarationKind::Identifier(ident) => {
                        let name = ident.name.to_string();
                        match self.locals.get(&name) {
                            Some(symbol) => (Some(name), symbol.kind, symbol.declaration),
                            None => (Some(name), SymbolKind::Variable, ident.span),
                        }
                    }
                    other => (None, SymbolKind::Variable, other.span()),
                };
                self.exports.push(ExportedSymbol {
                    name: "default".to_string(),
                    local_name,
                    kind,
                    type_only: false,
                    declaration,
                    modifier: Some(modifier),
                });
            }
            Statement::ExportAllDeclaration(export) => {
                self.exports.push(ExportedSymbol {
                    name: export
                        .exported
                        .as_ref()
                        .map(module_export_name)
                        .unwrap_or_else(|| "*".to_string()),
                    local_name: None,
                    kind: SymbolKind::External,
                    type_only: export.export_kind.is_type(),
                    declaration: export.span,
                    modifier: None,
                });
            }
            Statement::TSExportAssignment(export) => {
                self.exports.push(ExportedSymbol {
                    name: "export=".to_string(),
                    local_name: None,
                    kind: SymbolKind::Variable,
                    type_only: false,
                    declaration: export.span,
                    modifier: None,
                });
            }
            _ => {}
        }
    }
}

fn module_export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::IdentifierName(id) => id.name.to_string(),
        ModuleExportName::IdentifierReference(id) => id.name.to_string(),
        ModuleExportName::StringLiteral(s) => s.value.to_string(),
    }
}

/// Every name a declaration binds, with its kind and declaration span.
fn declared_names(decl: &Declaration) -> Vec<(String, SymbolKind, Span)> {
    let mut names = Vec::new();
    match decl {
        Declaration::VariableDeclaration(var) => {
            for declarator in &var.declarations {
                let mut bound = Vec::new();
                collect_binding_pattern(&declarator.id, &mut bound);
                for name in bound {
                    names.push((name, SymbolKind::Variable, declarator.span));
                }
            }
        }
        // Overload signatures share the implementation's binding.
        Declaration::FunctionDeclaration(func) if func.body.is_none() && !func.declare => {}
        Declaration::FunctionDeclaration(func) => {
            if let Some(id) = &func.id {
                names.push((id.name.to_string(), SymbolKind::Function, func.span));
            }
        }
        Declaration::ClassDeclaration(class) => {
            if let Some(id) = &class.id {
                names.push((id.name.to_string(), SymbolKind::Class, class.span));
            }
        }
        Declaration::TSInterfaceDeclaration(iface) => {
            names.push((iface.id.name.to_string(), SymbolKind::Interface, iface.span));
        }
        Declaration::TSTypeAliasDeclaration(alias) => {
            names.push((alias.id.name.to_string(), SymbolKind::TypeAlias, alias.span));
        }
        Declaration::TSEnumDeclaration(en) => {
            names.push((en.id.name.to_string(), SymbolKind::Enum, en.span));
        }
        Declaration::TSModuleDeclaration(module) => {
            if let TSModuleDeclarationName::Identifier(id) = &module.id {
                names.push((id.name.to_string(), SymbolKind::Namespace, module.span));
            }
        }
        _ => {}
    }
    names
}

fn collect_binding_pattern(pattern: &BindingPattern, names: &mut Vec<String>) {
    match pattern {
        BindingPattern::BindingIdentifier(id) => {
            names.push(id.name.to_string());
        }
        BindingPattern::ObjectPattern(obj) => {
            for prop in &obj.properties {
                collect_binding_pattern(&prop.value, names);
            }
            if let Some(rest) = &obj.rest {
                collect_binding_pattern(&rest.argument, names);
            }
        }
        BindingPattern::ArrayPattern(arr) => {
            for pattern in arr.elements.iter().flatten() {
                collect_binding_pattern(pattern, names);
            }
            if let Some(rest) = &arr.rest {
                collect_binding_pattern(&rest.argument, names);
            }
        }
        _ => {}
    }
}
