#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_span::Span;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// DIAGNOSTIC CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_EXTENDS: &str = "C-ERR-EXTENDS";
pub const ERR_MULTI_DECORATOR: &str = "C-ERR-MULTI-DECORATOR";
pub const ERR_ENCAPSULATION: &str = "C-ERR-ENCAPSULATION";
pub const ERR_TAG_MISSING: &str = "C-ERR-TAG-MISSING";
pub const ERR_TAG_INVALID: &str = "C-ERR-TAG-INVALID";
pub const ERR_SINGLE_EXPORT: &str = "C-ERR-SINGLE-EXPORT";
pub const ERR_CONSTRUCTOR_ARGS: &str = "C-ERR-CONSTRUCTOR-ARGS";
pub const ERR_OPTION_NOT_STATIC: &str = "C-ERR-OPTION-NOT-STATIC";

fn get_hint(code: &str) -> &'static str {
    match code {
        ERR_EXTENDS => {
            "The compiler swaps the runtime base class per output target (lazy wrapper or plain element)."
        }
        ERR_MULTI_DECORATOR => "Component metadata must be statically analyzable at the class level.",
        ERR_ENCAPSULATION => "Pick one of `shadow: true` or `scoped: true`.",
        ERR_TAG_MISSING => "Every component needs a `tag` naming its custom element.",
        ERR_TAG_INVALID => {
            "See https://html.spec.whatwg.org/multipage/custom-elements.html#valid-custom-element-name"
        }
        ERR_SINGLE_EXPORT => "Move any other exports to a separate module.",
        ERR_CONSTRUCTOR_ARGS => "Pass data to components through decorated class properties instead.",
        ERR_OPTION_NOT_STATIC => "Component options must be literal values.",
        _ => "",
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DIAGNOSTIC
// ═══════════════════════════════════════════════════════════════════════════════

/// One validation failure bound to a source node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub code: String,
    pub level: String,
    pub message: String,
    pub file: String,
    pub start: u32,
    pub end: u32,
    /// 1-based, filled in by [`Diagnostics::resolve_locations`].
    pub line: u32,
    /// 1-based, filled in by [`Diagnostics::resolve_locations`].
    pub column: u32,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: &str, message: impl Into<String>, span: Span) -> Self {
        let hint = get_hint(code);
        Diagnostic {
            code: code.to_string(),
            level: "error".to_string(),
            message: message.into(),
            file: String::new(),
            start: span.start,
            end: span.end,
            line: 0,
            column: 0,
            hints: if hint.is_empty() {
                vec![]
            } else {
                vec![hint.to_string()]
            },
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Text covered by this diagnostic's span.
    pub fn snippet<'s>(&self, source: &'s str) -> &'s str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{} [{}] {}",
            self.file, self.line, self.column, self.code, self.message
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COLLECTOR
// ═══════════════════════════════════════════════════════════════════════════════

/// Append-only diagnostics list shared by every class of a compilation unit.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    file: String,
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, mut diagnostic: Diagnostic) {
        if diagnostic.file.is_empty() {
            diagnostic.file = self.file.clone();
        }
        self.items.push(diagnostic);
    }

    pub fn error(&mut self, code: &str, message: impl Into<String>, span: Span) {
        self.push(Diagnostic::error(code, message, span));
    }

    pub fn extend(&mut self, other: Diagnostics) {
        for diagnostic in other.items {
            self.push(diagnostic);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.level == "error")
    }

    /// Fill `line`/`column` of every unresolved diagnostic from `source`.
    pub fn resolve_locations(&mut self, source: &str) {
        for diagnostic in self.items.iter_mut().filter(|d| d.line == 0) {
            let (line, column) = line_column(source, diagnostic.start);
            diagnostic.line = line;
            diagnostic.column = column;
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

fn line_column(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() as u32 + 1;
    (line, column)
}
