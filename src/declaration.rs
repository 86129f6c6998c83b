//! Static Declaration Synthesizer
//!
//! Maps validated `ComponentOptions` into the canonical
//! `ComponentDeclaration` and hoists it onto the class as static members.

use oxc_ast::ast::Class;
use serde::Serialize;

use crate::config::TransformConfig;
use crate::diagnostics::Diagnostics;
use crate::exports::ExportResolver;
use crate::literal::LiteralValue;
use crate::options::{decode_component_options, decorator_name, ComponentOptions};
use crate::styles::{compiled_style_urls, normalize_style_urls, CompilerModeStyles};
use crate::validate::validate_component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encapsulation {
    Shadow,
    Scoped,
}

impl Encapsulation {
    pub fn as_str(self) -> &'static str {
        match self {
            Encapsulation::Shadow => "shadow",
            Encapsulation::Scoped => "scoped",
        }
    }
}

/// Canonical, machine-oriented form of a component's metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDeclaration {
    pub class_name: Option<String>,
    pub tag: String,
    pub encapsulation: Option<Encapsulation>,
    pub original_style_urls: CompilerModeStyles,
    pub style_urls: CompilerModeStyles,
    pub assets_dirs: Vec<String>,
    pub styles: Option<String>,
}

/// One synthesized `static <name> = <value>` member.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMember {
    pub name: &'static str,
    pub value: LiteralValue,
}

impl StaticMember {
    fn new(name: &'static str, value: LiteralValue) -> Self {
        Self { name, value }
    }
}

impl ComponentDeclaration {
    /// Only call with options that passed validation.
    pub fn from_options(class_name: Option<String>, options: &ComponentOptions) -> Self {
        let encapsulation = if options.is_shadow() {
            Some(Encapsulation::Shadow)
        } else if options.is_scoped() {
            Some(Encapsulation::Scoped)
        } else {
            None
        };

        let original_style_urls = normalize_style_urls(
            options.style_url.as_ref().map(|s| s.value.as_str()),
            options.style_urls.as_ref().map(|s| &s.value),
        );
        let style_urls = compiled_style_urls(&original_style_urls);

        let mut assets_dirs = options
            .assets_dirs
            .as_ref()
            .map(|dirs| dirs.value.clone())
            .unwrap_or_default();
        if let Some(dir) = &options.assets_dir {
            assets_dirs.push(dir.value.clone());
        }
        assets_dirs.retain(|dir| !dir.trim().is_empty());

        let styles = options
            .styles
            .as_ref()
            .map(|s| s.value.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        ComponentDeclaration {
            class_name,
            tag: options.trimmed_tag().unwrap_or_default().to_string(),
            encapsulation,
            original_style_urls,
            style_urls,
            assets_dirs,
            styles,
        }
    }

    /// Members in emission order, each omitted when its data is empty.
    pub fn static_members(&self) -> Vec<StaticMember> {
        let mut members = vec![StaticMember::new("is", LiteralValue::from(self.tag.as_str()))];

        if let Some(encapsulation) = self.encapsulation {
            members.push(StaticMember::new(
                "encapsulation",
                LiteralValue::from(encapsulation.as_str()),
            ));
        }
        if !self.original_style_urls.is_empty() {
            members.push(StaticMember::new(
                "originalStyleUrls",
                LiteralValue::from(&self.original_style_urls),
            ));
            members.push(StaticMember::new(
                "styleUrls",
                LiteralValue::from(&self.style_urls),
            ));
        }
        if !self.assets_dirs.is_empty() {
            members.push(StaticMember::new(
                "assetsDirs",
                LiteralValue::from(self.assets_dirs.as_slice()),
            ));
        }
        if let Some(styles) = &self.styles {
            members.push(StaticMember::new("styles", LiteralValue::from(styles.as_str())));
        }

        members
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// Hoists the component decorator at `decorator_index` into static members.
///
/// Appends to `new_members` and removes the decorator only when the class
/// validates. A decorator without an options object is left untouched.
pub fn component_decorator_to_static(
    config: &TransformConfig,
    exports: &dyn ExportResolver,
    diagnostics: &mut Diagnostics,
    class: &mut Class,
    new_members: &mut Vec<StaticMember>,
    decorator_index: usize,
) -> Option<ComponentDeclaration> {
    let options = class
        .decorators
        .get(decorator_index)
        .and_then(decode_component_options)?;

    if !validate_component(config, diagnostics, exports, &options, class, decorator_index) {
        return None;
    }

    let class_name = class.id.as_ref().map(|id| id.name.to_string());
    let declaration = ComponentDeclaration::from_options(class_name, &options);
    new_members.extend(declaration.static_members());

    class.decorators.remove(decorator_index);
    Some(declaration)
}

/// Removes class decorators named in `names`, except `keep`.
/// Returns how many were removed.
pub fn strip_class_decorators(class: &mut Class, names: &[String], keep: &str) -> usize {
    let before = class.decorators.len();
    class.decorators.retain(|decorator| match decorator_name(decorator) {
        Some(name) if name != keep => !names.iter().any(|n| n == name),
        _ => true,
    });
    before - class.decorators.len()
}
