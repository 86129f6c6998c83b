//! # Component Decorator → Static Declaration Pass
//!
//! Compiles the `@Component({...})` decorator on a class into literal static
//! members that later build stages read as ground truth:
//!
//! ```text
//! @Component({ tag: 'my-cmp', shadow: true, styleUrl: 'my-cmp.scss' })
//! export class MyCmp {}
//!
//! export class MyCmp {
//!     static is = "my-cmp";
//!     static encapsulation = "shadow";
//!     static originalStyleUrls = { "$": ["my-cmp.scss"] };
//!     static styleUrls = { "$": ["my-cmp.css"] };
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. **Decode** (`options`): the decorator's object literal becomes the
//!    author-facing `ComponentOptions`.
//! 2. **Validate** (`validate`): structural rules, each failure one
//!    `Diagnostic` in the shared `Diagnostics` collector.
//! 3. **Normalize** (`styles`): every `styleUrl`/`styleUrls` shape collapses
//!    into one ordered mode → paths map.
//! 4. **Synthesize** (`declaration`): the canonical `ComponentDeclaration`
//!    is emitted as `StaticMember`s and the decorator is removed.
//!
//! Validation problems never abort a compilation unit; only host faults
//! (I/O, unparseable source, malformed config) surface as `TransformError`.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod config;
mod declaration;
mod diagnostics;
mod discovery;
mod error;
mod exports;
mod literal;
mod options;
mod styles;
mod tag;
mod transform;
mod validate;

#[cfg(test)]
mod transform_tests;
#[cfg(test)]
mod validate_tests;

pub use config::TransformConfig;
pub use declaration::{
    component_decorator_to_static, strip_class_decorators, ComponentDeclaration, Encapsulation,
    StaticMember,
};
pub use diagnostics::*;
pub use discovery::{find_component_sources, transform_component_file, transform_components_in_dir};
pub use error::TransformError;
pub use exports::{ExportResolver, ExportedSymbol, ModuleExports, SymbolKind};
pub use literal::{static_property, LiteralValue};
pub use options::{decode_component_options, decorator_name, ComponentOptions, InvalidOption, Spanned};
pub use styles::{
    compiled_style_path, compiled_style_urls, normalize_style_urls, CompilerModeStyles, OneOrMany,
    StyleUrlsInput, COMPILED_STYLE_EXTENSION, DEFAULT_STYLE_MODE,
};
pub use tag::validate_component_tag;
pub use transform::{transform_component_source, TransformOutput};
pub use validate::validate_component;

/// Transform one component source file. `config_json` is a camelCase
/// `TransformConfig`; missing fields take their defaults.
#[cfg(feature = "napi")]
#[napi]
pub fn transform_component_native(
    source: String,
    file_path: String,
    config_json: Option<String>,
) -> napi::Result<serde_json::Value> {
    let config = TransformConfig::from_json(config_json.as_deref().unwrap_or_default())?;
    let output = transform_component_source(&source, &file_path, &config)?;
    serde_json::to_value(output).map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// Transform every component source under `base_dir`.
#[cfg(feature = "napi")]
#[napi]
pub fn transform_components_in_dir_native(
    base_dir: String,
    config_json: Option<String>,
) -> napi::Result<serde_json::Value> {
    let config = TransformConfig::from_json(config_json.as_deref().unwrap_or_default())?;
    let outputs = transform_components_in_dir(std::path::Path::new(&base_dir), &config);
    serde_json::to_value(outputs).map_err(|e| napi::Error::from_reason(e.to_string()))
}
