//! Style Path Normalizer
//!
//! Collapses the accepted shapes of style sources (`styleUrl` string,
//! `styleUrls` list, `styleUrls` per-mode map) into a single ordered
//! mode → paths map, and derives the compiled `.css` counterpart of it.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::Path;

/// Reserved mode key for style sources not tied to an explicit mode.
pub const DEFAULT_STYLE_MODE: &str = "$";

/// Extension every compiled style path ends with.
pub const COMPILED_STYLE_EXTENSION: &str = "css";

// ═══════════════════════════════════════════════════════════════════════════════
// INPUT SHAPES
// ═══════════════════════════════════════════════════════════════════════════════

/// A value written either as a single path or as a list of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            OneOrMany::One(path) => vec![path.clone()],
            OneOrMany::Many(paths) => paths.clone(),
        }
    }
}

/// The two accepted shapes of `styleUrls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleUrlsInput {
    /// Flat list, applies to the default mode.
    List(Vec<String>),
    /// Mode name → path or list, in source order.
    Modes(Vec<(String, OneOrMany)>),
}

impl From<&CompilerModeStyles> for StyleUrlsInput {
    fn from(styles: &CompilerModeStyles) -> Self {
        StyleUrlsInput::Modes(
            styles
                .iter()
                .map(|(mode, paths)| (mode.to_string(), OneOrMany::Many(paths.to_vec())))
                .collect(),
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILER MODE STYLES
// ═══════════════════════════════════════════════════════════════════════════════

/// Insertion-ordered map from style mode to a non-empty list of paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerModeStyles {
    entries: Vec<(String, Vec<String>)>,
}

impl CompilerModeStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, mode: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(m, _)| m == mode)
            .map(|(_, paths)| paths.as_slice())
    }

    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(mode, _)| mode.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(mode, paths)| (mode.as_str(), paths.as_slice()))
    }

    /// Appends `paths` to `mode`, creating the mode at the end if needed.
    /// Empty path lists never create a mode.
    pub fn append(&mut self, mode: &str, paths: Vec<String>) {
        if paths.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|(m, _)| m == mode) {
            Some((_, existing)) => existing.extend(paths),
            None => self.entries.push((mode.to_string(), paths)),
        }
    }

    /// Puts `paths` in front of whatever `mode` already holds.
    pub fn prepend(&mut self, mode: &str, mut paths: Vec<String>) {
        if paths.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|(m, _)| m == mode) {
            Some((_, existing)) => {
                paths.append(existing);
                *existing = paths;
            }
            None => self.entries.push((mode.to_string(), paths)),
        }
    }

    /// Applies `f` to every path of every mode.
    pub fn map_paths(&self, f: impl Fn(&str) -> String) -> Self {
        CompilerModeStyles {
            entries: self
                .entries
                .iter()
                .map(|(mode, paths)| (mode.clone(), paths.iter().map(|p| f(p.as_str())).collect()))
                .collect(),
        }
    }
}

impl Serialize for CompilerModeStyles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (mode, paths) in &self.entries {
            map.serialize_entry(mode, paths)?;
        }
        map.end()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NORMALIZATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Normalizes `styleUrl` and `styleUrls` into one per-mode map.
///
/// `styleUrl` lands in the default mode ahead of any flat `styleUrls`
/// list. With a per-mode map, `styleUrl` only ever joins the default mode.
pub fn normalize_style_urls(
    style_url: Option<&str>,
    style_urls: Option<&StyleUrlsInput>,
) -> CompilerModeStyles {
    let mut default_mode_styles: Vec<String> = style_url
        .filter(|url| !url.trim().is_empty())
        .map(|url| vec![url.to_string()])
        .unwrap_or_default();

    let mut styles = CompilerModeStyles::new();

    match style_urls {
        Some(StyleUrlsInput::List(paths)) => {
            default_mode_styles.extend(paths.iter().cloned());
        }
        Some(StyleUrlsInput::Modes(modes)) => {
            for (mode, value) in modes {
                styles.append(mode, value.to_vec());
            }
        }
        None => {}
    }

    styles.prepend(DEFAULT_STYLE_MODE, default_mode_styles);
    styles
}

/// Same map with every path pointing at its compiled `.css` output.
pub fn compiled_style_urls(styles: &CompilerModeStyles) -> CompilerModeStyles {
    styles.map_paths(compiled_style_path)
}

/// `dir/name.ext` → `dir/name.css`, keeping the directory as written.
pub fn compiled_style_path(path: &str) -> String {
    let split = path.rfind(|c: char| c == '/' || c == '\\').map(|i| i + 1).unwrap_or(0);
    let (dir, file) = path.split_at(split);
    let stem = Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file);
    format!("{}{}.{}", dir, stem, COMPILED_STYLE_EXTENSION)
}
