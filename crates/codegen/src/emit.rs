//! Output strategies for generated icon artifacts.
//!
//! Emitters are pure: they turn [`IconDef`]s into file names and file
//! contents. The [`Generator`](crate::Generator) owns every filesystem call,
//! so both strategies share the same directory walk and error handling.

use crate::naming::{rust_item_name, rust_module_name};
use std::fmt::{self, Write as _};
use std::path::Path;

const GENERATED_HEADER: &str = "// This file is auto generated. Do not edit.\n";

/// One icon ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDef {
    /// Kebab-case lookup name (the source file stem).
    pub name: String,
    /// PascalCase identifier derived from `name`.
    pub identifier: String,
    /// Inner markup with the `<svg>` envelope removed.
    pub fragment: String,
}

impl IconDef {
    pub fn new(name: impl Into<String>, fragment: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            identifier: crate::naming::to_identifier(&name),
            name,
            fragment: fragment.into(),
        }
    }
}

/// A strategy for shaping generated artifacts.
pub trait IconEmitter: fmt::Debug + Send + Sync {
    /// File name of the per-icon artifact, relative to the output directory.
    fn artifact_name(&self, icon: &IconDef) -> String;

    /// Contents of the per-icon artifact.
    fn render_artifact(&self, icon: &IconDef) -> String;

    /// Contents of the index listing every icon, in the order given.
    ///
    /// `artifact_dir` is the output directory relative to the directory
    /// holding the index file; empty when both are the same.
    fn render_index(&self, icons: &[IconDef], artifact_dir: &Path) -> String;

    /// Rust names the generated code declares for `icon`. Two icons must
    /// never share one.
    fn declared_names(&self, icon: &IconDef) -> Vec<String> {
        vec![rust_item_name(&icon.identifier)]
    }

    /// Returns a human-readable name for this emitter (for logging/reports).
    fn name(&self) -> &'static str;
}

/// Bare fragment files plus a Rust index of `Icon` constants.
///
/// The fragment files are meant to be bundled (e.g. with `rust-embed`) and
/// looked up at runtime by name; the index gives each icon a typed handle.
#[derive(Debug, Clone)]
pub struct FragmentEmitter {
    icon_import: String,
    icon_set_version: Option<String>,
}

impl Default for FragmentEmitter {
    fn default() -> Self {
        Self {
            icon_import: "crate::Icon".to_string(),
            icon_set_version: None,
        }
    }
}

impl FragmentEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path the generated index imports the `Icon` handle type from.
    pub fn with_icon_import(mut self, path: impl Into<String>) -> Self {
        self.icon_import = path.into();
        self
    }

    /// Records the upstream icon set version in the index.
    pub fn with_icon_set_version(mut self, version: Option<String>) -> Self {
        self.icon_set_version = version;
        self
    }
}

impl IconEmitter for FragmentEmitter {
    fn artifact_name(&self, icon: &IconDef) -> String {
        format!("{}.svg", icon.name)
    }

    fn render_artifact(&self, icon: &IconDef) -> String {
        icon.fragment.clone()
    }

    fn render_index(&self, icons: &[IconDef], _artifact_dir: &Path) -> String {
        let mut out = String::from(GENERATED_HEADER);
        out.push_str("#![allow(non_upper_case_globals)]\n\n");
        let _ = writeln!(out, "use {};\n", self.icon_import);

        if let Some(version) = &self.icon_set_version {
            out.push_str("/// Version of the icon set these definitions were generated from.\n");
            let _ = writeln!(out, "pub const ICON_SET_VERSION: &str = {:?};\n", version);
        }

        for icon in icons {
            let _ = writeln!(
                out,
                "pub const {}: Icon = Icon::new({:?});",
                rust_item_name(&icon.identifier),
                icon.name
            );
        }

        out.push_str("\n/// Every icon in this set, in lookup-name order.\n");
        out.push_str("pub const ALL: &[Icon] = &[\n");
        for icon in icons {
            let _ = writeln!(out, "    {},", rust_item_name(&icon.identifier));
        }
        out.push_str("];\n");
        out
    }

    fn name(&self) -> &'static str {
        "fragment"
    }
}

/// One Rust function per icon wrapping its fragment in the `Props` envelope.
///
/// Each artifact is `<name>.rs`; the index is a `mod.rs` wiring them up via
/// `#[path]` so kebab-case file names can stay as they are.
#[derive(Debug, Clone)]
pub struct TemplateEmitter {
    props_import: String,
}

impl Default for TemplateEmitter {
    fn default() -> Self {
        Self {
            props_import: "crate::Props".to_string(),
        }
    }
}

impl TemplateEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path each generated function imports the `Props` type from.
    pub fn with_props_import(mut self, path: impl Into<String>) -> Self {
        self.props_import = path.into();
        self
    }
}

impl IconEmitter for TemplateEmitter {
    fn artifact_name(&self, icon: &IconDef) -> String {
        format!("{}.rs", icon.name)
    }

    fn render_artifact(&self, icon: &IconDef) -> String {
        let mut out = String::from(GENERATED_HEADER);
        let _ = writeln!(out, "use {};\n", self.props_import);
        let _ = writeln!(out, "/// Renders the `{}` icon.", icon.name);
        out.push_str("#[allow(non_snake_case)]\n");
        let _ = writeln!(
            out,
            "pub fn {}(props: &Props) -> String {{",
            rust_item_name(&icon.identifier)
        );
        let _ = writeln!(out, "    props.wrap({})", raw_string_literal(&icon.fragment));
        out.push_str("}\n");
        out
    }

    fn render_index(&self, icons: &[IconDef], artifact_dir: &Path) -> String {
        let mut out = String::from(GENERATED_HEADER);
        for icon in icons {
            let module = rust_module_name(&icon.name);
            let path = artifact_dir.join(self.artifact_name(icon));
            let _ = writeln!(out, "\n#[path = {:?}]", path.display().to_string());
            let _ = writeln!(out, "mod {};", module);
            let _ = writeln!(
                out,
                "pub use {}::{};",
                module,
                rust_item_name(&icon.identifier)
            );
        }
        out
    }

    fn declared_names(&self, icon: &IconDef) -> Vec<String> {
        vec![
            rust_item_name(&icon.identifier),
            format!("mod {}", rust_module_name(&icon.name)),
        ]
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

/// Quotes `s` as a raw string literal with as many `#`s as it needs.
pub(crate) fn raw_string_literal(s: &str) -> String {
    let mut longest = 0;
    let mut current = None;
    for c in s.chars() {
        current = match (c, current) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = current {
            longest = longest.max(n);
        }
    }

    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{s}\"{hashes}")
}
