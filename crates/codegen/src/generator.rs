// crates/codegen/src/generator.rs

use crate::emit::{FragmentEmitter, IconDef, IconEmitter};
use crate::error::{GenerateError, Result};
use crate::extract::ExtractMode;
use crate::naming::lookup_name;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of one generated icon.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub name: String,
    pub identifier: String,
    pub artifact: PathBuf,
    /// True when extraction produced no markup (lenient mode only).
    pub empty: bool,
}

/// Summary of a generation batch.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub index_file: Option<PathBuf>,
    pub emitter: String,
    pub icons: Vec<GeneratedIcon>,
}

impl GenerateReport {
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icons whose source could not be unwrapped.
    pub fn empty_fragments(&self) -> impl Iterator<Item = &GeneratedIcon> {
        self.icons.iter().filter(|icon| icon.empty)
    }
}

/// Turns a directory of `<kebab-name>.svg` files into emitted artifacts.
#[derive(Debug)]
pub struct Generator {
    source_dir: PathBuf,
    output_dir: PathBuf,
    index_file: Option<PathBuf>,
    emitter: Box<dyn IconEmitter>,
    mode: ExtractMode,
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn index_file(&self) -> Option<&Path> {
        self.index_file.as_deref()
    }

    pub fn mode(&self) -> ExtractMode {
        self.mode
    }

    /// Reads and unwraps every `.svg` file in the source directory.
    ///
    /// Icons come back sorted by lookup name. Nothing is written.
    pub fn scan(&self) -> Result<Vec<IconDef>> {
        let entries = fs::read_dir(&self.source_dir)
            .map_err(|e| GenerateError::io(&self.source_dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| GenerateError::io(&self.source_dir, e))?;
            paths.push(entry.path());
        }
        paths.sort();

        let mut icons = Vec::with_capacity(paths.len());
        let mut seen: HashMap<String, String> = HashMap::new();

        for path in paths {
            let Some(name) = lookup_name(&path) else {
                continue;
            };
            if path.is_dir() {
                log::debug!("Skipping directory {}", path.display());
                continue;
            }

            let content = fs::read_to_string(&path).map_err(|e| GenerateError::io(&path, e))?;
            let fragment = self
                .mode
                .extract(&content)
                .map_err(|source| GenerateError::Malformed {
                    path: path.clone(),
                    source,
                })?;
            if fragment.is_empty() {
                log::warn!("{} produced an empty fragment", path.display());
            }

            let icon = IconDef::new(name, fragment);
            for declared in self.emitter.declared_names(&icon) {
                if let Some(previous) = seen.insert(declared.clone(), icon.name.clone()) {
                    return Err(GenerateError::Config(format!(
                        "icons '{}' and '{}' both generate '{}'",
                        previous, icon.name, declared
                    )));
                }
            }
            log::debug!("Extracted {} -> {}", icon.name, icon.identifier);
            icons.push(icon);
        }

        Ok(icons)
    }

    /// The output directory as seen from `index_dir`. Both must exist.
    fn artifact_dir_from(&self, index_dir: &Path) -> Result<PathBuf> {
        let output = fs::canonicalize(&self.output_dir)
            .map_err(|e| GenerateError::io(&self.output_dir, e))?;
        let base = fs::canonicalize(index_dir).map_err(|e| GenerateError::io(index_dir, e))?;
        Ok(pathdiff::diff_paths(&output, &base).unwrap_or(output))
    }

    /// Runs the whole batch: scan, write one artifact per icon, then the index.
    ///
    /// The first failure aborts the batch.
    pub fn run(&self) -> Result<GenerateReport> {
        let icons = self.scan()?;

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| GenerateError::io(&self.output_dir, e))?;

        let mut generated = Vec::with_capacity(icons.len());
        for icon in &icons {
            let artifact = self.output_dir.join(self.emitter.artifact_name(icon));
            fs::write(&artifact, self.emitter.render_artifact(icon))
                .map_err(|e| GenerateError::io(&artifact, e))?;
            generated.push(GeneratedIcon {
                name: icon.name.clone(),
                identifier: icon.identifier.clone(),
                artifact,
                empty: icon.fragment.is_empty(),
            });
        }

        if let Some(index_file) = &self.index_file {
            let index_dir = index_file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            fs::create_dir_all(index_dir).map_err(|e| GenerateError::io(index_dir, e))?;
            let artifact_dir = self.artifact_dir_from(index_dir)?;
            fs::write(index_file, self.emitter.render_index(&icons, &artifact_dir))
                .map_err(|e| GenerateError::io(index_file, e))?;
        }

        log::info!(
            "Generated {} icon(s) into {} using the {} emitter",
            generated.len(),
            self.output_dir.display(),
            self.emitter.name()
        );

        Ok(GenerateReport {
            source_dir: self.source_dir.clone(),
            output_dir: self.output_dir.clone(),
            index_file: self.index_file.clone(),
            emitter: self.emitter.name().to_string(),
            icons: generated,
        })
    }
}

/// Configures a [`Generator`].
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    index_file: Option<PathBuf>,
    emitter: Option<Box<dyn IconEmitter>>,
    mode: ExtractMode,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Directory holding the `<kebab-name>.svg` source files.
    pub fn source_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Directory receiving one artifact per icon. Created if missing.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Optional index file listing every icon.
    pub fn index_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        self.index_file = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Output strategy; defaults to [`FragmentEmitter`].
    pub fn emitter<E: IconEmitter + 'static>(mut self, emitter: E) -> Self {
        self.emitter = Some(Box::new(emitter));
        self
    }

    pub fn mode(mut self, mode: ExtractMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn strict(self, strict: bool) -> Self {
        self.mode(if strict {
            ExtractMode::Strict
        } else {
            ExtractMode::Lenient
        })
    }

    pub fn build(self) -> Result<Generator> {
        let source_dir = self
            .source_dir
            .ok_or_else(|| GenerateError::Config("no source directory configured".to_string()))?;
        let output_dir = self
            .output_dir
            .ok_or_else(|| GenerateError::Config("no output directory configured".to_string()))?;

        Ok(Generator {
            source_dir,
            output_dir,
            index_file: self.index_file,
            emitter: self
                .emitter
                .unwrap_or_else(|| Box::new(FragmentEmitter::default())),
            mode: self.mode,
        })
    }
}
