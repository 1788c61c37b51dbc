pub mod fixtures;

use iconforge::{FragmentEmitter, GenerateError, GenerateReport, Generator};
use std::path::{Path, PathBuf};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Root of the iconforge package.
pub fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Runs the fragment generator from `source` into `out`, writing `out/icons.rs`.
pub fn generate_fragments(
    source: &Path,
    out: &Path,
    version: Option<&str>,
) -> Result<GenerateReport, GenerateError> {
    Generator::builder()
        .source_dir(source)
        .output_dir(out.join("fragments"))
        .index_file(Some(out.join("icons.rs")))
        .emitter(FragmentEmitter::new().with_icon_set_version(version.map(str::to_string)))
        .build()?
        .run()
}
