//! Build-time icon generator.
//!
//! Scans a directory of `<kebab-name>.svg` icons, strips each document's
//! outer `<svg>` element and writes the remaining markup through a pluggable
//! [`IconEmitter`], optionally followed by an index of every icon.
//!
//! ## Key Abstractions
//!
//! - **`extract_fragment`**: the unwrapping routine shared by every emitter
//! - **`to_identifier`**: kebab-case lookup name to PascalCase identifier
//! - **`IconEmitter`**: output strategy (`FragmentEmitter`, `TemplateEmitter`)
//! - **`Generator`**: the directory walk and all file I/O
//!
//! ## Example
//!
//! ```ignore
//! use iconforge_codegen::{FragmentEmitter, Generator};
//!
//! let report = Generator::builder()
//!     .source_dir("assets/icons")
//!     .output_dir("assets/fragments")
//!     .index_file(Some("src/icons.rs"))
//!     .emitter(FragmentEmitter::new())
//!     .build()?
//!     .run()?;
//! println!("{} icons", report.len());
//! ```

pub mod emit;
pub mod error;
pub mod extract;
pub mod generator;
pub mod naming;

pub use emit::{FragmentEmitter, IconDef, IconEmitter, TemplateEmitter};
pub use error::{ExtractError, GenerateError, Result};
pub use extract::{ExtractMode, extract_fragment, extract_fragment_strict};
pub use generator::{GenerateReport, GeneratedIcon, Generator, GeneratorBuilder};
pub use naming::{lookup_name, to_identifier};
