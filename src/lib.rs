//! iconforge turns a directory of SVG icons into embeddable fragments and
//! renders them at runtime with per-call presentation attributes.
//!
//! ## Build time
//!
//! [`Generator`] scans `<kebab-name>.svg` files, strips the outer `<svg>`
//! element and writes the inner markup through an [`IconEmitter`]:
//! bare fragment files plus an index of [`Icon`] constants
//! ([`FragmentEmitter`]), or one Rust function per icon ([`TemplateEmitter`]).
//!
//! ## Runtime
//!
//! [`IconResolver`] loads fragments from any [`FragmentSource`] on first use,
//! caches them and wraps them according to [`Props`]:
//!
//! ```ignore
//! use iconforge::{Props, bundled_resolver, icons};
//!
//! let resolver = bundled_resolver();
//! let svg = icons::ChevronRight.render(&resolver, &Props::new().with_color("red"))?;
//! ```

mod bundled;
pub mod icons;

pub use bundled::{BundledFragments, BundledResolver, BundledSource, bundled_resolver};

pub use iconforge_codegen::{
    ExtractError, ExtractMode, FragmentEmitter, GenerateError, GenerateReport, GeneratedIcon,
    Generator, GeneratorBuilder, IconDef, IconEmitter, TemplateEmitter, extract_fragment,
    extract_fragment_strict, to_identifier,
};
pub use iconforge_resolver::{FragmentCache, Icon, IconResolver, Props, ResolveError};
pub use iconforge_resource::{DirectoryFragmentSource, EmbeddedFragmentSource};
pub use iconforge_traits::{FragmentSource, InMemoryFragmentSource, SharedFragment, SourceError};
