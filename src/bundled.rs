//! The icon set compiled into this crate.
//!
//! `assets/fragments/` is produced by `iconforge generate` from
//! `assets/icons/`, together with the [`icons`](crate::icons) index.

use iconforge_resolver::IconResolver;
use iconforge_resource::EmbeddedFragmentSource;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/fragments/"]
pub struct BundledFragments;

pub type BundledSource = EmbeddedFragmentSource<BundledFragments>;
pub type BundledResolver = IconResolver<BundledSource>;

/// A resolver over the bundled set with a fresh, empty cache.
pub fn bundled_resolver() -> BundledResolver {
    IconResolver::new(BundledSource::new())
}
