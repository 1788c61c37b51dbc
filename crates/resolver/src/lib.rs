//! Runtime icon rendering.
//!
//! An [`IconResolver`] pulls an icon's fragment from a
//! [`FragmentSource`](iconforge_traits::FragmentSource) on first use, keeps it
//! in its [`FragmentCache`] for the life of the resolver, and wraps it in an
//! `<svg>` element built from [`Props`].
//!
//! ```ignore
//! use iconforge_resolver::{IconResolver, Props};
//! use iconforge_traits::InMemoryFragmentSource;
//!
//! let resolver = IconResolver::new(InMemoryFragmentSource::from_pairs([("x", "<path/>")]));
//! let svg = resolver.resolve("x", &Props::new().with_color("red"))?;
//! ```

mod cache;
mod error;
mod icon;
mod props;
mod resolver;

pub use cache::FragmentCache;
pub use error::ResolveError;
pub use icon::Icon;
pub use props::{DEFAULT_FILL, DEFAULT_SIZE, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH, Props};
pub use resolver::IconResolver;
