pub mod fragment;

pub use fragment::{FragmentSource, InMemoryFragmentSource, SharedFragment, SourceError};
