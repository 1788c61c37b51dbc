//! Fragment sources for iconforge.
//!
//! This crate provides platform-specific implementations of the
//! `FragmentSource` trait from iconforge-traits.
//!
//! ## Available Sources
//!
//! - [`DirectoryFragmentSource`]: Loads generated fragments from a directory
//! - [`EmbeddedFragmentSource`]: Loads fragments compiled in via `rust-embed`
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory source from iconforge-traits:
//! - [`InMemoryFragmentSource`]: Pre-populated in-memory storage

mod embedded;
mod filesystem;

pub use embedded::EmbeddedFragmentSource;
pub use filesystem::DirectoryFragmentSource;

// Re-export the in-memory source from iconforge-traits for convenience
pub use iconforge_traits::InMemoryFragmentSource;
pub use rust_embed::RustEmbed;
