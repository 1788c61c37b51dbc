use crate::error::ResolveError;
use crate::props::Props;
use crate::resolver::IconResolver;
use iconforge_traits::FragmentSource;
use std::fmt;

/// A typed handle to one icon of a generated set.
///
/// Generated indexes declare one constant per icon, e.g.
/// `pub const ChevronRight: Icon = Icon::new("chevron-right");`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Icon {
    name: &'static str,
}

impl Icon {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The kebab-case lookup name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn render<S: FragmentSource>(
        &self,
        resolver: &IconResolver<S>,
        props: &Props,
    ) -> Result<String, ResolveError> {
        resolver.resolve(self.name, props)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
