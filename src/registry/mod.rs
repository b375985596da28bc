//! Package registry lookups.
//!
//! A missing release is an expected answer, not an error: the lookup
//! returns `Option` and every transport or decoding failure collapses into
//! `None` inside the implementation.

pub mod http;
pub mod mock;

pub use http::HttpRegistry;
pub use mock::MockRegistry;

use crate::domain::ReleaseMetadata;

/// Read access to the registry's record of published releases
pub trait Registry {
    /// Metadata of the latest published release of `package`, if any
    fn latest(&self, package: &str) -> Option<ReleaseMetadata>;
}

impl<T: Registry + ?Sized> Registry for &T {
    fn latest(&self, package: &str) -> Option<ReleaseMetadata> {
        (**self).latest(package)
    }
}
