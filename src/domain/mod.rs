//! Domain logic - pure release rules independent of git and the filesystem

pub mod changelog;
pub mod package;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use changelog::Changelog;
pub use package::{PackageDescriptor, ShortName};
pub use prerelease::{PreRelease, PreReleaseType};
pub use tag::{ReleaseTag, TagPattern};
pub use version::Version;
