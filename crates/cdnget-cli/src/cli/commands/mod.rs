//! CLI command handlers. Each command is in its own file.

mod checksum;
mod fetch;
mod package;

pub use checksum::run_checksum;
pub use fetch::{run_fetch, FetchArgs};
pub use package::{run_package, PackageArgs};

#[cfg(test)]
pub(crate) use package::mismatch_warning;
