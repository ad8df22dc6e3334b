//! Version parsing and update checks for plugin distributions
//!
//! ```no_run
//! use plugin_update_check::{Endpoint, UpdateChecker, Version};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let checker = UpdateChecker::builder()
//!     .endpoint(Endpoint::Modrinth)
//!     .current_version(Version::parse("4.6.0")?)
//!     .resource("huskhomes")
//!     .build()?;
//!
//! let completed = checker.check().await;
//! if !completed.is_up_to_date() {
//!     println!("Update available: {}", completed.latest_version());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod version;

pub use config::CheckerConfig;
pub use version::checker::{Completed, UpdateChecker, UpdateCheckerBuilder};
pub use version::endpoint::{Endpoint, VersionSource};
pub use version::error::{
    BuildError, CheckError, EndpointError, ParseEndpointError, ParseVersionError,
};
pub use version::types::Version;
