pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::soap::SoapDirectoryService;
pub use config::toml_config::{DirectoryConfig, TomlConfig};
pub use core::checksum::validate_checksum;
pub use core::verifier::{verify_remote, RemoteVerifier};
pub use domain::model::{IdentityNumber, VerificationRequest};
pub use domain::ports::DirectoryService;
pub use utils::error::{KimlikError, Result};
