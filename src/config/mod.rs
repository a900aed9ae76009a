pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::{DirectoryConfig, TomlConfig};
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "tc-kimlik")]
    #[command(about = "Validate Turkish national identity numbers and verify them against the NVI directory")]
    pub struct CliConfig {
        #[arg(long, global = true, help = "TOML file with a [directory] table")]
        pub config: Option<String>,

        #[arg(long, global = true, help = "Override the directory service endpoint")]
        pub endpoint: Option<String>,

        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON lines")]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Run the offline checksum over one or more numbers
        Check {
            #[arg(required = true)]
            numbers: Vec<String>,

            #[arg(long)]
            json: bool,
        },
        /// Ask the directory service whether the identity tuple matches
        Verify {
            #[arg(long)]
            identity_number: String,

            #[arg(long)]
            first_name: String,

            #[arg(long)]
            last_name: String,

            #[arg(long, allow_hyphen_values = true)]
            birth_year: i32,

            #[arg(long)]
            json: bool,
        },
    }

    impl CliConfig {
        /// File settings first, then `--endpoint` on top. The result is validated.
        pub fn directory_config(&self) -> Result<DirectoryConfig> {
            let mut directory = match &self.config {
                Some(path) => TomlConfig::from_file(path)?.directory,
                None => DirectoryConfig::default(),
            };

            if let Some(endpoint) = &self.endpoint {
                directory = directory.with_endpoint(endpoint.clone());
            }

            directory.validate()?;
            Ok(directory)
        }
    }

}
