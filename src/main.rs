use anyhow::Context;
use clap::Parser;
use tc_kimlik::config::Command;
use tc_kimlik::domain::model::{ChecksumOutcome, VerificationOutcome};
use tc_kimlik::utils::logger;
use tc_kimlik::{validate_checksum, CliConfig, KimlikError, RemoteVerifier, SoapDirectoryService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let exit_code = match &config.command {
        Command::Check { numbers, json } => run_check(numbers, *json)?,
        Command::Verify {
            identity_number,
            first_name,
            last_name,
            birth_year,
            json,
        } => {
            match run_verify(&config, identity_number, first_name, last_name, *birth_year, *json)
                .await
            {
                Ok(code) => code,
                Err(e) => {
                    tracing::error!("❌ Verification failed: {}", e);
                    eprintln!("❌ {}", e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    e.exit_code()
                }
            }
        }
    };

    std::process::exit(exit_code);
}

fn run_check(numbers: &[String], json: bool) -> anyhow::Result<i32> {
    let outcomes: Vec<ChecksumOutcome> = numbers
        .iter()
        .map(|number| ChecksumOutcome {
            identity_number: number.clone(),
            valid: validate_checksum(number),
        })
        .collect();

    if json {
        let rendered =
            serde_json::to_string_pretty(&outcomes).context("rendering checksum results")?;
        println!("{}", rendered);
    } else {
        for outcome in &outcomes {
            let label = if outcome.valid { "valid" } else { "invalid" };
            println!("{}: {}", outcome.identity_number, label);
        }
    }

    Ok(if outcomes.iter().all(|o| o.valid) { 0 } else { 1 })
}

async fn run_verify(
    config: &CliConfig,
    identity_number: &str,
    first_name: &str,
    last_name: &str,
    birth_year: i32,
    json: bool,
) -> Result<i32, KimlikError> {
    let directory = config.directory_config()?;
    tracing::info!("Using directory endpoint {}", directory.endpoint);

    if !validate_checksum(identity_number) {
        tracing::warn!(
            "{} fails the offline checksum; the directory will most likely reject it",
            identity_number
        );
    }

    let verifier = RemoteVerifier::new(SoapDirectoryService::new(directory));
    let verified = verifier
        .verify(identity_number, first_name, last_name, birth_year)
        .await?;

    if json {
        let outcome = VerificationOutcome {
            identity_number: identity_number.to_string(),
            verified,
        };
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if verified {
        println!("✅ verified");
    } else {
        println!("❌ not verified");
    }

    Ok(if verified { 0 } else { 1 })
}
