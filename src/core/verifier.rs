use crate::adapters::soap::SoapDirectoryService;
use crate::config::toml_config::DirectoryConfig;
use crate::core::casing::to_turkish_uppercase;
use crate::domain::model::VerificationRequest;
use crate::domain::ports::DirectoryService;
use crate::utils::error::{KimlikError, Result};

/// Forwards identity tuples to a [`DirectoryService`].
///
/// Names are uppercased with Turkish rules before they leave this type, and
/// every failure of the underlying service is reported as
/// [`KimlikError::DirectoryUnavailable`] carrying the original message.
pub struct RemoteVerifier<D: DirectoryService> {
    directory: D,
}

impl<D: DirectoryService> RemoteVerifier<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    pub async fn verify(
        &self,
        identity_number: &str,
        first_name: &str,
        last_name: &str,
        birth_year: i32,
    ) -> Result<bool> {
        let request = VerificationRequest::new(identity_number, first_name, last_name, birth_year);
        self.verify_request(&request).await
    }

    /// Sends `request` with its names uppercased; other fields go through untouched.
    pub async fn verify_request(&self, request: &VerificationRequest) -> Result<bool> {
        let normalized = VerificationRequest {
            identity_number: request.identity_number.clone(),
            first_name: to_turkish_uppercase(&request.first_name),
            last_name: to_turkish_uppercase(&request.last_name),
            birth_year: request.birth_year,
        };

        tracing::debug!(
            "Verifying identity number {} (birth year {}) against directory",
            normalized.identity_number,
            normalized.birth_year
        );

        match self.directory.verify(&normalized).await {
            Ok(verified) => {
                tracing::debug!("Directory answered verified={}", verified);
                Ok(verified)
            }
            Err(e) => {
                tracing::warn!("Directory verification failed: {}", e);
                Err(KimlikError::DirectoryUnavailable {
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Checks the tuple against the official directory service.
pub async fn verify_remote(
    identity_number: &str,
    first_name: &str,
    last_name: &str,
    birth_year: i32,
) -> Result<bool> {
    let verifier = RemoteVerifier::new(SoapDirectoryService::new(DirectoryConfig::default()));
    verifier
        .verify(identity_number, first_name, last_name, birth_year)
        .await
}
