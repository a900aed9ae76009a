use crate::domain::model::VerificationRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The remote directory that confirms whether an identity tuple matches.
///
/// Implementations receive names exactly as they should be sent on the wire;
/// casing is the caller's concern.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn verify(&self, request: &VerificationRequest) -> Result<bool>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn soap_action(&self) -> &str;
    fn user_agent(&self) -> Option<&str>;
}
