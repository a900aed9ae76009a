pub mod casing;
pub mod checksum;
pub mod verifier;

pub use crate::domain::model::{IdentityNumber, VerificationOutcome, VerificationRequest};
pub use crate::domain::ports::{ConfigProvider, DirectoryService};
pub use crate::utils::error::Result;
