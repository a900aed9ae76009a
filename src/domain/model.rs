use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::KimlikError;

pub const IDENTITY_NUMBER_LEN: usize = 11;

/// An 11-digit national identity number that passed the format check
/// (`^[1-9][0-9]{10}$`). The checksum is not implied; see
/// [`IdentityNumber::has_valid_checksum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityNumber {
    digits: [u8; IDENTITY_NUMBER_LEN],
}

impl IdentityNumber {
    /// Returns `None` for anything other than 11 ASCII digits with a non-zero first digit.
    pub fn parse(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();
        if bytes.len() != IDENTITY_NUMBER_LEN || bytes[0] == b'0' {
            return None;
        }

        let mut digits = [0u8; IDENTITY_NUMBER_LEN];
        for (slot, byte) in digits.iter_mut().zip(bytes) {
            if !byte.is_ascii_digit() {
                return None;
            }
            *slot = byte - b'0';
        }

        Some(Self { digits })
    }

    pub fn digits(&self) -> &[u8; IDENTITY_NUMBER_LEN] {
        &self.digits
    }

    pub fn has_valid_checksum(&self) -> bool {
        let mut prefix = [0u8; 9];
        prefix.copy_from_slice(&self.digits[..9]);
        let (tenth, eleventh) = crate::core::checksum::checksum_digits(&prefix);
        self.digits[9] == tenth && self.digits[10] == eleventh
    }
}

impl FromStr for IdentityNumber {
    type Err = KimlikError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| KimlikError::ValidationError {
            message: format!(
                "'{}' is not an identity number: expected 11 digits with a non-zero first digit",
                s
            ),
        })
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Fields forwarded to the directory service. No invariants are enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub identity_number: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_year: i32,
}

impl VerificationRequest {
    pub fn new(
        identity_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_year: i32,
    ) -> Self {
        Self {
            identity_number: identity_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    pub identity_number: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecksumOutcome {
    pub identity_number: String,
    pub valid: bool,
}
