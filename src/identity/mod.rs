use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::ledger::Address;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid secret key hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("secret key must be 32 bytes (64 hex chars), got {0}")]
    Length(usize),
}

/// A calling principal. Its account is derived from the Ed25519 public key.
pub struct Identity {
    signing: SigningKey,
}

impl Identity {
    pub fn generate() -> Self {
        let mut sk_bytes = [0u8; 32];
        OsRng.fill_bytes(&mut sk_bytes);
        Self {
            signing: SigningKey::from_bytes(&sk_bytes),
        }
    }

    pub fn from_secret_hex(sk_hex: &str) -> Result<Self, IdentityError> {
        let sk_bytes = hex::decode(sk_hex.trim())?;
        if sk_bytes.len() != 32 {
            return Err(IdentityError::Length(sk_bytes.len()));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&sk_bytes);
        Ok(Self {
            signing: SigningKey::from_bytes(&arr),
        })
    }

    pub fn secret_hex(&self) -> String {
        hex::encode(self.signing.to_bytes())
    }

    pub fn public_hex(&self) -> String {
        hex::encode(self.signing.verifying_key().as_bytes())
    }

    pub fn address(&self) -> Address {
        address_of(&self.signing.verifying_key())
    }
}

/// Last 20 bytes of `sha256(public key)`.
pub fn address_of(key: &VerifyingKey) -> Address {
    Address::from_digest(&Sha256::digest(key.as_bytes()).into())
}
