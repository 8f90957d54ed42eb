use alloy::signers::local::{LocalSigner, PrivateKeySigner};
use eyre::{eyre, Context, Result};
use std::fs;

use crate::config::PrivateKey;

impl PrivateKey {
    /// Resolves the deployer's signer from the configured credential source.
    pub fn wallet(&self) -> Result<PrivateKeySigner> {
        if let Some(key) = &self.private_key {
            return parse_key(key);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return parse_key(&key);
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!(
            "no private key configured; set PRIVATE_KEY or pass a key source"
        ))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        LocalSigner::decrypt_keystore(keystore, password).wrap_err("could not decrypt keystore")
    }
}

fn parse_key(key: &str) -> Result<PrivateKeySigner> {
    let key = key.trim();
    key.strip_prefix("0x")
        .unwrap_or(key)
        .parse::<PrivateKeySigner>()
        .wrap_err("invalid private key")
}
