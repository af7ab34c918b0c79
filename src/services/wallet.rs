//! # Wallet Service
//!
//! Manages the local Solana keypair that identifies the user: loading from a
//! Solana CLI keypair file or base-58 string, generating a fresh keypair, and
//! querying SOL balance. Transaction signing is not handled here; the SDK
//! gateway owns all transaction construction and submission.

use solana_sdk::signature::{Keypair, Signer};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Wallet operation errors
#[derive(Debug, Error)]
pub enum WalletError {
    /// Failed to load keypair from file
    #[error("Keypair load error: {0}")]
    KeypairLoad(String),
    /// Invalid keypair format
    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),
    /// Balance query error
    #[error("Balance error: {0}")]
    Balance(String),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wallet connection status
#[derive(Debug, Clone, PartialEq)]
pub enum WalletStatus {
    /// Not connected
    Disconnected,
    /// Connected with wallet address
    Connected(String),
    /// Connecting in progress
    Connecting,
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected(addr) => Some(addr),
            _ => None,
        }
    }
}

/// Wallet service holding the user's keypair identity.
pub struct WalletService {
    /// Optional keypair (None if not loaded)
    keypair: Option<Keypair>,
    /// Solana RPC endpoint for balance queries
    rpc_url: String,
    /// Current connection status
    status: WalletStatus,
}

impl WalletService {
    /// Create a new, disconnected wallet service.
    ///
    /// # Arguments
    /// * `rpc_url` - Solana RPC endpoint URL (e.g., "https://api.devnet.solana.com")
    pub fn new(rpc_url: &str) -> Self {
        Self {
            keypair: None,
            rpc_url: rpc_url.to_string(),
            status: WalletStatus::Disconnected,
        }
    }

    /// Load a keypair from file.
    ///
    /// Supports both formats in the wild:
    /// - Solana CLI JSON array (64 bytes: secret + public)
    /// - raw base-58 secret string
    pub fn load_keypair_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), WalletError> {
        self.status = WalletStatus::Connecting;

        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| WalletError::KeypairLoad(format!("Failed to read file: {}", e)))?;

        let keypair = if contents.trim().starts_with('[') {
            let bytes: Vec<u8> = serde_json::from_str(&contents)
                .map_err(|e| WalletError::InvalidKeypair(format!("Invalid JSON format: {}", e)))?;
            keypair_from_bytes(&bytes)?
        } else {
            keypair_from_base58(contents.trim())?
        };

        let pubkey = keypair.pubkey().to_string();
        self.keypair = Some(keypair);
        self.status = WalletStatus::Connected(pubkey);

        Ok(())
    }

    /// Load a keypair from a base-58 encoded secret string.
    pub fn load_keypair_from_base58(&mut self, base58_key: &str) -> Result<(), WalletError> {
        self.status = WalletStatus::Connecting;

        let keypair = keypair_from_base58(base58_key.trim())?;

        let pubkey = keypair.pubkey().to_string();
        self.keypair = Some(keypair);
        self.status = WalletStatus::Connected(pubkey);

        Ok(())
    }

    /// Generate a new random keypair.
    ///
    /// # Returns
    /// The public key as a base-58 string.
    pub fn generate_new_keypair(&mut self) -> String {
        let keypair = Keypair::new();
        let pubkey = keypair.pubkey().to_string();

        self.keypair = Some(keypair);
        self.status = WalletStatus::Connected(pubkey.clone());

        pubkey
    }

    /// Current wallet public key, if connected.
    pub fn get_public_key(&self) -> Option<String> {
        self.keypair.as_ref().map(|kp| kp.pubkey().to_string())
    }

    /// Current wallet status.
    pub fn get_status(&self) -> &WalletStatus {
        &self.status
    }

    /// Whether a keypair is loaded.
    pub fn is_connected(&self) -> bool {
        self.keypair.is_some()
    }

    /// RPC endpoint this wallet queries balances against.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Disconnect the wallet, dropping the keypair.
    pub fn disconnect(&mut self) {
        self.keypair = None;
        self.status = WalletStatus::Disconnected;
    }

}

/// Build a keypair from raw secret bytes.
///
/// Accepts the 64-byte Solana CLI layout (secret followed by public key) or
/// a bare 32-byte secret.
fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair, WalletError> {
    let secret: [u8; 32] = match bytes.len() {
        32 | 64 => {
            let mut arr = [0u8; 32];
            arr.copy_from_slice(&bytes[..32]);
            arr
        }
        n => {
            return Err(WalletError::InvalidKeypair(format!(
                "Expected 32 or 64 bytes, got {}",
                n
            )))
        }
    };

    Ok(Keypair::new_from_array(secret))
}

/// Build a keypair from a base-58 encoded secret.
fn keypair_from_base58(base58_key: &str) -> Result<Keypair, WalletError> {
    let bytes = bs58::decode(base58_key)
        .into_vec()
        .map_err(|e| WalletError::InvalidKeypair(format!("Invalid base58: {}", e)))?;

    keypair_from_bytes(&bytes)
}

/// Query a wallet's SOL balance over RPC.
///
/// Uses the blocking RPC client; callers on the async runtime should wrap
/// this in `tokio::task::spawn_blocking`.
pub fn query_balance(rpc_url: &str, address: &str) -> Result<f64, WalletError> {
    use solana_client::rpc_client::RpcClient;
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    let pubkey = Pubkey::from_str(address)
        .map_err(|e| WalletError::Balance(format!("Invalid pubkey: {}", e)))?;

    let rpc_client = RpcClient::new(rpc_url.to_string());
    let lamports = rpc_client
        .get_balance(&pubkey)
        .map_err(|e| WalletError::Balance(format!("Failed to get balance: {}", e)))?;

    Ok(lamports as f64 / 1_000_000_000.0)
}

/// The Solana CLI's default keypair path (`~/.config/solana/id.json`).
pub fn default_keypair_path() -> Option<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()?;

    Some(
        Path::new(&home)
            .join(".config")
            .join("solana")
            .join("id.json"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_creation() {
        let wallet = WalletService::new("https://api.devnet.solana.com");
        assert!(!wallet.is_connected());
        assert_eq!(wallet.get_status(), &WalletStatus::Disconnected);
        assert_eq!(wallet.get_public_key(), None);
    }

    #[test]
    fn test_generate_new_keypair() {
        let mut wallet = WalletService::new("https://api.devnet.solana.com");
        let pubkey = wallet.generate_new_keypair();

        assert!(wallet.is_connected());
        assert_eq!(wallet.get_public_key(), Some(pubkey.clone()));
        assert_eq!(wallet.get_status(), &WalletStatus::Connected(pubkey));
    }

    #[test]
    fn test_disconnect() {
        let mut wallet = WalletService::new("https://api.devnet.solana.com");
        wallet.generate_new_keypair();
        assert!(wallet.is_connected());

        wallet.disconnect();
        assert!(!wallet.is_connected());
        assert_eq!(wallet.get_status(), &WalletStatus::Disconnected);
    }

    #[test]
    fn test_keypair_from_cli_json_layout() {
        // The CLI writes 64 bytes (secret + public); only the first 32 are
        // the secret.
        let reference = Keypair::new();
        let bytes = reference.to_bytes();

        let restored = keypair_from_bytes(&bytes).expect("64-byte layout should parse");
        assert_eq!(restored.pubkey(), reference.pubkey());

        let restored = keypair_from_bytes(&bytes[..32]).expect("32-byte secret should parse");
        assert_eq!(restored.pubkey(), reference.pubkey());
    }

    #[test]
    fn test_keypair_from_bytes_rejects_bad_length() {
        assert!(keypair_from_bytes(&[0u8; 31]).is_err());
        assert!(keypair_from_bytes(&[]).is_err());
    }

    #[test]
    fn test_load_keypair_from_base58() {
        let reference = Keypair::new();
        let encoded = bs58::encode(reference.to_bytes()).into_string();

        let mut wallet = WalletService::new("https://api.devnet.solana.com");
        wallet
            .load_keypair_from_base58(&encoded)
            .expect("base58 secret should load");
        assert_eq!(wallet.get_public_key(), Some(reference.pubkey().to_string()));
    }

    #[test]
    fn test_wallet_status_methods() {
        let status = WalletStatus::Connected("test_address".to_string());
        assert!(status.is_connected());
        assert_eq!(status.address(), Some("test_address"));

        let status = WalletStatus::Disconnected;
        assert!(!status.is_connected());
        assert_eq!(status.address(), None);
    }
}
