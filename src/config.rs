//! # Application Configuration
//!
//! Runtime configuration read once at startup and passed explicitly into the
//! app. The resale-fee basis points and fallback image are deliberate policy
//! defaults rather than hardcoded literals, overridable per deployment.

use std::path::PathBuf;

/// Default SDK gateway base URL.
const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:3001";
/// Default Solana RPC endpoint.
const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
/// Default resale fee: 500 basis points = 5%.
const DEFAULT_SELLER_FEE_BPS: u16 = 500;
/// Local image shown when a loaded NFT carries no image URL.
const DEFAULT_FALLBACK_IMAGE: &str = "assets/fallback-nft.png";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// NFT SDK gateway base URL.
    pub gateway_url: String,
    /// Solana RPC endpoint for wallet balance queries.
    pub rpc_url: String,
    /// Resale fee applied to minted tokens, in basis points.
    pub seller_fee_basis_points: u16,
    /// Path of the local fallback image for NFTs without artwork.
    pub fallback_image: String,
    /// Keypair file to load on "Connect Wallet"; the Solana CLI default
    /// location is used when unset.
    pub keypair_path: Option<PathBuf>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            seller_fee_basis_points: DEFAULT_SELLER_FEE_BPS,
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
            keypair_path: None,
        }
    }
}

impl StudioConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// Recognised variables:
    /// - `MINTDECK_GATEWAY_URL`
    /// - `SOLANA_RPC_URL`
    /// - `MINTDECK_SELLER_FEE_BPS`
    /// - `MINTDECK_FALLBACK_IMAGE`
    /// - `MINTDECK_KEYPAIR_PATH`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            gateway_url: std::env::var("MINTDECK_GATEWAY_URL")
                .unwrap_or(defaults.gateway_url),
            rpc_url: std::env::var("SOLANA_RPC_URL").unwrap_or(defaults.rpc_url),
            seller_fee_basis_points: std::env::var("MINTDECK_SELLER_FEE_BPS")
                .ok()
                .and_then(|v| parse_fee_bps(&v))
                .unwrap_or(defaults.seller_fee_basis_points),
            fallback_image: std::env::var("MINTDECK_FALLBACK_IMAGE")
                .unwrap_or(defaults.fallback_image),
            keypair_path: std::env::var("MINTDECK_KEYPAIR_PATH").ok().map(PathBuf::from),
        }
    }
}

/// Parse a basis-points override. Values above 10000 (100%) are rejected.
fn parse_fee_bps(value: &str) -> Option<u16> {
    let bps: u16 = value.trim().parse().ok()?;
    if bps > 10_000 {
        return None;
    }
    Some(bps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert_eq!(config.gateway_url, "http://127.0.0.1:3001");
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.seller_fee_basis_points, 500);
        assert_eq!(config.fallback_image, "assets/fallback-nft.png");
        assert!(config.keypair_path.is_none());
    }

    #[test]
    fn test_parse_fee_bps() {
        assert_eq!(parse_fee_bps("500"), Some(500));
        assert_eq!(parse_fee_bps(" 0 "), Some(0));
        assert_eq!(parse_fee_bps("10000"), Some(10_000));
        assert_eq!(parse_fee_bps("10001"), None);
        assert_eq!(parse_fee_bps("five"), None);
    }
}
