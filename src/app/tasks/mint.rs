//! The mint pipeline: read image, upload metadata, create the token.
//!
//! The whole pipeline is awaited as one linear sequence so a failure at any
//! step surfaces as a single `MintResult` event; nothing is fired and
//! forgotten.

use std::path::PathBuf;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use tracing::{error, info};

use crate::app::events::AppEvent;
use crate::app::state::{MintReceipt, SharedState};
use crate::core::NftService;
use crate::services::sdk::nfts::{CreateNftRequest, UploadMetadataRequest};
use crate::utils::runtime::TOKIO_RT;

/// Everything the pipeline needs, snapshotted from state before spawning.
#[derive(Debug, Clone)]
pub struct MintParams {
    pub name: String,
    pub description: String,
    pub image: PathBuf,
    pub seller_fee_basis_points: u16,
}

/// Run the mint pipeline against the gateway.
///
/// Uploads metadata first, then creates the token with the returned URI.
/// The URI is passed through byte-for-byte.
pub async fn run_mint(sdk: &dyn NftService, params: MintParams) -> Result<MintReceipt, String> {
    let image_bytes = tokio::fs::read(&params.image)
        .await
        .map_err(|e| format!("Failed to read image file: {}", e))?;

    let file_name = params
        .image
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image.png")
        .to_string();

    info!(name = %params.name, file = %file_name, "Uploading NFT metadata");

    let upload = sdk
        .upload_metadata(UploadMetadataRequest {
            name: params.name.clone(),
            description: params.description.clone(),
            image_base64: BASE64.encode(&image_bytes),
            image_file_name: file_name,
        })
        .await?;

    info!(uri = %upload.uri, "Metadata uploaded, creating token");

    let created = sdk
        .create_nft(CreateNftRequest {
            uri: upload.uri.clone(),
            name: params.name.clone(),
            seller_fee_basis_points: params.seller_fee_basis_points,
        })
        .await?;

    Ok(MintReceipt {
        address: created.address,
        name: created.name,
        uri: upload.uri,
        minted_at: Utc::now(),
    })
}

/// Spawn the mint pipeline on the shared runtime.
///
/// The caller has already validated the form and set `Phase::Submitting`;
/// this snapshots the params under the lock, drops it, and reports back via
/// the event channel.
pub fn submit_mint(state: &SharedState, event_tx: async_channel::Sender<AppEvent>) {
    let (sdk, params) = {
        let s = state.read();
        let image = match &s.mint_form.image {
            Some(p) => p.clone(),
            None => {
                error!("submit_mint called without an image on the form");
                return;
            }
        };
        (
            Arc::clone(&s.sdk),
            MintParams {
                name: s.mint_form.name.clone(),
                description: s.mint_form.description.clone(),
                image,
                seller_fee_basis_points: s.config.seller_fee_basis_points,
            },
        )
    };

    TOKIO_RT.spawn(async move {
        let result = run_mint(sdk.as_ref(), params).await;
        if let Err(e) = &result {
            error!("Mint pipeline failed: {}", e);
        }
        let _ = event_tx.send(AppEvent::MintResult(result)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::testing::MockNftService;
    use base64::Engine as _;
    use std::io::Write;

    fn temp_image() -> PathBuf {
        let path = std::env::temp_dir().join("mintdeck-test-artwork.png");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"\x89PNG\r\n\x1a\nfake").unwrap();
        path
    }

    fn params(image: PathBuf) -> MintParams {
        MintParams {
            name: "Rocket Monkey".to_string(),
            description: "To the moon".to_string(),
            image,
            seller_fee_basis_points: 500,
        }
    }

    #[tokio::test]
    async fn test_upload_runs_before_create() {
        let mock = MockNftService::new();
        let receipt = run_mint(&mock, params(temp_image())).await.unwrap();

        assert_eq!(mock.call_names(), vec!["upload_metadata", "create_nft"]);
        assert_eq!(receipt.name, "Rocket Monkey");
    }

    #[tokio::test]
    async fn test_create_uses_uploaded_uri_and_royalty() {
        let mock = MockNftService::new();
        run_mint(&mock, params(temp_image())).await.unwrap();

        let creates = mock.creates.lock();
        assert_eq!(creates.len(), 1);
        assert_eq!(creates[0].uri, "https://arweave.net/mock-uri");
        assert_eq!(creates[0].seller_fee_basis_points, 500);
    }

    #[tokio::test]
    async fn test_upload_failure_skips_create() {
        let mut mock = MockNftService::new();
        mock.fail_upload = Some("Storage unavailable".to_string());

        let result = run_mint(&mock, params(temp_image())).await;
        assert!(result.is_err());
        assert_eq!(mock.call_names(), vec!["upload_metadata"]);
    }

    #[tokio::test]
    async fn test_unreadable_image_fails_before_any_call() {
        let mock = MockNftService::new();
        let result = run_mint(
            &mock,
            params(PathBuf::from("/nonexistent/missing-art.png")),
        )
        .await;

        assert!(result.is_err());
        assert!(mock.call_names().is_empty());
    }

    #[tokio::test]
    async fn test_image_bytes_are_base64_encoded() {
        let mock = MockNftService::new();
        run_mint(&mock, params(temp_image())).await.unwrap();

        let uploads = mock.uploads.lock();
        assert_eq!(
            uploads[0].image_base64,
            base64::engine::general_purpose::STANDARD.encode(b"\x89PNG\r\n\x1a\nfake")
        );
    }
}
