//! # NFT Gateway Endpoints
//!
//! Endpoint functions and wire types for the NFT operations exposed by the
//! SDK gateway: metadata upload, token creation, owner queries, and full
//! record loading. All protocol, storage, and transaction logic lives on the
//! gateway side; these functions only shape requests and parse responses.

use serde::{Deserialize, Serialize};
use super::client::SdkClient;

/// Upload metadata (name, description, image bytes) to the gateway's storage
/// layer, obtaining a content URI for the on-chain token to reference.
pub async fn upload_metadata(
    client: &SdkClient,
    request: &UploadMetadataRequest,
) -> Result<UploadMetadataResponse, String> {
    let url = format!("{}/api/nfts/metadata", client.base_url());

    let response = client
        .client
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<UploadMetadataResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("Metadata upload failed: {}", response.status()))
    }
}

/// Create an on-chain token referencing an already-uploaded metadata URI.
///
/// The gateway constructs, signs, and confirms the transaction; the client
/// only supplies the URI, display name, and resale fee.
pub async fn create_nft(
    client: &SdkClient,
    request: &CreateNftRequest,
) -> Result<CreateNftResponse, String> {
    let url = format!("{}/api/nfts", client.base_url());

    let response = client
        .client
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<CreateNftResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("NFT creation failed: {}", response.status()))
    }
}

/// Fetch the metadata handles of every NFT owned by `owner` (base-58 public
/// key). The list is unbounded; the gateway performs no pagination.
pub async fn find_all_by_owner(
    client: &SdkClient,
    owner: &str,
) -> Result<Vec<MetadataHandle>, String> {
    let url = format!("{}/api/nfts?owner={}", client.base_url(), owner);

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<Vec<MetadataHandle>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("Owner query failed: {}", response.status()))
    }
}

/// Load the full record (on-chain account plus off-chain JSON) for a single
/// metadata handle returned by [`find_all_by_owner`].
pub async fn load_nft(
    client: &SdkClient,
    handle: &MetadataHandle,
) -> Result<NftRecord, String> {
    let url = format!("{}/api/nfts/{}", client.base_url(), handle.mint_address);

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<NftRecord>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("NFT load failed: {}", response.status()))
    }
}

// ==================== NFT WIRE TYPES ====================

/// Metadata upload payload. Image bytes travel base64-encoded alongside the
/// original file name so the gateway can preserve the content type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadMetadataRequest {
    pub name: String,
    pub description: String,
    pub image_base64: String,
    pub image_file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadMetadataResponse {
    /// Content-addressed URI of the uploaded metadata JSON.
    pub uri: String,
    pub metadata_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNftRequest {
    pub uri: String,
    pub name: String,
    /// Resale fee in basis points (1/100 of a percent).
    pub seller_fee_basis_points: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNftResponse {
    /// Base-58 mint address of the created token.
    pub address: String,
    pub name: String,
    /// Signature of the confirmed create transaction.
    pub signature: String,
}

/// Lightweight handle to an owned NFT, as returned by the owner query.
/// Loading the full record requires a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataHandle {
    pub metadata_address: String,
    pub mint_address: String,
    pub name: String,
    pub uri: String,
}

/// Off-chain JSON metadata attached to an NFT. Every field is optional on
/// the wire; tokens minted elsewhere may carry partial documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NftJson {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Full NFT record: on-chain account fields plus the resolved JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NftRecord {
    /// Base-58 mint address.
    pub address: String,
    pub name: String,
    pub json: Option<NftJson>,
}

impl NftRecord {
    /// The record's image URL, if its JSON document carries one.
    pub fn image_url(&self) -> Option<&str> {
        self.json.as_ref().and_then(|j| j.image.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nft_record_image_url() {
        let record = NftRecord {
            address: "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".to_string(),
            name: "Test".to_string(),
            json: Some(NftJson {
                image: Some("https://arweave.net/abc".to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(record.image_url(), Some("https://arweave.net/abc"));
    }

    #[test]
    fn test_nft_record_image_url_absent() {
        let record = NftRecord {
            address: "addr".to_string(),
            name: "Test".to_string(),
            json: Some(NftJson::default()),
        };
        assert_eq!(record.image_url(), None);

        let record = NftRecord {
            address: "addr".to_string(),
            name: "Test".to_string(),
            json: None,
        };
        assert_eq!(record.image_url(), None);
    }

    #[test]
    fn test_wire_types_round_trip_optional_json() {
        // Records loaded from foreign mints may omit the json document
        // entirely; deserialization must tolerate that.
        let record: NftRecord =
            serde_json::from_str(r#"{"address":"abc","name":"n","json":null}"#)
                .expect("record should parse");
        assert!(record.json.is_none());
    }
}
