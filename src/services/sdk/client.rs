//! # SDK Gateway Client
//!
//! Main HTTP client for the external NFT SDK gateway.

use reqwest::Client;
use crate::core::service::NftService;
use super::nfts::{
    CreateNftRequest, CreateNftResponse, MetadataHandle, NftRecord,
    UploadMetadataRequest, UploadMetadataResponse,
};

/// HTTP client for communicating with the NFT SDK gateway.
///
/// The gateway owns all hard problems (storage pinning, transaction
/// construction, signing, confirmation); this client is a thin REST adapter
/// over it, maintaining a connection pool for HTTP/2 multiplexing.
pub struct SdkClient {
    pub(crate) client: Client,
    base_url: String,
}

impl SdkClient {
    /// Create a new gateway client for the given base URL.
    ///
    /// The client is configured with a 10 second timeout so a stalled
    /// gateway cannot freeze in-flight tasks indefinitely.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL this client was constructed with.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl NftService for SdkClient {
    async fn upload_metadata(
        &self,
        request: UploadMetadataRequest,
    ) -> Result<UploadMetadataResponse, String> {
        crate::services::sdk::nfts::upload_metadata(self, &request).await
    }

    async fn create_nft(&self, request: CreateNftRequest) -> Result<CreateNftResponse, String> {
        crate::services::sdk::nfts::create_nft(self, &request).await
    }

    async fn find_all_by_owner(&self, owner: &str) -> Result<Vec<MetadataHandle>, String> {
        crate::services::sdk::nfts::find_all_by_owner(self, owner).await
    }

    async fn load_nft(&self, handle: &MetadataHandle) -> Result<NftRecord, String> {
        crate::services::sdk::nfts::load_nft(self, handle).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_configured_base_url() {
        let client = SdkClient::new("http://127.0.0.1:3001");
        assert_eq!(client.base_url(), "http://127.0.0.1:3001");
    }
}
