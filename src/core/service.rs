//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. The SDK gateway handle is passed into the app explicitly
//! (constructor injection) rather than looked up ambiently, so tests can
//! substitute a recording mock.

use async_trait::async_trait;
use crate::services::sdk::nfts::{
    CreateNftRequest, CreateNftResponse, MetadataHandle, NftRecord,
    UploadMetadataRequest, UploadMetadataResponse,
};

/// Trait for the NFT SDK collaborator.
///
/// Mirrors the four gateway operations the app orchestrates: metadata
/// upload, token creation, owner query, and full record loading. The
/// production implementation is [`crate::services::sdk::SdkClient`]; tests
/// use [`testing::MockNftService`].
#[async_trait]
pub trait NftService: Send + Sync {
    /// Upload metadata + image bytes, obtaining a content URI.
    async fn upload_metadata(
        &self,
        request: UploadMetadataRequest,
    ) -> Result<UploadMetadataResponse, String>;

    /// Create an on-chain token referencing an uploaded metadata URI.
    async fn create_nft(&self, request: CreateNftRequest) -> Result<CreateNftResponse, String>;

    /// Fetch metadata handles for every NFT owned by the given base-58 key.
    async fn find_all_by_owner(&self, owner: &str) -> Result<Vec<MetadataHandle>, String>;

    /// Load the full record for one metadata handle.
    async fn load_nft(&self, handle: &MetadataHandle) -> Result<NftRecord, String>;
}

#[cfg(test)]
pub mod testing {
    //! Recording mock of [`NftService`] for unit tests.

    use super::*;
    use parking_lot::Mutex;

    /// Mock gateway that records every call and returns canned responses.
    pub struct MockNftService {
        /// Call names, in invocation order.
        pub calls: Mutex<Vec<&'static str>>,
        /// Every upload request received.
        pub uploads: Mutex<Vec<UploadMetadataRequest>>,
        /// Every create request received.
        pub creates: Mutex<Vec<CreateNftRequest>>,
        /// URI returned by upload_metadata.
        pub uri: String,
        /// Handles returned by find_all_by_owner.
        pub owned: Vec<MetadataHandle>,
        /// Record returned by load_nft.
        pub record: NftRecord,
        /// When set, upload_metadata fails with this message.
        pub fail_upload: Option<String>,
        /// When set, create_nft fails with this message.
        pub fail_create: Option<String>,
    }

    impl MockNftService {
        pub fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                uploads: Mutex::new(Vec::new()),
                creates: Mutex::new(Vec::new()),
                uri: "https://arweave.net/mock-uri".to_string(),
                owned: Vec::new(),
                record: NftRecord {
                    address: "MockMint1111111111111111111111111111111111".to_string(),
                    name: "Mock NFT".to_string(),
                    json: None,
                },
                fail_upload: None,
                fail_create: None,
            }
        }

        pub fn with_owned(mut self, owned: Vec<MetadataHandle>) -> Self {
            self.owned = owned;
            self
        }

        pub fn with_record(mut self, record: NftRecord) -> Self {
            self.record = record;
            self
        }

        pub fn call_names(&self) -> Vec<&'static str> {
            self.calls.lock().clone()
        }
    }

    impl Default for MockNftService {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl NftService for MockNftService {
        async fn upload_metadata(
            &self,
            request: UploadMetadataRequest,
        ) -> Result<UploadMetadataResponse, String> {
            self.calls.lock().push("upload_metadata");
            self.uploads.lock().push(request);
            if let Some(msg) = &self.fail_upload {
                return Err(msg.clone());
            }
            Ok(UploadMetadataResponse {
                uri: self.uri.clone(),
                metadata_address: "MockMeta111111111111111111111111111111111".to_string(),
            })
        }

        async fn create_nft(
            &self,
            request: CreateNftRequest,
        ) -> Result<CreateNftResponse, String> {
            self.calls.lock().push("create_nft");
            let name = request.name.clone();
            self.creates.lock().push(request);
            if let Some(msg) = &self.fail_create {
                return Err(msg.clone());
            }
            Ok(CreateNftResponse {
                address: "MockMint1111111111111111111111111111111111".to_string(),
                name,
                signature: "MockSig".to_string(),
            })
        }

        async fn find_all_by_owner(&self, _owner: &str) -> Result<Vec<MetadataHandle>, String> {
            self.calls.lock().push("find_all_by_owner");
            Ok(self.owned.clone())
        }

        async fn load_nft(&self, _handle: &MetadataHandle) -> Result<NftRecord, String> {
            self.calls.lock().push("load_nft");
            Ok(self.record.clone())
        }
    }
}
