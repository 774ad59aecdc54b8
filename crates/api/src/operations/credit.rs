//! SkillsFuture Credit claim operations. All of them go to the alternate
//! production host.

use ssg_core::models::credit::{
    CancelClaimsInfo, DecryptPayloadInfo, EncryptPayloadInfo, UploadDocumentInfo,
};

use super::{body, builder, finish, required};
use crate::config::ClientConfig;
use crate::endpoint::Host;
use crate::error::ApiError;
use crate::request::HttpMethod;

const CLAIM_ID: &str = "Claim ID";

define_operation!(
    /// `POST /skillsFutureCredits/claims/encryptRequests`.
    EncryptPayload
);

impl EncryptPayload {
    pub fn prepare(config: &ClientConfig, info: &EncryptPayloadInfo) -> Result<Self, ApiError> {
        let builder = builder(
            config,
            HttpMethod::Post,
            Host::Alternate,
            "/skillsFutureCredits/claims/encryptRequests",
        )?
        .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /skillsFutureCredits/claims/decryptRequests`.
    DecryptPayload
);

impl DecryptPayload {
    pub fn prepare(config: &ClientConfig, info: &DecryptPayloadInfo) -> Result<Self, ApiError> {
        let builder = builder(
            config,
            HttpMethod::Post,
            Host::Alternate,
            "/skillsFutureCredits/claims/decryptRequests",
        )?
        .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /skillsFutureCredits/claims/{claimId}/supportingdocuments`.
    UploadDocument
);

impl UploadDocument {
    pub fn prepare(
        config: &ClientConfig,
        claim_id: &str,
        info: &UploadDocumentInfo,
    ) -> Result<Self, ApiError> {
        let path = format!(
            "/skillsFutureCredits/claims/{}/supportingdocuments",
            required(claim_id, CLAIM_ID)?
        );
        let builder = builder(config, HttpMethod::Post, Host::Alternate, &path)?
            .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}

define_operation!(
    /// `POST /skillsFutureCredits/claims/{claimId}`: cancel a claim.
    CancelClaims
);

impl CancelClaims {
    pub fn prepare(
        config: &ClientConfig,
        claim_id: &str,
        info: &CancelClaimsInfo,
    ) -> Result<Self, ApiError> {
        let path = format!("/skillsFutureCredits/claims/{}", required(claim_id, CLAIM_ID)?);
        let builder = builder(config, HttpMethod::Post, Host::Alternate, &path)?
            .body(body(config, info)?);
        Ok(Self {
            request: finish(Self::NAME, builder)?,
        })
    }
}
