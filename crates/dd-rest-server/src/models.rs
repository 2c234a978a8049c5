// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Wire types for the deploy API

use serde::{Deserialize, Serialize};

/// Deploy request body
///
/// The URL is handed to the fetcher as-is; no scheme or reachability
/// validation happens before the clone attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub repo_url: String,
}

/// Deploy response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResponse {
    pub deploy_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_request_rejects_wrong_type() {
        let result = serde_json::from_str::<DeployRequest>(r#"{"repo_url": 123}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deploy_response_field_name() {
        let response = DeployResponse {
            deploy_id: "aB3xZ9".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, serde_json::json!({"deployId": "aB3xZ9"}));
    }
}
