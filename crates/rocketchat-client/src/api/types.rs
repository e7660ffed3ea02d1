use serde::{Deserialize, Serialize};

/// Normalized answer of [`RocketChatApi::version`](super::RocketChatApi::version).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// `"success"` or `"error"`.
    pub status: String,
    pub versions: Versions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versions {
    pub api: String,
    pub rocketchat: String,
}

/// Raw body of `GET info`.
#[derive(Debug, Deserialize)]
pub(crate) struct InfoResponse {
    #[serde(default)]
    pub success: bool,
    pub info: InfoBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InfoBody {
    pub version: String,
}

impl From<InfoResponse> for VersionInfo {
    fn from(response: InfoResponse) -> Self {
        let status = if response.success { "success" } else { "error" };
        Self {
            status: status.to_string(),
            versions: Versions {
                api: response.info.version.clone(),
                rocketchat: response.info.version,
            },
        }
    }
}
