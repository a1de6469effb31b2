use serde::{Deserialize, Serialize};

/// Returned by `/api`: versions of the core group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiVersions {
    #[serde(default)]
    pub versions: Vec<String>,
}

/// Returned by `/apis`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiGroupList {
    #[serde(default)]
    pub groups: Vec<ApiGroup>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGroup {
    pub name: String,

    #[serde(default)]
    pub versions: Vec<GroupVersionForDiscovery>,

    pub preferred_version: Option<GroupVersionForDiscovery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupVersionForDiscovery {
    pub group_version: String,
    pub version: String,
}

/// Returned by `/api/{version}` and `/apis/{group}/{version}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceList {
    #[serde(default)]
    pub group_version: String,

    #[serde(default)]
    pub resources: Vec<ApiResourceInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceInfo {
    pub name: String,

    #[serde(default)]
    pub singular_name: String,

    #[serde(default)]
    pub namespaced: bool,

    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub verbs: Vec<String>,

    #[serde(default)]
    pub short_names: Vec<String>,
}

impl ApiGroup {
    /// Versions with the preferred one first, the rest in server order.
    pub fn ordered_versions(&self) -> Vec<String> {
        let mut versions = Vec::with_capacity(self.versions.len());
        if let Some(preferred) = self.preferred_version.as_ref() {
            versions.push(preferred.version.clone());
        }
        for version in self.versions.iter() {
            if !versions.contains(&version.version) {
                versions.push(version.version.clone());
            }
        }
        versions
    }
}
