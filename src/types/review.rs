use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::resource::GroupVersionResource;

pub const AUTHORIZATION_GROUP_VERSION: &str = "authorization.openshift.io/v1";

/// Namespace value the server reports for a cluster wide review.
pub const NAMESPACE_ALL: &str = "";

/// The action being reviewed: "who may `verb` `resource` in `group`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationAttributes {
    pub verb: String,

    #[serde(rename = "resourceAPIGroup", default)]
    pub group: String,

    /// Always sent empty; reviews apply to every version of the resource.
    #[serde(rename = "resourceAPIVersion", default)]
    pub version: String,

    pub resource: String,

    /// Always sent empty; reviews cover all objects of the resource.
    #[serde(rename = "resourceName", default)]
    pub resource_name: String,
}

impl AuthorizationAttributes {
    /// Group and resource are always taken from the same resolved reference.
    pub fn new(verb: &str, gvr: &GroupVersionResource) -> Self {
        Self {
            verb: verb.to_string(),
            group: gvr.group.clone(),
            version: String::new(),
            resource: gvr.resource.clone(),
            resource_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewOptions {
    pub all_namespaces: bool,
    pub namespace: String,
}

/// Where the review is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewScope {
    ClusterWide,
    Namespaced(String),
}

impl From<&ReviewOptions> for ReviewScope {
    fn from(opts: &ReviewOptions) -> Self {
        if opts.all_namespaces {
            ReviewScope::ClusterWide
        } else {
            ReviewScope::Namespaced(opts.namespace.clone())
        }
    }
}

/// Cluster scoped review request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAccessReview {
    pub kind: String,
    pub api_version: String,

    #[serde(flatten)]
    pub action: AuthorizationAttributes,
}

impl ResourceAccessReview {
    pub fn new(action: AuthorizationAttributes) -> Self {
        Self {
            kind: String::from("ResourceAccessReview"),
            api_version: String::from(AUTHORIZATION_GROUP_VERSION),
            action,
        }
    }
}

/// Namespace scoped review request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalResourceAccessReview {
    pub kind: String,
    pub api_version: String,
    pub namespace: String,

    #[serde(flatten)]
    pub action: AuthorizationAttributes,
}

impl LocalResourceAccessReview {
    pub fn new(namespace: &str, action: AuthorizationAttributes) -> Self {
        Self {
            kind: String::from("LocalResourceAccessReview"),
            api_version: String::from(AUTHORIZATION_GROUP_VERSION),
            namespace: namespace.to_string(),
            action,
        }
    }
}

/// Principals allowed to perform the reviewed action. Users and groups are
/// kept in ordered sets, whatever order the server sent them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAccessReviewResponse {
    #[serde(default)]
    pub namespace: String,

    #[serde(default, deserialize_with = "deserialize_set")]
    pub users: BTreeSet<String>,

    #[serde(default, deserialize_with = "deserialize_set")]
    pub groups: BTreeSet<String>,

    #[serde(
        rename = "evalutionError",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub evaluation_error: String,
}

fn deserialize_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let set: Option<BTreeSet<String>> = Option::deserialize(deserializer)?;
    Ok(set.unwrap_or_default())
}
