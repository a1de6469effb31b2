mod default;

pub mod discovery;

use thiserror::Error;

use crate::types::resource::GroupVersionResource;

pub use default::DefaultRestMapper;

/// Maps partial resource references onto the resource types the server
/// actually serves.
pub trait RestMapper: Send + Sync {
    /// Resolves `partial` to a single fully qualified resource. Empty fields
    /// in `partial` act as wildcards; the resource name may be plural,
    /// singular or a short name.
    fn resource_for(
        &self,
        partial: &GroupVersionResource,
    ) -> Result<GroupVersionResource, MapperError>;
}

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("the server doesn't have a resource type \"{0}\"")]
    NoMatch(GroupVersionResource),

    #[error("resource \"{partial}\" is ambiguous, it matches: {}", .matches.join(", "))]
    Ambiguous {
        partial: GroupVersionResource,
        matches: Vec<String>,
    },
}

/// One resource type served under a group/version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResource {
    pub group: String,
    pub version: String,
    pub plural: String,
    pub singular: String,
    pub short_names: Vec<String>,
}

impl ApiResource {
    pub fn new(group: &str, version: &str, plural: &str, singular: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            plural: plural.to_string(),
            singular: singular.to_string(),
            short_names: vec![],
        }
    }

    pub fn with_short_names(mut self, names: &[&str]) -> Self {
        self.short_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn gvr(&self) -> GroupVersionResource {
        GroupVersionResource::new(&self.group, &self.version, &self.plural)
    }

    fn matches_name(&self, name: &str) -> bool {
        self.plural == name
            || (!self.singular.is_empty() && self.singular == name)
            || self.short_names.iter().any(|s| s == name)
    }

    fn matches(&self, partial: &GroupVersionResource, name: &str) -> bool {
        if !partial.group.is_empty() && partial.group != self.group {
            return false;
        }
        if !partial.version.is_empty() && partial.version != self.version {
            return false;
        }
        self.matches_name(name)
    }
}
