use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully qualified coordinate of a resource type: group, version and plural
/// resource name. The core group is the empty string.
///
/// An empty version means either "not requested" or "unknown"; the two are
/// not distinguished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupVersionResource {
    pub group: String,
    pub version: String,
    pub resource: String,
}

/// A [`GroupVersionResource`] without the version, used when the caller
/// leaves the version choice to the mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupResource {
    pub group: String,
    pub resource: String,
}

impl GroupVersionResource {
    pub fn new(group: &str, version: &str, resource: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            resource: resource.to_string(),
        }
    }

    /// Degenerate reference holding only a resource name.
    pub fn from_resource(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty() && self.resource.is_empty()
    }

    pub fn group_resource(&self) -> GroupResource {
        GroupResource {
            group: self.group.clone(),
            resource: self.resource.clone(),
        }
    }

    /// Name shown to users: `resource` for the core group, `resource.group`
    /// otherwise.
    pub fn display_name(&self) -> String {
        self.group_resource().to_string()
    }
}

impl fmt::Display for GroupVersionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource)?;
        if !self.version.is_empty() {
            write!(f, ".{}", self.version)?;
        }
        if !self.group.is_empty() {
            write!(f, ".{}", self.group)?;
        }
        Ok(())
    }
}

impl GroupResource {
    pub fn new(group: &str, resource: &str) -> Self {
        Self {
            group: group.to_string(),
            resource: resource.to_string(),
        }
    }

    pub fn with_version(&self, version: &str) -> GroupVersionResource {
        GroupVersionResource {
            group: self.group.clone(),
            version: version.to_string(),
            resource: self.resource.clone(),
        }
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

/// Splits a user supplied resource argument.
///
/// `resource.version.group` yields a fully specified candidate in addition
/// to the group-resource reading `resource` + `version.group`. An argument
/// without dots is a bare resource in the core group and never has a fully
/// specified reading.
pub fn parse_resource_arg(arg: &str) -> (Option<GroupVersionResource>, GroupResource) {
    if !arg.contains('.') {
        return (None, GroupResource::new("", arg));
    }

    let parts: Vec<&str> = arg.splitn(3, '.').collect();
    let fully = if parts.len() == 3 {
        Some(GroupVersionResource::new(parts[2], parts[1], parts[0]))
    } else {
        None
    };

    (fully, parse_group_resource(arg))
}

/// `resource.group`, split at the first dot.
pub fn parse_group_resource(arg: &str) -> GroupResource {
    match arg.split_once('.') {
        Some((resource, group)) => GroupResource::new(group, resource),
        None => GroupResource::new("", arg),
    }
}
