use log::debug;

use crate::mapper::RestMapper;
use crate::types::resource::parse_resource_arg;

use super::{ResolveResponse, Resolver};

/// Resolves `resource.version.group` arguments with the version pinned.
#[derive(Debug, Default)]
pub struct FullySpecifiedResolver;

impl FullySpecifiedResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for FullySpecifiedResolver {
    fn resolve(&self, mapper: &dyn RestMapper, arg: &str) -> ResolveResponse {
        let (fully, _) = parse_resource_arg(arg);
        let fully = match fully {
            Some(fully) => fully,
            None => return ResolveResponse::Continue,
        };

        match mapper.resource_for(&fully) {
            Ok(gvr) if !gvr.is_empty() => ResolveResponse::Resolved(gvr),
            Ok(_) => ResolveResponse::Continue,
            Err(err) => {
                debug!("Resource '{arg}' is not fully specified: {err}");
                ResolveResponse::Continue
            }
        }
    }
}
