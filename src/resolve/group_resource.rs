use log::debug;

use crate::mapper::RestMapper;
use crate::types::resource::parse_resource_arg;

use super::{ResolveResponse, Resolver};

/// Resolves `resource` or `resource.group` arguments, letting the mapper pick
/// its preferred version.
#[derive(Debug, Default)]
pub struct GroupResourceResolver;

impl GroupResourceResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for GroupResourceResolver {
    fn resolve(&self, mapper: &dyn RestMapper, arg: &str) -> ResolveResponse {
        let (_, group_resource) = parse_resource_arg(arg);
        match mapper.resource_for(&group_resource.with_version("")) {
            Ok(gvr) => ResolveResponse::Resolved(gvr),
            Err(err) => {
                debug!("Resource '{arg}' is not a known group resource: {err}");
                ResolveResponse::Continue
            }
        }
    }
}
