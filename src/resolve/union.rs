use crate::mapper::RestMapper;

use super::fully_specified::FullySpecifiedResolver;
use super::group_resource::GroupResourceResolver;
use super::{ResolveResponse, Resolver};

pub enum UnionResolver {
    FullySpecified(FullySpecifiedResolver),
    GroupResource(GroupResourceResolver),
}

impl Resolver for UnionResolver {
    fn resolve(&self, mapper: &dyn RestMapper, arg: &str) -> ResolveResponse {
        match self {
            UnionResolver::FullySpecified(r) => r.resolve(mapper, arg),
            UnionResolver::GroupResource(r) => r.resolve(mapper, arg),
        }
    }
}
