use crate::mapper::RestMapper;

use super::fully_specified::FullySpecifiedResolver;
use super::group_resource::GroupResourceResolver;
use super::union::UnionResolver;
use super::{ResolveResponse, Resolver};

pub struct ChainResolver {
    resolvers: Vec<UnionResolver>,
}

impl ChainResolver {
    pub fn new(resolvers: Vec<UnionResolver>) -> Self {
        Self { resolvers }
    }
}

impl Default for ChainResolver {
    /// Fully specified first: an explicit version is never replaced by the
    /// preferred one.
    fn default() -> Self {
        Self::new(vec![
            UnionResolver::FullySpecified(FullySpecifiedResolver::new()),
            UnionResolver::GroupResource(GroupResourceResolver::new()),
        ])
    }
}

impl Resolver for ChainResolver {
    fn resolve(&self, mapper: &dyn RestMapper, arg: &str) -> ResolveResponse {
        for resolver in self.resolvers.iter() {
            match resolver.resolve(mapper, arg) {
                ResolveResponse::Resolved(gvr) => return ResolveResponse::Resolved(gvr),
                ResolveResponse::Continue => continue,
            }
        }

        ResolveResponse::Continue
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::mapper::MapperError;
    use crate::types::resource::GroupVersionResource;

    use super::*;

    /// Recognizes every partial and records what it was asked.
    #[derive(Default)]
    struct RecordMapper {
        asked: Mutex<Vec<GroupVersionResource>>,
    }

    impl RestMapper for RecordMapper {
        fn resource_for(
            &self,
            partial: &GroupVersionResource,
        ) -> Result<GroupVersionResource, MapperError> {
            self.asked.lock().unwrap().push(partial.clone());
            let mut gvr = partial.clone();
            if gvr.version.is_empty() {
                gvr.version = String::from("v1");
            }
            Ok(gvr)
        }
    }

    #[test]
    fn test_chain_order() {
        let mapper = RecordMapper::default();
        let chain = ChainResolver::default();

        let resp = chain.resolve(&mapper, "builds.v1beta1.build.openshift.io");
        assert_eq!(
            resp,
            ResolveResponse::Resolved(GroupVersionResource::new(
                "build.openshift.io",
                "v1beta1",
                "builds"
            ))
        );
        assert_eq!(mapper.asked.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_chain_bare_resource() {
        let mapper = RecordMapper::default();
        let chain = ChainResolver::default();

        let resp = chain.resolve(&mapper, "pods");
        assert_eq!(
            resp,
            ResolveResponse::Resolved(GroupVersionResource::new("", "v1", "pods"))
        );

        // A bare resource is only ever looked up as a group resource.
        let asked = mapper.asked.lock().unwrap();
        assert_eq!(*asked, vec![GroupVersionResource::from_resource("pods")]);
    }

    #[test]
    fn test_chain_from_default_resolvers() {
        let mapper = RecordMapper::default();
        let chain = ChainResolver::new(vec![
            UnionResolver::FullySpecified(FullySpecifiedResolver::default()),
            UnionResolver::GroupResource(GroupResourceResolver::default()),
        ]);

        assert_eq!(
            chain.resolve(&mapper, "deployments.apps"),
            ResolveResponse::Resolved(GroupVersionResource::new("apps", "v1", "deployments"))
        );
    }

    #[test]
    fn test_empty_chain() {
        let mapper = RecordMapper::default();
        let chain = ChainResolver::new(vec![]);
        assert_eq!(chain.resolve(&mapper, "pods"), ResolveResponse::Continue);
    }
}
