use std::collections::BTreeSet;

use super::{ApiResource, MapperError, RestMapper};
use crate::types::resource::GroupVersionResource;

/// An in-memory mapper over a priority ordered list of resources.
///
/// Earlier entries win: groups appear in the order the server listed them,
/// and inside a group the preferred version comes first.
#[derive(Debug, Clone, Default)]
pub struct DefaultRestMapper {
    resources: Vec<ApiResource>,
}

impl DefaultRestMapper {
    pub fn new(resources: Vec<ApiResource>) -> Self {
        Self { resources }
    }

    pub fn add(&mut self, resource: ApiResource) {
        self.resources.push(resource);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl RestMapper for DefaultRestMapper {
    fn resource_for(
        &self,
        partial: &GroupVersionResource,
    ) -> Result<GroupVersionResource, MapperError> {
        let name = partial.resource.to_lowercase();
        let matches: Vec<&ApiResource> = self
            .resources
            .iter()
            .filter(|r| r.matches(partial, &name))
            .collect();

        let best = match matches.first() {
            Some(best) => *best,
            None => return Err(MapperError::NoMatch(partial.clone())),
        };

        let plurals: BTreeSet<&str> = matches
            .iter()
            .filter(|r| r.group == best.group && r.version == best.version)
            .map(|r| r.plural.as_str())
            .collect();
        if plurals.len() > 1 {
            return Err(MapperError::Ambiguous {
                partial: partial.clone(),
                matches: matches.iter().map(|r| r.gvr().to_string()).collect(),
            });
        }

        Ok(best.gvr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_mapper() -> DefaultRestMapper {
        DefaultRestMapper::new(vec![
            ApiResource::new("", "v1", "pods", "pod").with_short_names(&["po"]),
            ApiResource::new("", "v1", "services", "service").with_short_names(&["svc"]),
            ApiResource::new("apps", "v1", "deployments", "deployment")
                .with_short_names(&["deploy"]),
            ApiResource::new("extensions", "v1beta1", "deployments", "deployment"),
            ApiResource::new("build.openshift.io", "v1", "builds", "build"),
            ApiResource::new("build.openshift.io", "v1beta1", "builds", "build"),
            ApiResource::new("example.io", "v1", "widgets", "widget").with_short_names(&["w"]),
            ApiResource::new("example.io", "v1", "wheels", "wheel").with_short_names(&["w"]),
        ])
    }

    #[test]
    fn test_resource_for() {
        let mapper = mock_mapper();

        let cases = [
            (("", "", "pods"), ("", "v1", "pods")),
            (("", "", "pod"), ("", "v1", "pods")),
            (("", "", "PO"), ("", "v1", "pods")),
            (("", "", "deployments"), ("apps", "v1", "deployments")),
            (("extensions", "", "deployments"), ("extensions", "v1beta1", "deployments")),
            (("build.openshift.io", "", "builds"), ("build.openshift.io", "v1", "builds")),
            (
                ("build.openshift.io", "v1beta1", "builds"),
                ("build.openshift.io", "v1beta1", "builds"),
            ),
        ];
        for ((group, version, resource), (egroup, eversion, eresource)) in cases {
            let partial = GroupVersionResource::new(group, version, resource);
            let gvr = mapper.resource_for(&partial).unwrap();
            assert_eq!(
                gvr,
                GroupVersionResource::new(egroup, eversion, eresource),
                "partial {partial}"
            );
        }
    }

    #[test]
    fn test_resource_for_errors() {
        let mapper = mock_mapper();

        let partial = GroupVersionResource::new("", "", "gizmos");
        assert!(matches!(
            mapper.resource_for(&partial),
            Err(MapperError::NoMatch(_))
        ));

        let partial = GroupVersionResource::new("apps", "v2", "deployments");
        assert!(matches!(
            mapper.resource_for(&partial),
            Err(MapperError::NoMatch(_))
        ));

        let partial = GroupVersionResource::new("", "", "w");
        let err = mapper.resource_for(&partial).unwrap_err();
        assert!(matches!(err, MapperError::Ambiguous { .. }));
        assert_eq!(
            err.to_string(),
            "resource \"w\" is ambiguous, it matches: widgets.v1.example.io, wheels.v1.example.io"
        );
    }
}
