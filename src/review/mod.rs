use async_trait::async_trait;
use log::debug;

use crate::client::RequestError;
use crate::display;
use crate::mapper::RestMapper;
use crate::resolve;
use crate::types::resource::GroupVersionResource;
use crate::types::review::{
    AuthorizationAttributes, ResourceAccessReviewResponse, ReviewOptions, ReviewScope,
};

/// Answers "who can" questions for an action.
#[async_trait]
pub trait Reviewer: Send + Sync {
    /// Review grants effective across the whole cluster.
    async fn review_cluster(
        &self,
        action: &AuthorizationAttributes,
    ) -> Result<ResourceAccessReviewResponse, RequestError>;

    /// Review grants effective inside `namespace`.
    async fn review_namespaced(
        &self,
        namespace: &str,
        action: &AuthorizationAttributes,
    ) -> Result<ResourceAccessReviewResponse, RequestError>;
}

/// Sends `action` to exactly one of the reviewer operations, chosen by
/// `scope`. Reviewer errors are returned as is.
pub async fn dispatch<R>(
    reviewer: &R,
    action: &AuthorizationAttributes,
    scope: &ReviewScope,
) -> Result<ResourceAccessReviewResponse, RequestError>
where
    R: Reviewer + ?Sized,
{
    match scope {
        ReviewScope::ClusterWide => {
            debug!("Review {action:?} in all namespaces");
            reviewer.review_cluster(action).await
        }
        ReviewScope::Namespaced(namespace) => {
            debug!("Review {action:?} in namespace '{namespace}'");
            reviewer.review_namespaced(namespace, action).await
        }
    }
}

/// Outcome of one who-can run.
#[derive(Debug, Clone)]
pub struct WhoCan {
    pub verb: String,
    pub resource: GroupVersionResource,
    pub response: ResourceAccessReviewResponse,
}

impl WhoCan {
    pub fn render(&self) -> String {
        display::render_report(&self.response, &self.verb, &self.resource)
    }
}

/// Resolves `resource_arg`, then asks `reviewer` who can `verb` it.
///
/// Resolution never fails; only reviewer errors are returned.
pub async fn who_can<R>(
    mapper: &dyn RestMapper,
    reviewer: &R,
    verb: &str,
    resource_arg: &str,
    opts: &ReviewOptions,
) -> Result<WhoCan, RequestError>
where
    R: Reviewer + ?Sized,
{
    let resource = resolve::resource_for(mapper, resource_arg);
    let action = AuthorizationAttributes::new(verb, &resource);
    let scope = ReviewScope::from(opts);

    let response = dispatch(reviewer, &action, &scope).await?;
    Ok(WhoCan {
        verb: verb.to_string(),
        resource,
        response,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct MockReviewer {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Reviewer for MockReviewer {
        async fn review_cluster(
            &self,
            _action: &AuthorizationAttributes,
        ) -> Result<ResourceAccessReviewResponse, RequestError> {
            self.calls.lock().unwrap().push(String::from("cluster"));
            if self.fail {
                return Err(RequestError::Server {
                    code: 403,
                    message: String::from("forbidden"),
                });
            }
            Ok(ResourceAccessReviewResponse::default())
        }

        async fn review_namespaced(
            &self,
            namespace: &str,
            _action: &AuthorizationAttributes,
        ) -> Result<ResourceAccessReviewResponse, RequestError> {
            self.calls.lock().unwrap().push(format!("local:{namespace}"));
            Ok(ResourceAccessReviewResponse {
                namespace: namespace.to_string(),
                ..Default::default()
            })
        }
    }

    fn get_action() -> AuthorizationAttributes {
        AuthorizationAttributes::new("get", &GroupVersionResource::new("", "v1", "pods"))
    }

    #[tokio::test]
    async fn test_dispatch_cluster() {
        let reviewer = MockReviewer::default();
        let resp = dispatch(&reviewer, &get_action(), &ReviewScope::ClusterWide)
            .await
            .unwrap();
        assert_eq!(resp.namespace, "");
        assert_eq!(*reviewer.calls.lock().unwrap(), vec!["cluster"]);
    }

    #[tokio::test]
    async fn test_dispatch_namespaced() {
        let reviewer = MockReviewer::default();
        let scope = ReviewScope::Namespaced(String::from("default"));
        let resp = dispatch(&reviewer, &get_action(), &scope).await.unwrap();
        assert_eq!(resp.namespace, "default");
        assert_eq!(*reviewer.calls.lock().unwrap(), vec!["local:default"]);
    }

    #[tokio::test]
    async fn test_dispatch_error() {
        let reviewer = MockReviewer {
            fail: true,
            ..Default::default()
        };
        let err = dispatch(&reviewer, &get_action(), &ReviewScope::ClusterWide)
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(err.to_string(), "Server error: code 403, forbidden");
        assert_eq!(reviewer.calls.lock().unwrap().len(), 1);
    }
}
