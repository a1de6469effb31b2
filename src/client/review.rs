use async_trait::async_trait;
use log::warn;

use crate::review::Reviewer;
use crate::types::review::{
    AuthorizationAttributes, LocalResourceAccessReview, ResourceAccessReview,
    ResourceAccessReviewResponse, AUTHORIZATION_GROUP_VERSION,
};

use super::{Client, RequestError};

#[async_trait]
impl Reviewer for Client {
    async fn review_cluster(
        &self,
        action: &AuthorizationAttributes,
    ) -> Result<ResourceAccessReviewResponse, RequestError> {
        let review = ResourceAccessReview::new(action.clone());
        let path = format!("apis/{AUTHORIZATION_GROUP_VERSION}/resourceaccessreviews");
        let resp = self.post_json(&path, &review).await?;
        Ok(check_evaluation(resp))
    }

    async fn review_namespaced(
        &self,
        namespace: &str,
        action: &AuthorizationAttributes,
    ) -> Result<ResourceAccessReviewResponse, RequestError> {
        if !is_namespace_name(namespace) {
            return Err(RequestError::Client(format!(
                "invalid namespace '{namespace}'"
            )));
        }
        let review = LocalResourceAccessReview::new(namespace, action.clone());
        let path = format!(
            "apis/{AUTHORIZATION_GROUP_VERSION}/namespaces/{namespace}/localresourceaccessreviews"
        );
        let resp = self.post_json(&path, &review).await?;
        Ok(check_evaluation(resp))
    }
}

/// Namespaces are DNS labels: at most 63 lowercase alphanumerics or '-',
/// starting and ending with an alphanumeric. Anything else would change the
/// request path.
fn is_namespace_name(name: &str) -> bool {
    let valid_char = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();
    !name.is_empty()
        && name.len() <= 63
        && name.chars().all(|c| valid_char(c) || c == '-')
        && name.starts_with(valid_char)
        && name.ends_with(valid_char)
}

/// The server still answers when some policy could not be evaluated, the
/// lists may then be incomplete.
fn check_evaluation(resp: ResourceAccessReviewResponse) -> ResourceAccessReviewResponse {
    if !resp.evaluation_error.is_empty() {
        warn!(
            "Review result may be incomplete: {}",
            resp.evaluation_error
        );
    }
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_name() {
        for name in ["default", "myproject", "openshift-infra", "ns1", "a"] {
            assert!(is_namespace_name(name), "{name}");
        }
        let long = "a".repeat(64);
        for name in [
            "",
            ".",
            "..",
            "../../../../api/v1",
            "a/b",
            "a?b",
            "a#b",
            "a%2Fb",
            "MyProject",
            "-ns",
            "ns-",
            "my project",
            long.as_str(),
        ] {
            assert!(!is_namespace_name(name), "{name}");
        }
    }
}
