use anyhow::{Context, Result};
use log::{debug, warn};

use crate::client::Client;
use crate::types::discovery::{ApiGroupList, ApiResourceList, ApiVersions};

use super::{ApiResource, DefaultRestMapper};

/// Builds a mapper from the server discovery documents.
///
/// The core group comes first, then the groups in the order `/apis` lists
/// them; inside each group the preferred version comes first. A group
/// version that cannot be listed is skipped.
pub async fn discover(client: &Client) -> Result<DefaultRestMapper> {
    let mut mapper = DefaultRestMapper::default();

    let core: ApiVersions = client
        .get_json("api")
        .await
        .context("discover core api versions")?;
    for version in core.versions.iter() {
        let path = format!("api/{version}");
        add_group_version(client, &mut mapper, &path, "", version).await;
    }

    let groups: ApiGroupList = client
        .get_json("apis")
        .await
        .context("discover api groups")?;
    for group in groups.groups.iter() {
        for version in group.ordered_versions() {
            let path = format!("apis/{}/{version}", group.name);
            add_group_version(client, &mut mapper, &path, &group.name, &version).await;
        }
    }

    debug!(
        "Discovered {} resources from server '{}'",
        mapper.len(),
        client.url()
    );
    Ok(mapper)
}

async fn add_group_version(
    client: &Client,
    mapper: &mut DefaultRestMapper,
    path: &str,
    group: &str,
    version: &str,
) {
    let list: ApiResourceList = match client.get_json(path).await {
        Ok(list) => list,
        Err(err) => {
            warn!("Skip discovery of '{path}': {err}");
            return;
        }
    };
    add_resources(mapper, group, version, list);
}

fn add_resources(mapper: &mut DefaultRestMapper, group: &str, version: &str, list: ApiResourceList) {
    for info in list.resources {
        // Subresources such as `pods/log`.
        if info.name.contains('/') {
            continue;
        }
        mapper.add(ApiResource {
            group: group.to_string(),
            version: version.to_string(),
            plural: info.name.to_lowercase(),
            singular: info.singular_name.to_lowercase(),
            short_names: info.short_names.iter().map(|s| s.to_lowercase()).collect(),
        });
    }
}
