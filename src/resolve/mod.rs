mod fully_specified;
mod group_resource;
mod union;

pub mod chain;

use log::debug;

use crate::mapper::RestMapper;
use crate::types::resource::GroupVersionResource;

pub use chain::ChainResolver;
pub use fully_specified::FullySpecifiedResolver;
pub use group_resource::GroupResourceResolver;
pub use union::UnionResolver;

/// One strategy for turning a user typed resource argument into a resource
/// the server knows about.
pub trait Resolver {
    /// `arg` is already lowercased.
    fn resolve(&self, mapper: &dyn RestMapper, arg: &str) -> ResolveResponse;
}

/// Possible outcomes of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResponse {
    /// The mapper recognized the argument.
    Resolved(GroupVersionResource),
    /// Defers to the next resolver in the chain
    Continue,
}

/// Resolves `arg` with the default chain: fully specified first, then
/// group-resource with the mapper's preferred version.
///
/// Never fails. When nothing matches the result holds only `arg`, exactly as
/// the user typed it.
pub fn resource_for(mapper: &dyn RestMapper, arg: &str) -> GroupVersionResource {
    let chain = ChainResolver::default();
    match chain.resolve(mapper, &arg.to_lowercase()) {
        ResolveResponse::Resolved(gvr) => {
            debug!("Resolved resource '{arg}' to '{gvr}'");
            gvr
        }
        ResolveResponse::Continue => {
            debug!("Cannot resolve resource '{arg}', use it as is");
            GroupVersionResource::from_resource(arg)
        }
    }
}
