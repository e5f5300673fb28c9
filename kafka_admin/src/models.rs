mod acl;
mod broker;
mod group;
mod partition;
pub(crate) mod rest;
mod topic;

pub use acl::*;
pub use broker::*;
pub use group::*;
pub use partition::*;
pub use topic::*;
