//! Application layer - One service per entry point, generic over the ports.

pub mod completion;
pub mod provisioning;
pub mod query;
pub mod requester;
