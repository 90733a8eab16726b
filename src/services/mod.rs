//! Service layer over the remote API

pub mod resource_store;

pub use resource_store::ResourceStore;
