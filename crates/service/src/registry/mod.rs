//! Registry module: companies and the services they offer, in the same
//! domain / repository / service layering as the rest of the crate.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::RegistryService;
