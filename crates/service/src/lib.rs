//! Service layer providing the registry's business operations on top of models.
//! - Separates business logic from data access through `RegistryRepository`.
//! - Reuses validation rules and entity definitions in the `models` crate.
//! - Provides clear error types for the HTTP layer to map.

pub mod errors;
pub mod registry;
#[cfg(test)]
pub mod test_support;
