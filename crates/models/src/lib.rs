//! Persistence model for the registry: SeaORM entities, field rules and
//! connection helpers shared by the service and server crates.

pub mod errors;
pub mod db;
pub mod validation;
pub mod company;
pub mod service;

#[cfg(test)]
mod tests;
