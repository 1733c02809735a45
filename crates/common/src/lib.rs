//! Shared building blocks for the registry workspace: logging setup and
//! response types reused by the HTTP layer.

pub mod types;

pub mod utils {
    pub mod logging;
}
