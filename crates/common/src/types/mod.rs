use serde::Serialize;

/// Body of the liveness endpoint.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

impl Health {
    pub fn running() -> Self {
        Self { status: "OK", message: "Server is running" }
    }
}
