use serde::Serialize;

/// `{"message": "..."}` acknowledgement used by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

impl Message {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
