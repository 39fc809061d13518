use serde::{Deserialize, Serialize};

/// JSON body of non-auth error responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
