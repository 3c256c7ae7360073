use serde::{Deserialize, Serialize};

pub const RECORD_ID: &str = "123";
pub const GREETING: &str = "Hello from Lambda!";
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// The single item written on every invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub data: String,
}

impl Record {
    pub fn greeting() -> Self {
        Self {
            id: RECORD_ID.to_string(),
            data: GREETING.to_string(),
        }
    }
}

/// Envelope returned to the invocation runtime.
///
/// `body` carries a JSON document, not raw text: for the greeting it holds the
/// quoted string `"Hello from Lambda!"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

pub fn success_response(payload: impl Serialize) -> Result<InvocationResponse, serde_json::Error> {
    Ok(InvocationResponse {
        status_code: SUCCESS_STATUS_CODE,
        body: serde_json::to_string(&payload)?,
    })
}

pub fn greeting_response() -> Result<InvocationResponse, serde_json::Error> {
    success_response(GREETING)
}
