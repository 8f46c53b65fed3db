use portfolio_models::contact::ContactSubmission;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactSubmission {
    /// Full name of the sender
    pub name: String,
    /// Email address of the sender
    pub email: String,
    /// Subject of the message
    pub subject: String,
    /// Content of the message
    pub message: String,
}

impl ApiContactSubmission {
    /// Decode a request body. The body has to be a json object whose known
    /// fields are strings. Missing fields are empty, other fields are ignored.
    ///
    /// Bodies that are not json at all fail with a syntax or eof error
    /// ([`serde_json::Error::is_syntax`], [`serde_json::Error::is_eof`]), json
    /// of the wrong shape fails with a data error.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            _ => Err(serde::de::Error::custom("expected a json object")),
        }
    }
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}
