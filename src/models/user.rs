use serde::{Deserialize, Serialize};

/// Owner account record. Credential issuance lives elsewhere; the access
/// gate only needs to confirm that the token subject still exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
}
