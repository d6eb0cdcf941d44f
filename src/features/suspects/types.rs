use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suspect {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alibi: Option<String>,
    #[serde(default, rename = "lastKnownLocation")]
    pub last_known_location: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewSuspect {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alibi: Option<String>,
    #[serde(rename = "lastKnownLocation", skip_serializing_if = "Option::is_none")]
    pub last_known_location: Option<String>,
}
