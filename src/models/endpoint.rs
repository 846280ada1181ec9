use serde::{Deserialize, Serialize};

use super::Entity;

/// A static API endpoint advertised by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub prefix: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
}

impl Entity for Endpoint {
    type Key = String;

    fn key(&self) -> String {
        self.prefix.clone()
    }
}
