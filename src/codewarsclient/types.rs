//! Partial definition of types used in the response for a user lookup

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CodewarsUser {
    pub username: String,
    pub clan: Option<String>,
    pub ranks: Option<UserRanks>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserRanks {
    pub overall: Option<RankScore>,
    #[serde(default)]
    pub languages: HashMap<String, RankScore>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RankScore {
    pub score: i64,
}
