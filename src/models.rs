//! Frontend Models
//!
//! User record as served by the remote store. Field names on the wire are
//! `nome`, `idade` and `email`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier
///
/// The store hands out numbers today; string ids are accepted as well so the
/// client never depends on their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

/// User record (matches remote store)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade")]
    pub age: u32,
    pub email: String,
}

impl User {
    /// The editable part of the record
    pub fn input(&self) -> UserInput {
        UserInput {
            name: self.name.clone(),
            age: self.age,
            email: self.email.clone(),
        }
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade")]
    pub age: u32,
    pub email: String,
}
