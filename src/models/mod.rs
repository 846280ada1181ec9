//! Remote entities consumed by the console.
//!
//! Every entity arrives as a full snapshot per poll. The records are declared
//! statically and decoded through serde; identity is exposed via [`Entity`].

pub mod database;
pub mod endpoint;
pub mod schema;
pub mod table_data;

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;

pub use database::{Database, Pool};
pub use endpoint::Endpoint;
pub use schema::{Schema, Table, TableKey};
pub use table_data::{Column, ColumnKey, Row, TableData};

/// A remotely sourced record with a stable identity across polls.
pub trait Entity: Clone + PartialEq + Debug + DeserializeOwned {
    type Key: Clone + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}
