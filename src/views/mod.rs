// Console views
pub mod database;
pub mod schema;
pub mod table_data;

pub use database::{ACTION_MODULES, DatabaseEvent, DatabaseView};
pub use schema::{FileLabel, SchemaEvent, SchemaView};
pub use table_data::TableDataView;
