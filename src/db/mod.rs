pub mod favorites;
pub mod sqlite;
pub mod users;

pub use sqlite::Database;
