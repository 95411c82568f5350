pub mod list;
pub mod transaction;
