pub mod builtin_catalog;
pub mod json_catalog;
pub mod json_messages;
#[cfg(test)]
pub mod mock_catalog;
pub mod table_catalog;
