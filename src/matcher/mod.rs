pub mod files;
pub mod order;
