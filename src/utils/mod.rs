pub mod file_ops;
pub mod naming;
pub mod playlist;
pub mod reporting;
