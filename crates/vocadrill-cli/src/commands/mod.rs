pub mod drill;
pub mod init;
pub mod translate;
pub mod validate;
pub mod words;
