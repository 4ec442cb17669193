pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod take;
