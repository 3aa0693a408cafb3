pub mod clock;
pub mod config;
pub mod employee;
pub mod export;
pub mod init;
pub mod records;
pub mod serve;
