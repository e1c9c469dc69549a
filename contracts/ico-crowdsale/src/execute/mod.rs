pub mod admin;
pub mod finalize;
pub mod init;
pub mod purchase;
pub mod refund;
pub mod whitelist;
