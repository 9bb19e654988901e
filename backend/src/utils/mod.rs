pub mod identity;
pub mod jwt;
pub mod password;
pub mod time;
