pub mod auth;
pub mod checklist;
pub mod directory;
pub mod evidence;
pub mod incident;
pub mod settings;
pub mod shift_session;
