pub mod admin;
pub mod auth;
pub mod checklists;
pub mod directory;
pub mod evidence;
pub mod incidents;
pub mod profile;
pub mod settings;
pub mod shifts;
pub mod uploads;
