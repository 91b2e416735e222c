//! Movement domain: system modules for locomotion updates.

pub(crate) mod abilities;
pub(crate) mod input;

pub(crate) use abilities::{handle_respawns, update_abilities};
pub(crate) use input::read_input;
