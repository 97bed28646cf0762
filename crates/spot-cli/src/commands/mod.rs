pub mod generate;
pub mod layout;
pub mod orders;
pub mod stats;
pub mod verify;
pub mod version;
