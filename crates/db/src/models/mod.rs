pub mod computer;
pub mod ssh_key;
