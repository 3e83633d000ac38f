pub mod computers;
pub mod ssh_keys;
