pub mod computer_repo;
pub mod ssh_key_repo;

pub use computer_repo::ComputerRepo;
pub use ssh_key_repo::SshKeyRepo;
