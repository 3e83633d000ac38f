//! Error messages used throughout the application.
//!
//! Centralized so handlers, services and tests agree on the exact wording.

// Computer-related errors
pub const COMPUTER_NOT_FOUND: &str = "Computer not found";
pub const COMPUTER_ALREADY_EXISTS: &str = "Computer already exists";
pub const MODEL_PARAMETER_REQUIRED: &str = "Model parameter required";

/// "Maker '<maker>' not found"
pub fn maker_not_found(maker: &str) -> String {
    format!("Maker '{maker}' not found")
}

/// "Computer not found for maker '<maker>' and model '<model>'"
pub fn computer_not_found_for(maker: &str, model: &str) -> String {
    format!("Computer not found for maker '{maker}' and model '{model}'")
}

// SSH key-related errors
pub const SSH_KEY_NOT_FOUND: &str = "SSH key not found";
pub const SSH_KEY_ALREADY_EXISTS: &str = "SSH key already exists";
pub const SSH_KEY_INVALID_RSA: &str =
    "The content of the public key is invalid for the type 'ssh-rsa'";
pub const SSH_KEY_INVALID_ED25519: &str =
    "The content of the public key is invalid for the type 'ed25519'";

// Validation messages
pub const VALIDATION_TYPE_REQUIRED: &str = "Type is required";
pub const VALIDATION_MAKER_REQUIRED: &str = "Maker is required";
pub const VALIDATION_MODEL_REQUIRED: &str = "Model is required";
pub const VALIDATION_SSH_KEY_REQUIRED: &str = "SSH key payload is required";
pub const VALIDATION_SSH_KEY_TYPE_REQUIRED: &str = "SSH key type is required";
pub const VALIDATION_PUBLIC_KEY_REQUIRED: &str = "Public key is required";
pub const VALIDATION_SSH_KEY_TYPE_PATTERN: &str = "must match \"^(ssh-rsa|ssh-ed25519)$\"";
