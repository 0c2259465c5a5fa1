//! Member-account credential security engine
//!
//! Decides whether a candidate password meets the acceptance policy,
//! scores its strength for live feedback, and converts accepted
//! passwords into salted, verifiable credentials.
//!
//! # Features
//!
//! - `serde`: Serialize/Deserialize support for the result types
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GUARD_WORDLIST_PATH`: Custom path to a wordlist extension
//!   file (default: `./assets/wordlist.txt`). The built-in list is
//!   always active; loading an extension is optional.
//!
//! # Example
//!
//! ```rust
//! use pwd_guard::{evaluate_strength, hash_password, validate_password, verify_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor#Xyz".to_string().into());
//!
//! let validation = validate_password(&password);
//! assert!(validation.valid);
//!
//! let strength = evaluate_strength(&password);
//! println!("Score: {} ({})", strength.score, strength.level);
//!
//! // Persist the blob; check it again at login
//! let blob = hash_password(&password).expect("secure RNG unavailable");
//! assert!(verify_password(&password, &blob));
//! ```

// Internal modules
mod credential;
mod policy;
mod signatures;
mod strength;
mod types;
mod wordlist;

// Public API
pub use credential::{
    hash_password, verify_password, CredentialBlob, CredentialError, DIGEST_LENGTH, SALT_LENGTH,
};
pub use policy::validate_password;
pub use signatures::is_weak_by_signature;
pub use strength::evaluate_strength;
pub use types::{StrengthLevel, StrengthResult, ValidationResult};
pub use wordlist::{init_wordlist, init_wordlist_from_path, wordlist_size, WordlistError};
