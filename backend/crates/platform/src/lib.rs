//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256 signing, base64url, secrets)
//! - Password hashing (Argon2id) and password policy
//! - `Authorization: Bearer` header handling

pub mod bearer;
pub mod crypto;
pub mod password;
