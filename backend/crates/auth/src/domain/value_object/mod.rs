//! Value Object Module

pub mod display_name;
pub mod email;
pub mod identity;
pub mod user_id;
pub mod user_password;
pub mod user_role;
