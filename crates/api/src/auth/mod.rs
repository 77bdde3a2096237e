//! Password hashing and JWT access-token helpers.

pub mod jwt;
pub mod password;
