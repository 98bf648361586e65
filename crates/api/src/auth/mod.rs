//! Access-token issuing and validation.

pub mod jwt;
