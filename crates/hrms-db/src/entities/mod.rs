//! Database entities

pub mod department;
pub mod employee;
pub mod job;
pub mod user;
