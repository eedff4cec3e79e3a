pub mod auth;
pub mod comment;
pub mod common;
pub mod matches;
pub mod team;
pub mod user;
