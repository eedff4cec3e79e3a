pub mod helpers;
pub mod comments;
pub mod matches;
pub mod teams;
pub mod users;
