pub mod settings;
pub mod jwt;
pub mod fpl;
pub mod sync;
