#![allow(dead_code)]

pub mod fpl_mock;
pub mod utils;
