//! Shared support for router integration tests
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
