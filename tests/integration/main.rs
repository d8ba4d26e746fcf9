#[path = "../common/mod.rs"]
mod common;

mod solver_tests;
