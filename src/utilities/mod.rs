pub mod config;
pub mod constants;
pub mod file_management;
pub mod string_manipulators;
