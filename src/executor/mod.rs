//! Executor module for file operations

pub mod copy;

pub use copy::copy_job;
