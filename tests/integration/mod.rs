//! End-to-end checks of the prompt → completion → reply pipeline

pub mod relay;
