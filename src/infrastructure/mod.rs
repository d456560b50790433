//! Infrastructure layer - Storage backends, services and process plumbing

pub mod driver;
pub mod logging;
pub mod observability;
pub mod storage;
pub mod team;
