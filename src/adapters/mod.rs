//! Port implementations.
//!
//! `live` adapters back a real session (disk, random UUIDs, system
//! clock); `memory` adapters keep everything in process for tests.

pub mod live;
pub mod memory;
