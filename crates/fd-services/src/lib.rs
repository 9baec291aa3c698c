//! Service layer for frontdesk. One module per component: interactive name
//! collection, upstream JSON fetch, validated persistence, and the outbound
//! mail notification. Components return typed errors and never print;
//! diagnostic output is the caller's policy.

pub mod fetch;
pub mod intake;
pub mod notify;
pub mod persist;
