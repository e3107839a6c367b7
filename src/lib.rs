//! Insurance tower layer computation engine: attachment points,
//! quota-share band status, pricing ratios, and canonical option names
//! for an excess-of-loss program, derived purely from an in-memory
//! ordered tower. No I/O, no shared state; callers persist.

pub mod attachment;
pub mod config;
pub mod layer;
pub mod naming;
pub mod quota_share;
pub mod ratios;
