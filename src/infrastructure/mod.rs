//! In-memory adapters for the domain ports. No real network I/O happens
//! anywhere in this crate; these stubs stand in for the purchase API and the
//! notification channels.

pub mod in_memory;
pub mod senders;
