//! Domain layer: purchase state, discount rules, checkout events, and the
//! ports through which the application talks to the outside world.

pub mod discount;
pub mod event;
pub mod ports;
pub mod purchase;
