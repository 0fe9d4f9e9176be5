//! Application services composing the ports into user-facing operations.

mod order;

pub use order::OrderService;
