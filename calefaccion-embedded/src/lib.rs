#![no_std]

extern crate alloc;

pub mod error;
pub mod motion;
pub mod relay;

#[cfg(test)]
mod mock;

pub use error::*;
pub use motion::*;
pub use relay::*;
