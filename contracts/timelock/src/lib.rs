#![no_std]

mod events;
pub mod payload;
mod self_call;
mod timelock;

pub use timelock::{
    DataKey, ExecutionOutcome, Timelock, TimelockBounds, TimelockClient, GRACE_PERIOD,
    MAXIMUM_DELAY, MINIMUM_DELAY,
};
