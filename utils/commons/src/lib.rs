//! It exposes all common structs and types shared by the auction and the
//! auction factory contracts.
pub use crate::{
    account::*, actions::*, amount::*, constants::*, context::*, errors::*, ladder::*, logger::*,
    response::*, storage::*, structs::*, types::*,
};

#[cfg(any(test, feature = "test-utils"))]
pub mod test;

mod account;
mod actions;
mod amount;
mod constants;
mod context;
mod errors;
mod ladder;
mod logger;
mod response;
mod storage;
mod structs;
mod types;
