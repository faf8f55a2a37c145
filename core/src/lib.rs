//! The PRINCE candidate-generation engine.
//!
//! Given a dictionary of short elements, enumerates every password that can be formed by
//! concatenating a bounded sequence of elements, in a deterministic order that prefers shorter
//! total lengths with more common component lengths. See [`PrinceEngine`] for the entry point.

mod bucket;
mod chain;
mod composition;
mod config;
mod distribution;
mod element;
mod error;
mod scheduler;
mod sink;

pub use {
    bucket::LengthBucket,
    chain::Chain,
    composition::{Composition, CompositionIter},
    config::{PrinceConfig, PrinceConfigBuilder, DEFAULT_ELEM_CNT_MAX, DEFAULT_ELEM_CNT_MIN},
    element::{Element, ElementStore},
    error::{PrinceError, PrinceResult},
    scheduler::PrinceEngine,
    sink::{CandidateSink, VecSink},
};

/// The maximum length, in bytes, of an input element or a target password.
pub const L_MAX: u8 = 16;
