//! An abstraction layer for text-generation model providers.
//!
//! This crate establishes a unified protocol for the diary analysis
//! pipeline to interact with various hosted models, so that the pipeline
//! can seamlessly switch between them without modifying the core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod reply;

pub use error::*;
pub use provider::*;
pub use reply::*;
pub use request::*;
