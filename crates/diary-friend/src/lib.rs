//! An out-of-the-box diary friend that analyzes diary entries with a
//! hosted model and keeps a supportive conversation going.
//!
//! The crate includes a CLI tool for using in the terminal. And you can
//! also use it as a library to bring the analysis pipeline into your own
//! host apps.

#![deny(missing_docs)]

pub mod render;

/// Re-exports of [`diary_friend_core`] crate.
pub mod core {
    pub use diary_friend_core::*;
}

/// Re-exports of [`diary_friend_model`] crate, for host apps that bring
/// their own model provider.
pub mod model {
    pub use diary_friend_model::*;
}
