//! User notification module.
//!
//! Provides the sink trait through which services surface user-visible
//! error notifications. Runtime adapters (desktop shell, web host)
//! implement the sink to translate notifications into toasts or dialogs.

mod sink;

pub use sink::*;
