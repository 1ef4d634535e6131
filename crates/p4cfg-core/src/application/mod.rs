//! Application layer: the configuration lifecycle.
//!
//! - [`config`] – [`config::Config`], settings plus dirty tracking.
//! - [`store`] – load with fallback, save only when dirty.
//! - [`current`] – the process-wide published instance.
//!
//! **Dependency rule**: this layer depends on `domain` only.  File-system
//! access comes in through the [`store::DocumentStore`] trait, implemented in
//! `infrastructure`.

pub mod config;
pub mod current;
pub mod store;
