//! Garimpo Providers - Model-call gateway
//!
//! The only asynchronous seam in the system. AI-augmented generation and
//! optimization delegate prompt writing to an external creator model
//! through the [`ModelGateway`] trait; everything else in the engine is
//! synchronous and pure.
//!
//! This crate owns the trait, its error taxonomy, and the catalog of
//! supported creator models. It ships no HTTP client: wiring a concrete
//! provider is the embedding application's job. [`fakes::FakeGateway`]
//! supports testing the AI paths without a network.

mod catalog;
mod error;
pub mod fakes;
mod gateway;

pub use catalog::{creator_by_key, CreatorModel, CREATOR_MODELS};
pub use error::GatewayError;
pub use gateway::{GatewayRequest, GatewayResponse, ModelGateway, TokenUsage};
