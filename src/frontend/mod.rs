//! Frontend - view-side consumers of `MessageHandling`.
//!
//! A [`MessageHandlingProvider`] holds the single handler instance for a UI
//! tree and builds [`TodosViewModel`]s wired to it. The view-model never
//! talks to a concrete backend: in-process (`application::MessageHandler`)
//! and remote (`adapters::http::HttpMessageHandling`) are interchangeable.

mod provider;
mod view_model;

#[cfg(test)]
pub(crate) mod testing;

pub use provider::MessageHandlingProvider;
pub use view_model::TodosViewModel;
