//! The Creem REST client.
//!
//! [`CreemClient`] is the per-tenant handle every request flows through. It
//! exposes the generic [`CreemClient::exchange`] pipeline; the typed endpoint
//! methods live in [`crate::rest::resources`] as further `impl CreemClient`
//! blocks.

mod client;

pub use client::CreemClient;
