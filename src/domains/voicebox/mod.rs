//! Voicebox domain module.
//!
//! Client side of the Stardog Cloud Voicebox API: the `CloudClient` and
//! `VoiceboxApp` traits the tools call through, the HTTP implementation,
//! and the request/response models.

mod client;
mod error;
mod models;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{
    AUTH_TOKEN_OVERRIDE_HEADER, CLIENT_ID_HEADER, CloudClient, DEFAULT_ENDPOINT,
    StardogCloudClient, VoiceboxApp,
};
pub use error::{ClientError, ClientResult};
pub use models::{VoiceboxAnswer, VoiceboxAppSettings, VoiceboxRequest};
