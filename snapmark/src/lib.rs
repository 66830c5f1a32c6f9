//! Snapmark — self-hostable image-to-Markdown OCR service.
//!
//! Sends images (by URL) to a vision-capable chat-completion model and
//! returns the transcription as Markdown. Authenticated callers can persist
//! results and store their own provider credentials; everyone else rides on
//! the service-wide defaults.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ocr;
pub mod services;
