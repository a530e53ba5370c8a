//! PolishAI — resume improvement pipeline.
//!
//! Server side: an Axum service that accepts a PDF/DOCX upload, extracts its
//! text, runs it through the DeepSeek completion API, and returns
//! `{originalContent, improvedContent, suggestions}`.
//!
//! Client side (library modules usable from any frontend): upload validation
//! and submission ([`uploader`]), word-level comparison rendering
//! ([`compare`], [`diff`]), and PDF/DOCX download generation ([`export`]).

pub mod compare;
pub mod completion;
pub mod config;
pub mod diff;
pub mod errors;
pub mod export;
pub mod extract;
pub mod models;
pub mod routes;
pub mod state;
pub mod uploader;
