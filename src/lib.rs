//! Routinist - AI-assisted routine builder
//!
//! A REST generation service that turns free-text prompts into structured
//! routines via an OpenAI-compatible chat-completion API, and an editor
//! session that drives generation, raw-JSON editing, and local
//! persistence from the client side.

pub mod ai;
pub mod config;
pub mod editor;
pub mod generation;
pub mod logging;
pub mod rest;
pub mod routine;
