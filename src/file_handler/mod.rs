//! File handler module for Cosmic Reader
//!
//! Handles file system access for documents:
//! - Reading documents and extracting page metadata
//! - Recognizing supported document types

pub mod loader;

pub use loader::*;
