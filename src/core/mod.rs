//! Core functionality for the gateway
//!
//! This module contains the speech-to-speech translation pipeline.

pub mod speech;
