//! Integration tests for Layer 1: Versification
//!
//! Tests for built-in systems, derived systems, and translation aliases.

mod aliases;
mod systems;
