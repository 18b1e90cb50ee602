//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Type, Modifier, ImportTable, registries, and Error.
