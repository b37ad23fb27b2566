//! Integration tests for curves-rs crates.
//!
//! End-to-end scenarios across the catalog, configuration store, table
//! builder, composer and composite transform.
