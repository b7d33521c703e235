// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec focuses on a single
//! page shape and encodes *where the ground truth lives in the HTML* and
//! *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** for one page kind (currently the loto results
//!   page and its marker-class table).
//! - **Structural traversal rules**: which node is a row, which children
//!   count as cells, how nested value tables composite into one token.
//! - **Light shaping** into a small bundle struct the rest of the pipeline
//!   can rely on.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **persistence** (`file`): the runner
//!   wires those around the spec.
//! - **Filename/export conventions**: `core::sanitize` + `file`.
//!
//! ## Conventions & invariants
//! - Position/class-based traversal only, never content-based guessing.
//! - First match wins wherever the page could repeat a shape.
//! - Specs are testable **offline** against synthetic snippets; every edge
//!   rule carries a unit test next to the code.
pub mod results;
