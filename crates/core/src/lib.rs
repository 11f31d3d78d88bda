//! Core library for shoptools
//!
//! This crate implements the **Functional Core** of the shoptools
//! application, following the Functional Core - Imperative Shell
//! architectural pattern.
//!
//! - **`shoptools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`shoptools`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions in this crate are deterministic and side-effect free, so
//! they can be tested with simple fixture data and no mocking.
//!
//! # Module Organization
//!
//! - [`catalog`]: Wire types and transformations for the product catalog API
//! - [`criteria`]: Filter and paging parameters sent with each query
//! - [`paging`]: Page navigation state derived from the current listing page

pub mod catalog;
pub mod criteria;
pub mod paging;
