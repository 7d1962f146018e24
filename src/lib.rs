//! HR domain engine for the Dayflow product.
//!
//! This crate provides the computation core behind Dayflow's HR views:
//! salary breakdowns (gross/deductions/net), attendance aggregation
//! (work hours, extra hours, day status), and the leave-request ledger
//! with its pending/approved/rejected lifecycle. State lives behind the
//! [`store::Store`] traits with an in-memory implementation, and the
//! [`api`] module exposes the operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod leave;
pub mod models;
pub mod payroll;
pub mod store;
