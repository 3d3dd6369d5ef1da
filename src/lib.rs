//! Electre Tri - Outranking classification of food products
//!
//! This crate sorts products into five ordered quality classes (A' best to
//! E' worst) with the ELECTRE TRI pessimistic and optimistic procedures,
//! and compares the result with reference nutrition grades.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
