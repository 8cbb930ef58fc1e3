//! Construction Management True Cost Engine
//!
//! This crate estimates the loaded payroll cost of a construction management
//! team across the pre-construction, construction and closeout phases, derives
//! a rough-order-of-magnitude (ROM) required fee from overhead and profit
//! assumptions, and measures how well fee proposals cover both figures.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
