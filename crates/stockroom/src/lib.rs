//! # Stockroom
//!
//! Inventory and request tracking for a school stockroom: an item catalog with stock
//! levels, a request approval workflow that takes stock off the shelf on fulfillment, and
//! read models for the dashboard and reports pages.
//!
//! - [`model`] - records, typed IDs and create/patch payloads
//! - [`inventory_actor`], [`request_actor`], [`user_actor`] - one actor per collection
//! - [`clients`] - typed clients for those actors
//! - [`workflow`] - approve, reject and fulfill
//! - [`views`] - filters, sorting, reports and the dashboard snapshot
//! - [`lifecycle`] - [`StockroomSystem`](lifecycle::StockroomSystem), which starts and stops it all

pub mod clients;
pub mod config;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod request_actor;
pub mod seed;
pub mod user_actor;
pub mod views;
pub mod workflow;
