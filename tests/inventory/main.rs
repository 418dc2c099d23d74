//! End-to-end tests of the inventory through the public API.

mod common;

mod concurrency;
mod config;
mod persistence;
mod scenarios;
