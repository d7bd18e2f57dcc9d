//! cronexplain CLI library.
//!
//! This crate provides the presentation layer for parsed schedules: the
//! fixed-width table renderer and the JSON renderer consumed by the
//! `cronexplain` binary.

pub mod render;
