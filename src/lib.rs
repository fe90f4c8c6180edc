//! recap: turns a profile identifier into a year-in-review story.
//!
//! [`profile`] normalizes the raw identifier, a [`posts::PostSource`]
//! supplies posts, [`review`] computes engagement stats and renders the
//! narrative, and [`service`] ties them together behind the error policy
//! shared by the [`web`] gateway and the CLI.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod posts;
pub mod profile;
pub mod review;
pub mod service;
pub mod web;
