//! countrydex-cli
//! ==============
//!
//! Command-line country browser for `countrydex-core`.
//!
//! This crate primarily provides a binary (`countrydex`). The small library
//! target exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! countrydex list
//! countrydex list --search united --page 1
//! countrydex show deu
//! countrydex --input countries.json.gz browse
//! countrydex snapshot countries.bin.gz
//! ```
//!
//! Configuration is read from `COUNTRYDEX_*` environment variables (a
//! `.env` file is honoured) and then overridden by command-line flags.
//! Logging goes to stderr and is controlled with `RUST_LOG`.
#![cfg_attr(docsrs, feature(doc_cfg))]
