//! estate-suggest-cli
//! ==================
//!
//! Command-line interface for the `estate-suggest-core` suggestion engine.
//!
//! This crate primarily provides a binary (`estate-suggest`). The library
//! target only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! estate-suggest --help
//! estate-suggest --state 31 --city 3171 locations kebayoran
//! estate-suggest suggest rumah --recent "rumah menteng" --trending "rumah bsd" --rank
//! estate-suggest click "rumah menteng"
//! ```
//!
//! For programmatic access use the `estate-suggest-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
