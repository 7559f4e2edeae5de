#![no_std]

//! A strict decoder for the binary `.mlg` mission logs written by a flight
//! simulator.
//!
//! A log is a flat sequence of records, each a small header, a payload whose
//! layout is fixed by the record's type code, and a terminator byte. This
//! crate decodes every known record type into a typed
//! [`Event`](event::Event), checking that each payload is consumed exactly,
//! and renders records back into the game's own text log format.
//!
//! Most users should begin with the iterators in the [`avec`] module. If
//! these prove insufficient, consider driving the state machine in the
//! [`sans`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).
//! - `cli`: build the `mlg2txt` transcoder binary (default).

extern crate alloc;

pub mod avec;
pub mod event;
pub mod sans;
