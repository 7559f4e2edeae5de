//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over how
//! bytes reach the decoder. See [`crate::avec`] for iterators covering the
//! common cases of slices and readers.
//!
//! # Architecture
//!
//! A log is a sequence of records, each a 7-byte [`header::Header`], a
//! payload of the length the header declares, and a single `0x0A`
//! terminator byte. Every state is represented by a zero-size (or nearly
//! so), non-copy token. Once enough bytes are ready, transition to another
//! state by calling the token's `advance` method. This will return a
//! successor state token, along with any extracted data.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. It accepts nothing but a version header, so a log which does
//! not open with one is rejected before any record is produced.
//!
//! Some areas of the decoding process are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Supplying exactly as many payload bytes as the header declares. Use
//! [`record::Payload::len`] and [`record::Version::len`].
//!
//! - Distinguishing a clean end of stream (no bytes where a header would
//! begin) from a truncated one.

pub mod cursor;
pub mod data;
pub mod header;
pub mod record;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::StreamStart;
