//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module return lazy iterators of
//! [`Record`](crate::event::Record)s, decoding one record per call to `next`.
//! An iterator yields at most one error, after which it ends: every fault in
//! this format leaves the stream desynchronized.
//!
//! Records of unknown type are yielded as
//! [`Event::Unknown`](crate::event::Event::Unknown) and logged as a warning;
//! they do not end decoding.

#[cfg(feature = "std")]
extern crate std;

use either::Either::{self, Left, Right};
use thiserror::Error;
use tracing::warn;

use crate::{
    event::Event,
    sans::{
        cursor::CursorError,
        header::{HEADER_SIZE, Header, HeaderError, RecordStart, StreamStart},
        record::{Payload, PayloadError, Terminator, Version},
    },
};

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

/// Errors occurring while decoding a stream.
///
/// Offsets are of the first byte of the offending record, and indices count
/// records from zero.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The stream ended part-way through a header.
    #[error("Stream ended {available} bytes into the header of record {index} at offset {offset}.")]
    TruncatedStream {
        index: usize,
        offset: usize,
        available: usize,
    },
    /// The stream ended part-way through a payload.
    #[error(
        "Record {index} at offset {offset} declares {declared} payload bytes, but only {available} remain."
    )]
    TruncatedPayload {
        index: usize,
        offset: usize,
        declared: u16,
        available: usize,
    },
    /// The first record is not a version header.
    #[error("Stream opens with record type {type_code} instead of a version header.")]
    MissingVersionHeader { type_code: u8 },
    /// A version header names an unsupported version.
    #[error("Record {index} at offset {offset} declares unsupported log version {version}.")]
    UnsupportedVersion {
        index: usize,
        offset: usize,
        version: u32,
    },
    /// A payload is not followed by the terminator byte.
    #[error("Record {index} at offset {offset} is not terminated (found {found:?}).")]
    MissingTerminator {
        index: usize,
        offset: usize,
        found: Option<u8>,
    },
    /// A payload does not match the schema of its type.
    #[error("Record {index} (type {type_code}) at offset {offset} does not match its schema: {source}")]
    Schema {
        index: usize,
        offset: usize,
        type_code: u8,
        #[source]
        source: CursorError,
    },
}

impl From<HeaderError> for Error {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::MissingVersionHeader { type_code } => {
                Self::MissingVersionHeader { type_code }
            }
        }
    }
}

/// The state between records, shared by the slice and reader decoders.
type State = Either<StreamStart, RecordStart>;

/// Where in the stream the current record begins.
#[derive(Debug, Default, Clone, Copy)]
struct Progress {
    index: usize,
    offset: usize,
}

impl Progress {
    /// Decode a header, enforcing that a stream opens with a version header.
    fn open(
        &self,
        state: State,
        r: [u8; HEADER_SIZE],
    ) -> Result<(Header, Either<Payload, Version>), Error> {
        Ok(match state {
            Left(state) => {
                let (header, version) = state.advance(r)?;
                (header, Right(version))
            }
            Right(state) => state.advance(r),
        })
    }

    /// Decode a payload of exactly the declared length.
    fn payload(
        &self,
        header: &Header,
        state: Either<Payload, Version>,
        r: &[u8],
    ) -> Result<(Event, Terminator), Error> {
        let result = match state {
            Left(state) => state.advance(r),
            Right(state) => state
                .advance(r)
                .map(|(version, terminator)| (Event::LogVersion(version), terminator)),
        };

        let (event, terminator) = result.map_err(|err| match err {
            PayloadError::Schema(source) => Error::Schema {
                index: self.index,
                offset: self.offset,
                type_code: header.type_code,
                source,
            },
            PayloadError::UnsupportedVersion(version) => Error::UnsupportedVersion {
                index: self.index,
                offset: self.offset,
                version,
            },
        })?;

        if let Event::Unknown(unknown) = &event {
            warn!(
                type_code = unknown.type_code,
                length = unknown.payload.len(),
                index = self.index,
                "Unknown record type encountered"
            );
        }

        Ok((event, terminator))
    }

    /// Check the terminator, or its absence at the end of the stream.
    fn close(&self, state: Terminator, found: Option<u8>) -> Result<RecordStart, Error> {
        let missing = Error::MissingTerminator {
            index: self.index,
            offset: self.offset,
            found,
        };

        match found {
            Some(found) => state.advance([found]).map_err(|_| missing),
            None => Err(missing),
        }
    }

    fn truncated_stream(&self, available: usize) -> Error {
        Error::TruncatedStream {
            index: self.index,
            offset: self.offset,
            available,
        }
    }

    fn truncated_payload(&self, header: &Header, available: usize) -> Error {
        Error::TruncatedPayload {
            index: self.index,
            offset: self.offset,
            declared: header.payload_length,
            available,
        }
    }

    /// Move past a complete record.
    fn advance(&mut self, header: &Header) {
        self.index += 1;
        self.offset += HEADER_SIZE + header.payload_length as usize + 1;
    }
}
