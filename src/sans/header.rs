//! States processing record headers.

use either::Either::{self, Left, Right};
use thiserror::Error;
use zerocopy::FromBytes;

use crate::event::{FromPayload, LogVersion};

use super::record::{Payload, Version};

/// Size of an encoded record header.
pub const HEADER_SIZE: usize = 7;

/// The fixed-size prefix of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Time since mission start.
    pub timestamp: u32,
    /// Selects the payload schema.
    pub type_code: u8,
    /// Number of payload bytes between this header and the terminator.
    pub payload_length: u16,
}

impl Header {
    /// Parse a little-endian header.
    pub fn parse(r: [u8; HEADER_SIZE]) -> Self {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawHeader {
            timestamp: [u8; 4],
            type_code: u8,
            payload_length: [u8; 2],
        }

        let RawHeader {
            timestamp,
            type_code,
            payload_length,
        } = zerocopy::transmute!(r);

        Self {
            timestamp: u32::from_le_bytes(timestamp),
            type_code,
            payload_length: u16::from_le_bytes(payload_length),
        }
    }

    /// Whether this header opens a new sub-stream.
    pub fn is_version(&self) -> bool {
        self.type_code == LogVersion::TYPE_CODE
    }
}

/// An error advancing over the first header of a stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The stream does not open with a version header.
    #[error("Stream opens with record type {type_code} instead of a version header.")]
    MissingVersionHeader { type_code: u8 },
}

/// State token to decode the first header of a stream.
#[derive(Debug)]
pub struct StreamStart;

impl StreamStart {
    /// Transition to another state by decoding the first header of a stream.
    ///
    /// Returns the header, and a successor state token for the version
    /// payload.
    pub fn advance(self, r: [u8; HEADER_SIZE]) -> Result<(Header, Version), HeaderError> {
        let header = Header::parse(r);

        if !header.is_version() {
            Err(HeaderError::MissingVersionHeader {
                type_code: header.type_code,
            })?;
        }

        Ok((header, Version::new(header.payload_length)))
    }
}

/// State token to decode a header after the first.
#[derive(Debug)]
pub struct RecordStart(pub(super) ());

impl RecordStart {
    /// Transition to another state by decoding a record header.
    ///
    /// Returns the header, and a successor state token. Version headers,
    /// which begin a new sub-stream, are routed to their own state.
    pub fn advance(self, r: [u8; HEADER_SIZE]) -> (Header, Either<Payload, Version>) {
        let header = Header::parse(r);

        let successor = if header.is_version() {
            Right(Version::new(header.payload_length))
        } else {
            Left(Payload::new(header.type_code, header.payload_length))
        };

        (header, successor)
    }
}
