//! States processing record payloads and terminators.

use thiserror::Error;

use crate::event::{Event, FromPayload, LogVersion};

use super::{
    cursor::{Cursor, CursorError},
    header::RecordStart,
};

/// The only log version this decoder understands.
pub const SUPPORTED_VERSION: u32 = 17;

/// The byte closing every record.
pub const TERMINATOR: u8 = 0x0A;

/// An error advancing over a payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload does not match the schema of its type.
    #[error("Payload does not match its schema: {0}")]
    Schema(#[from] CursorError),
    /// The version header names a version other than [`SUPPORTED_VERSION`].
    #[error("Unsupported log version ({0}).")]
    UnsupportedVersion(u32),
}

/// State token to decode a payload.
#[derive(Debug)]
pub struct Payload {
    type_code: u8,
    length: u16,
}

impl Payload {
    pub(super) fn new(type_code: u8, length: u16) -> Self {
        Self { type_code, length }
    }

    /// Number of bytes to supply to [`advance`](Self::advance).
    pub fn len(&self) -> usize {
        self.length as usize
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Transition to another state by decoding a payload of exactly
    /// [`len`](Self::len) bytes.
    ///
    /// Returns the decoded event, and a successor state token. Payloads of
    /// unknown types are returned unparsed as [`Event::Unknown`].
    pub fn advance(self, r: &[u8]) -> Result<(Event, Terminator), PayloadError> {
        let event = Event::decode(self.type_code, r)?;
        Ok((event, Terminator(())))
    }
}

/// State token to decode the payload of a version header.
#[derive(Debug)]
pub struct Version {
    length: u16,
}

impl Version {
    pub(super) fn new(length: u16) -> Self {
        Self { length }
    }

    /// Number of bytes to supply to [`advance`](Self::advance).
    pub fn len(&self) -> usize {
        self.length as usize
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Transition to another state by decoding a version payload of exactly
    /// [`len`](Self::len) bytes.
    ///
    /// Returns the version record, and a successor state token.
    pub fn advance(self, r: &[u8]) -> Result<(LogVersion, Terminator), PayloadError> {
        let mut cursor = Cursor::new(r);
        let version = LogVersion::from_payload(&mut cursor)?;
        cursor.finish()?;

        if version.version != SUPPORTED_VERSION {
            Err(PayloadError::UnsupportedVersion(version.version))?;
        }

        Ok((version, Terminator(())))
    }
}

/// An error advancing over a terminator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TerminatorError {
    /// The byte after the payload is not [`TERMINATOR`].
    #[error("Expected a record terminator, found {found:#04x}.")]
    MissingTerminator { found: u8 },
}

/// State token to check a record terminator.
#[derive(Debug)]
pub struct Terminator(pub(super) ());

impl Terminator {
    /// Transition to another state by checking a record terminator.
    ///
    /// Returns a successor state token for the next record.
    pub fn advance(self, r: [u8; 1]) -> Result<RecordStart, TerminatorError> {
        let [found] = r;

        if found != TERMINATOR {
            Err(TerminatorError::MissingTerminator { found })?;
        }

        Ok(RecordStart(()))
    }
}
