//! Sequential, bounds-checked extraction from a record payload.

use core::cmp::Ordering;

use thiserror::Error;

use super::data::{Coord, Date, Time};

/// An error extracting values from a payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Fewer bytes remain than the next value needs.
    #[error("Needed {needed} bytes at offset {offset}, but only {remaining} remain.")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    /// A string contains a byte outside the 7-bit ASCII range.
    #[error("String at offset {offset} contains non-ASCII data.")]
    InvalidEncoding { offset: usize },
    /// The schema finished before the end of the payload.
    #[error("Schema left {remaining} payload bytes unconsumed.")]
    UnconsumedData { remaining: usize },
    /// The schema read past the end of the payload.
    #[error("Schema read {overrun} bytes past the end of the payload.")]
    ExcessConsumption { overrun: usize },
}

/// A read position over a single payload.
///
/// Every value is little-endian. A cursor must be [`finish`](Self::finish)ed
/// once its schema has been read; a payload is only valid if the schema
/// consumed it exactly.
#[derive(Debug)]
pub struct Cursor<'a> {
    r: &'a [u8],
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(r: &'a [u8]) -> Self {
        Self { r, i: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.i
    }

    /// Number of bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.r.len().saturating_sub(self.i)
    }

    pub fn read_u32(&mut self) -> Result<u32, CursorError> {
        self.take().map(u32::from_le_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32, CursorError> {
        self.take().map(i32::from_le_bytes)
    }

    pub fn read_f32(&mut self) -> Result<f32, CursorError> {
        self.take().map(f32::from_le_bytes)
    }

    /// Read a `u32` length prefix followed by that many ASCII bytes.
    pub fn read_string(&mut self) -> Result<&'a str, CursorError> {
        let len = self.read_u32()? as usize;
        let offset = self.i;
        let bytes = self.take_slice(len)?;

        if !bytes.is_ascii() {
            Err(CursorError::InvalidEncoding { offset })?;
        }

        core::str::from_utf8(bytes).map_err(|_| CursorError::InvalidEncoding { offset })
    }

    /// Read a year, month and day. Values are not checked against the
    /// calendar.
    pub fn read_date(&mut self) -> Result<Date, CursorError> {
        Ok(Date {
            year: self.read_u32()?,
            month: self.read_u32()?,
            day: self.read_u32()?,
        })
    }

    /// Read an hour, minute and second. Values are not range-checked.
    pub fn read_time(&mut self) -> Result<Time, CursorError> {
        Ok(Time {
            hour: self.read_u32()?,
            minute: self.read_u32()?,
            second: self.read_u32()?,
        })
    }

    pub fn read_coord(&mut self) -> Result<Coord, CursorError> {
        Ok(Coord {
            x: self.read_f32()?,
            y: self.read_f32()?,
            z: self.read_f32()?,
        })
    }

    /// Assert that the whole payload has been consumed.
    pub fn finish(self) -> Result<(), CursorError> {
        match self.i.cmp(&self.r.len()) {
            Ordering::Equal => Ok(()),
            Ordering::Less => Err(CursorError::UnconsumedData {
                remaining: self.r.len() - self.i,
            }),
            Ordering::Greater => Err(CursorError::ExcessConsumption {
                overrun: self.i - self.r.len(),
            }),
        }
    }

    /// Take an exact number of bytes, advancing the offset.
    fn take<const N: usize>(&mut self) -> Result<[u8; N], CursorError> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.take_slice(N)?);
        Ok(buf)
    }

    fn take_slice(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        let s = self.i;
        let underrun = CursorError::BufferUnderrun {
            offset: s,
            needed: n,
            remaining: self.remaining(),
        };

        let e = s.checked_add(n).ok_or(underrun.clone())?;
        let bytes = self.r.get(s..e).ok_or(underrun)?;
        self.i = e;

        Ok(bytes)
    }
}
