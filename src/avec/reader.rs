//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{ErrorKind, Read},
    vec::Vec,
};

use either::Either::{Left, Right};

use crate::{
    event::Record,
    sans::header::{HEADER_SIZE, StreamStart},
};

use super::{Error, Progress, State};

extern crate std;

/// Decode records lazily from a reader of a log.
///
/// Bytes are read only as each record is decoded; wrapping unbuffered
/// sources in a [`std::io::BufReader`] is recommended.
///
/// This method is also re-exported as `mlglog::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode<R: Read>(r: R) -> Records<R> {
    Records {
        r,
        buf: Vec::new(),
        progress: Progress::default(),
        state: Some(Left(StreamStart)),
    }
}

/// An iterator of records decoded from a reader.
#[derive(Debug)]
pub struct Records<R> {
    r: R,
    /// Payload buffer, reused between records.
    buf: Vec<u8>,
    progress: Progress,
    /// `None` once the stream has ended or failed.
    state: Option<State>,
}

impl<R: Read> Records<R> {
    /// Offset of the next record to be decoded.
    pub fn offset(&self) -> usize {
        self.progress.offset
    }

    fn decode_record(&mut self, state: State) -> Result<Option<(Record, State)>, Error> {
        let p = &self.progress;

        let mut bytes = [0; HEADER_SIZE];
        match fill(&mut self.r, &mut bytes)? {
            0 => return Ok(None),
            HEADER_SIZE => {}
            n => Err(p.truncated_stream(n))?,
        }

        let (header, state) = p.open(state, bytes)?;

        let declared = header.payload_length as usize;
        self.buf.resize(declared, 0);

        let available = fill(&mut self.r, &mut self.buf)?;
        if available < declared {
            Err(p.truncated_payload(&header, available))?;
        }

        let (event, state) = p.payload(&header, state, &self.buf)?;

        let mut found = [0; 1];
        let found = (fill(&mut self.r, &mut found)? == 1).then_some(found[0]);
        let state = p.close(state, found)?;

        self.progress.advance(&header);

        let record = Record {
            timestamp: header.timestamp,
            event,
        };

        Ok(Some((record, Right(state))))
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state.take()?;

        match self.decode_record(state) {
            Ok(Some((record, state))) => {
                self.state = Some(state);
                Some(Ok(record))
            }
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Records<R> {}

/// Read until a buffer is full or the reader is exhausted, returning the
/// number of bytes read.
fn fill(r: &mut impl Read, buf: &mut [u8]) -> Result<usize, Error> {
    let mut n = 0;

    while n < buf.len() {
        match r.read(&mut buf[n..]) {
            Ok(0) => break,
            Ok(k) => n += k,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => Err(err)?,
        }
    }

    Ok(n)
}
