//! Slice-based decoder implementation.

use either::Either::{Left, Right};

use crate::{
    event::Record,
    sans::header::{HEADER_SIZE, StreamStart},
};

use super::{Error, Progress, State};

/// Decode records lazily from a slice holding a whole log.
///
/// This method is also re-exported as `mlglog::avec::decode_slice`.
pub fn decode(r: &[u8]) -> Records<'_> {
    Records {
        r,
        progress: Progress::default(),
        state: Some(Left(StreamStart)),
    }
}

/// An iterator of records decoded from a slice.
#[derive(Debug)]
pub struct Records<'a> {
    r: &'a [u8],
    progress: Progress,
    /// `None` once the stream has ended or failed.
    state: Option<State>,
}

impl Records<'_> {
    /// Offset of the next record to be decoded.
    pub fn offset(&self) -> usize {
        self.progress.offset
    }

    fn decode_record(&mut self, state: State) -> Result<Option<(Record, State)>, Error> {
        let r = self.r;
        let p = &self.progress;
        let rest = r.get(p.offset..).unwrap_or_default();

        if rest.is_empty() {
            return Ok(None);
        }

        let Some((bytes, rest)) = rest.split_first_chunk::<HEADER_SIZE>() else {
            Err(p.truncated_stream(rest.len()))?
        };

        let (header, state) = p.open(state, *bytes)?;

        let Some((payload, rest)) = rest.split_at_checked(header.payload_length as usize) else {
            Err(p.truncated_payload(&header, rest.len()))?
        };

        let (event, state) = p.payload(&header, state, payload)?;

        let found = rest.first().copied();
        let state = p.close(state, found)?;

        self.progress.advance(&header);

        let record = Record {
            timestamp: header.timestamp,
            event,
        };

        Ok(Some((record, Right(state))))
    }
}

impl Iterator for Records<'_> {
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

impl core::iter::FusedIterator for Records<'_> {}
