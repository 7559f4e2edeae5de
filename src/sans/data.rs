//! Primitive field types found in record payloads.

use alloc::string::String;

use super::cursor::{Cursor, CursorError};

/// A calendar date, as stored; no validity check is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Date {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// A time of day, as stored; no range check is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// A position in mission space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A value which can be extracted from a payload.
///
/// This is implemented for every primitive a record schema may contain, and
/// is what the [`FromPayload`](macro@crate::event::FromPayload) derive macro
/// calls for each struct field.
pub trait Field: Sized {
    /// Extract a value, advancing the cursor past it.
    fn read(cursor: &mut Cursor<'_>) -> Result<Self, CursorError>;
}

macro_rules! field {
    ($t:ty, $read:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        impl Field for $t {
            fn read(cursor: &mut Cursor<'_>) -> Result<Self, CursorError> {
                cursor.$read()
            }
        }
    };
}

field!(u32, read_u32, /** `uint32` */);
field!(i32, read_i32, /** `int32` */);
field!(f32, read_f32, /** `float32` */);
field!(Date, read_date, /** `date` */);
field!(Time, read_time, /** `time` */);
field!(Coord, read_coord, /** `coord` */);

/// Length-prefixed ASCII string.
impl Field for String {
    fn read(cursor: &mut Cursor<'_>) -> Result<Self, CursorError> {
        cursor.read_string().map(String::from)
    }
}
