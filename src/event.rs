//! Record schemas and the decoded event type.
//!
//! Each known record type is a struct deriving [`FromPayload`], whose fields
//! are listed in the order they appear in the payload. The [`Event`] union
//! gathers them, and dispatches a payload to its schema by type code.

use alloc::{string::String, vec::Vec};

use crate::sans::{
    cursor::{Cursor, CursorError},
    data::{Coord, Date, Field, Time},
};

mod display;

/// Derive [`FromPayload`] for a struct describing a record schema.
///
/// The struct attribute `record(N)` names the type code. Each named field is
/// read in declaration order with [`Field::read`]; the types in
/// [`crate::sans::data`] and the primitives `u32`, `i32`, `f32` and `String`
/// are supported. A unit struct describes a record with an empty payload.
///
/// ```
/// #[derive(Debug, FromPayload)]
/// #[record(5)]
/// struct TakeOff {
///     pilot_id: i32,
///     position: Coord,
/// }
/// ```
pub use mlglog_derive::FromPayload;

/// Decode a record payload according to a fixed schema.
///
/// See the [`FromPayload`](macro@FromPayload) derive macro for an automatic
/// implementation of this trait.
pub trait FromPayload: Sized {
    /// The header type code selecting this schema.
    const TYPE_CODE: u8;

    /// Read every field of the schema.
    ///
    /// This does not check that the payload was consumed exactly; call
    /// [`Cursor::finish`] afterward.
    fn from_payload(cursor: &mut Cursor<'_>) -> Result<Self, CursorError>;
}

/// A decoded record, timestamped by its header.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub timestamp: u32,
    pub event: Event,
}

impl Record {
    pub fn type_code(&self) -> u8 {
        self.event.type_code()
    }
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(0)]
pub struct MissionStart {
    pub date: Date,
    pub time: Time,
    pub mission_file: String,
    pub mission_id: String,
    pub game_type: i32,
    pub countries: String,
    pub settings: String,
    pub mods: i32,
    pub preset: i32,
    pub aqmid: i32,
    pub rounds: i32,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(1)]
pub struct Hit {
    pub ammo: String,
    pub attacker_id: i32,
    pub target_id: i32,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(2)]
pub struct Damage {
    pub damage: f32,
    pub attacker_id: i32,
    pub target_id: i32,
    pub position: Coord,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(3)]
pub struct Kill {
    pub attacker_id: i32,
    pub target_id: i32,
    pub position: Coord,
}

/// Ammunition remaining when a player leaves the mission.
#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(4)]
pub struct PlayerMissionEnd {
    pub plane_id: i32,
    pub pilot_id: i32,
    pub bullets: i32,
    pub shells: i32,
    pub bombs: i32,
    pub rockets: i32,
    pub position: Coord,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(5)]
pub struct TakeOff {
    pub pilot_id: i32,
    pub position: Coord,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(6)]
pub struct Landing {
    pub pilot_id: i32,
    pub position: Coord,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(7)]
pub struct MissionEnd;

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(8)]
pub struct MissionObjective {
    pub objective_id: i32,
    pub position: Coord,
    pub coalition: i32,
    pub objective_type: i32,
    pub result: i32,
    pub icon_type: i32,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(9)]
pub struct AirfieldInfo {
    pub airfield_id: i32,
    pub country: String,
    pub position: Coord,
    pub ids: String,
}

/// A player's aircraft entering the mission.
#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(10)]
pub struct PlayerPlane {
    pub plane_id: i32,
    pub pilot_id: i32,
    pub bullets: i32,
    pub shells: i32,
    pub bombs: i32,
    pub rockets: i32,
    pub position: Coord,
    pub ids: String,
    pub login: String,
    pub name: String,
    pub plane_type: String,
    pub country: String,
    pub formation: i32,
    pub field: i32,
    pub in_air: i32,
    pub parent_id: i32,
    pub is_player: i32,
    pub is_takeoff_start: i32,
    pub payload: i32,
    pub fuel: f32,
    pub skin: String,
    pub weapon_mods: i32,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(11)]
pub struct GroupInit {
    pub group_id: i32,
    pub ids: String,
    pub leader_id: i32,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(12)]
pub struct ObjectSpawned {
    pub object_id: i32,
    pub object_type: String,
    pub country: String,
    pub name: String,
    pub parent_id: i32,
    pub position: Coord,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(13)]
pub struct InfluenceAreaHeader {
    pub area_id: i32,
    pub country: i32,
    pub enabled: i32,
    pub boundary_coords: String,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(14)]
pub struct InfluenceAreaBoundary {
    pub area_id: i32,
    pub boundary_points: String,
}

/// Opens a sub-stream.
#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(15)]
pub struct LogVersion {
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(16)]
pub struct BotUninit {
    pub bot_id: i32,
    pub position: Coord,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(18)]
pub struct BotEjectLeave {
    pub bot_id: i32,
    pub parent_id: i32,
    pub position: Coord,
}

#[derive(Debug, Clone, PartialEq, FromPayload)]
#[record(20)]
pub struct Join {
    pub user_id: String,
    pub user_nickname_id: String,
}

/// A record of a type outside the known set, passed through unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unknown {
    pub type_code: u8,
    pub payload: Vec<u8>,
}

type Decode = fn(&mut Cursor<'_>) -> Result<Event, CursorError>;

/// One past the greatest known type code.
const TABLE_SIZE: usize = 21;

fn decode_as<T: FromPayload + Into<Event>>(cursor: &mut Cursor<'_>) -> Result<Event, CursorError> {
    T::from_payload(cursor).map(Into::into)
}

macro_rules! events {
    ($($variant:ident),* $(,)?) => {
        /// A decoded record payload.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Event {
            $($variant($variant),)*
            Unknown(Unknown),
        }

        impl Event {
            /// The header type code this event was decoded from.
            pub fn type_code(&self) -> u8 {
                match self {
                    $(Self::$variant(_) => $variant::TYPE_CODE,)*
                    Self::Unknown(unknown) => unknown.type_code,
                }
            }
        }

        $(
            impl From<$variant> for Event {
                fn from(record: $variant) -> Self {
                    Self::$variant(record)
                }
            }
        )*

        // Duplicate or out-of-range type codes fail const evaluation.
        const DISPATCH: [Option<Decode>; TABLE_SIZE] = {
            let mut table: [Option<Decode>; TABLE_SIZE] = [None; TABLE_SIZE];
            $(
                assert!(table[$variant::TYPE_CODE as usize].is_none());
                table[$variant::TYPE_CODE as usize] = Some(decode_as::<$variant> as Decode);
            )*
            table
        };
    };
}

events! {
    MissionStart,
    Hit,
    Damage,
    Kill,
    PlayerMissionEnd,
    TakeOff,
    Landing,
    MissionEnd,
    MissionObjective,
    AirfieldInfo,
    PlayerPlane,
    GroupInit,
    ObjectSpawned,
    InfluenceAreaHeader,
    InfluenceAreaBoundary,
    LogVersion,
    BotUninit,
    BotEjectLeave,
    Join,
}

impl Event {
    /// Decode a payload by the schema its type code selects.
    ///
    /// The schema must consume the payload exactly. Type codes outside the
    /// known set are not an error; their payload is kept as
    /// [`Event::Unknown`]. No version policy is applied here.
    pub fn decode(type_code: u8, r: &[u8]) -> Result<Self, CursorError> {
        let Some(decode) = DISPATCH.get(type_code as usize).copied().flatten() else {
            return Ok(Self::Unknown(Unknown {
                type_code,
                payload: r.to_vec(),
            }));
        };

        let mut cursor = Cursor::new(r);
        let event = decode(&mut cursor)?;
        cursor.finish()?;

        Ok(event)
    }

    /// Whether this event opens a new sub-stream.
    pub fn is_version(&self) -> bool {
        matches!(self, Self::LogVersion(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}
