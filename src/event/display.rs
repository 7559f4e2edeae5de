//! Text rendering of records, one line each.
//!
//! The layout matches the text logs the game itself writes, including its
//! inconsistent spacing around coordinates and labels.

use core::fmt::{self, Display, Formatter};

use crate::sans::data::{Coord, Date, Time};

use super::{Event, Record};

/// A float with three decimal places.
struct Fixed(f32);

impl Display for Fixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{:.3}", self.0)
        }
    }
}

/// `(x,y,z)`
struct Tight<'a>(&'a Coord);

impl Display for Tight<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Coord { x, y, z } = *self.0;
        write!(f, "({},{},{})", Fixed(x), Fixed(y), Fixed(z))
    }
}

/// `(x, y, z)`
struct Spaced<'a>(&'a Coord);

impl Display for Spaced<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Coord { x, y, z } = *self.0;
        write!(f, "({}, {}, {})", Fixed(x), Fixed(y), Fixed(z))
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.month, self.day)
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.second)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "T:{} AType:{}", self.timestamp, self.type_code())?;

        match &self.event {
            Event::MissionStart(e) => write!(
                f,
                " GDate:{} GTime:{} MFile:{} MID:{} GType:{} CNTRS:{} SETTS:{} MODS:{} PRESET:{} AQMID:{} ROUNDS: {} POINTS: {}",
                e.date,
                e.time,
                e.mission_file,
                e.mission_id,
                e.game_type,
                e.countries,
                e.settings,
                e.mods,
                e.preset,
                e.aqmid,
                e.rounds,
                e.points,
            ),
            Event::Hit(e) => write!(
                f,
                " AMMO:{} AID:{} TID:{}",
                e.ammo, e.attacker_id, e.target_id
            ),
            Event::Damage(e) => write!(
                f,
                " DMG:{} AID:{} TID:{} POS{}",
                Fixed(e.damage),
                e.attacker_id,
                e.target_id,
                Tight(&e.position),
            ),
            Event::Kill(e) => write!(
                f,
                " AID:{} TID:{} POS{}",
                e.attacker_id,
                e.target_id,
                Tight(&e.position),
            ),
            Event::PlayerMissionEnd(e) => write!(
                f,
                " PLID:{} PID:{} BUL:{} SH:{} BOMB:{} RCT:{} {}",
                e.plane_id,
                e.pilot_id,
                e.bullets,
                e.shells,
                e.bombs,
                e.rockets,
                Tight(&e.position),
            ),
            Event::TakeOff(e) => write!(f, " PID:{} POS{}", e.pilot_id, Spaced(&e.position)),
            Event::Landing(e) => write!(f, " PID:{} POS{}", e.pilot_id, Spaced(&e.position)),
            Event::MissionEnd(_) => f.write_str(" "),
            Event::MissionObjective(e) => write!(
                f,
                " OBJID:{} POS{} COAL:{} TYPE:{} RES:{} ICTYPE:{}",
                e.objective_id,
                Tight(&e.position),
                e.coalition,
                e.objective_type,
                e.result,
                e.icon_type,
            ),
            Event::AirfieldInfo(e) => write!(
                f,
                " AID:{} COUNTRY:{} POS{} IDS({})",
                e.airfield_id,
                e.country,
                Spaced(&e.position),
                e.ids,
            ),
            Event::PlayerPlane(e) => write!(
                f,
                " PLID:{} PID:{} BUL:{} SH:{} BOMB:{} RCT:{} {} IDS:{} LOGIN:{} NAME:{} TYPE:{} COUNTRY:{} FORM:{} FIELD:{} INAIR:{} PARENT:{} ISPL:{} ISTSTART:{} PAYLOAD:{} FUEL:{} SKIN:{} WM:{} ",
                e.plane_id,
                e.pilot_id,
                e.bullets,
                e.shells,
                e.bombs,
                e.rockets,
                Tight(&e.position),
                e.ids,
                e.login,
                e.name,
                e.plane_type,
                e.country,
                e.formation,
                e.field,
                e.in_air,
                e.parent_id,
                e.is_player,
                e.is_takeoff_start,
                e.payload,
                Fixed(e.fuel),
                e.skin,
                e.weapon_mods,
            ),
            Event::GroupInit(e) => write!(
                f,
                " GID:{} IDS:{} LID:{}",
                e.group_id, e.ids, e.leader_id
            ),
            Event::ObjectSpawned(e) => write!(
                f,
                " ID:{} TYPE:{} COUNTRY:{} NAME:{} PID:{} POS{}",
                e.object_id,
                e.object_type,
                e.country,
                e.name,
                e.parent_id,
                Tight(&e.position),
            ),
            Event::InfluenceAreaHeader(e) => write!(
                f,
                " AID:{} COUNTRY:{} ENABLED:{} BC({})",
                e.area_id, e.country, e.enabled, e.boundary_coords
            ),
            Event::InfluenceAreaBoundary(e) => {
                write!(f, " AID:{} BP({})", e.area_id, e.boundary_points)
            }
            Event::LogVersion(e) => write!(f, " VER:{}", e.version),
            Event::BotUninit(e) => write!(f, " BOTID:{} POS{}", e.bot_id, Tight(&e.position)),
            Event::BotEjectLeave(e) => write!(
                f,
                " BOTID:{} PARENTID:{} POS{}",
                e.bot_id,
                e.parent_id,
                Tight(&e.position),
            ),
            Event::Join(e) => write!(
                f,
                " USERID:{} USERNICKID:{}",
                e.user_id, e.user_nickname_id
            ),
            // Unknown payloads have no text form.
            Event::Unknown(_) => Ok(()),
        }
    }
}
