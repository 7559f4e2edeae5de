#![allow(dead_code)]

use mlglog::{
    event::{Event, Record},
    sans::data::{Coord, Date, Time},
};

/// Builds a payload field by field.
#[derive(Debug, Default, Clone)]
pub struct Payload(pub Vec<u8>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u32(mut self, v: u32) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn i32(mut self, v: i32) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f32(mut self, v: f32) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn str(self, v: &str) -> Self {
        self.bytes_str(v.as_bytes())
    }

    /// A string field holding arbitrary bytes.
    pub fn bytes_str(mut self, v: &[u8]) -> Self {
        self = self.u32(v.len() as u32);
        self.0.extend_from_slice(v);
        self
    }

    pub fn date(self, v: Date) -> Self {
        self.u32(v.year).u32(v.month).u32(v.day)
    }

    pub fn time(self, v: Time) -> Self {
        self.u32(v.hour).u32(v.minute).u32(v.second)
    }

    pub fn coord(self, v: Coord) -> Self {
        self.f32(v.x).f32(v.y).f32(v.z)
    }
}

/// Builds a log stream record by record.
#[derive(Debug, Default, Clone)]
pub struct Stream(pub Vec<u8>);

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, payload and terminator.
    pub fn record(self, timestamp: u32, type_code: u8, payload: &[u8]) -> Self {
        self.record_with_terminator(timestamp, type_code, payload, 0x0A)
    }

    pub fn record_with_terminator(
        mut self,
        timestamp: u32,
        type_code: u8,
        payload: &[u8],
        terminator: u8,
    ) -> Self {
        self.0.extend_from_slice(&timestamp.to_le_bytes());
        self.0.push(type_code);
        self.0
            .extend_from_slice(&(payload.len() as u16).to_le_bytes());
        self.0.extend_from_slice(payload);
        self.0.push(terminator);
        self
    }

    pub fn version(self, timestamp: u32, version: u32) -> Self {
        self.record(timestamp, 15, &Payload::new().u32(version).0)
    }

    pub fn event(self, record: &Record) -> Self {
        self.record(record.timestamp, record.type_code(), &encode(&record.event))
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.0
    }
}

/// Encode an event's payload, field by field in schema order.
pub fn encode(event: &Event) -> Vec<u8> {
    let p = Payload::new();

    let p = match event {
        Event::MissionStart(e) => p
            .date(e.date)
            .time(e.time)
            .str(&e.mission_file)
            .str(&e.mission_id)
            .i32(e.game_type)
            .str(&e.countries)
            .str(&e.settings)
            .i32(e.mods)
            .i32(e.preset)
            .i32(e.aqmid)
            .i32(e.rounds)
            .i32(e.points),
        Event::Hit(e) => p.str(&e.ammo).i32(e.attacker_id).i32(e.target_id),
        Event::Damage(e) => p
            .f32(e.damage)
            .i32(e.attacker_id)
            .i32(e.target_id)
            .coord(e.position),
        Event::Kill(e) => p.i32(e.attacker_id).i32(e.target_id).coord(e.position),
        Event::PlayerMissionEnd(e) => p
            .i32(e.plane_id)
            .i32(e.pilot_id)
            .i32(e.bullets)
            .i32(e.shells)
            .i32(e.bombs)
            .i32(e.rockets)
            .coord(e.position),
        Event::TakeOff(e) => p.i32(e.pilot_id).coord(e.position),
        Event::Landing(e) => p.i32(e.pilot_id).coord(e.position),
        Event::MissionEnd(_) => p,
        Event::MissionObjective(e) => p
            .i32(e.objective_id)
            .coord(e.position)
            .i32(e.coalition)
            .i32(e.objective_type)
            .i32(e.result)
            .i32(e.icon_type),
        Event::AirfieldInfo(e) => p
            .i32(e.airfield_id)
            .str(&e.country)
            .coord(e.position)
            .str(&e.ids),
        Event::PlayerPlane(e) => p
            .i32(e.plane_id)
            .i32(e.pilot_id)
            .i32(e.bullets)
            .i32(e.shells)
            .i32(e.bombs)
            .i32(e.rockets)
            .coord(e.position)
            .str(&e.ids)
            .str(&e.login)
            .str(&e.name)
            .str(&e.plane_type)
            .str(&e.country)
            .i32(e.formation)
            .i32(e.field)
            .i32(e.in_air)
            .i32(e.parent_id)
            .i32(e.is_player)
            .i32(e.is_takeoff_start)
            .i32(e.payload)
            .f32(e.fuel)
            .str(&e.skin)
            .i32(e.weapon_mods),
        Event::GroupInit(e) => p.i32(e.group_id).str(&e.ids).i32(e.leader_id),
        Event::ObjectSpawned(e) => p
            .i32(e.object_id)
            .str(&e.object_type)
            .str(&e.country)
            .str(&e.name)
            .i32(e.parent_id)
            .coord(e.position),
        Event::InfluenceAreaHeader(e) => p
            .i32(e.area_id)
            .i32(e.country)
            .i32(e.enabled)
            .str(&e.boundary_coords),
        Event::InfluenceAreaBoundary(e) => p.i32(e.area_id).str(&e.boundary_points),
        Event::LogVersion(e) => p.u32(e.version),
        Event::BotUninit(e) => p.i32(e.bot_id).coord(e.position),
        Event::BotEjectLeave(e) => p.i32(e.bot_id).i32(e.parent_id).coord(e.position),
        Event::Join(e) => p.str(&e.user_id).str(&e.user_nickname_id),
        Event::Unknown(e) => return e.payload.clone(),
    };

    p.0
}
