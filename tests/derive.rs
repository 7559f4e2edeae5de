use mlglog::{
    event::FromPayload,
    sans::{
        cursor::{Cursor, CursorError},
        data::{Coord, Field},
    },
};

mod common;

use common::Payload;

#[derive(Debug, PartialEq, FromPayload)]
#[record(42)]
struct Waypoint {
    label: String,
    index: u32,
    offset: i32,
    position: Coord,
    speed: f32,
}

#[derive(Debug, PartialEq, FromPayload)]
#[record(43)]
struct Marker;

#[test]
fn reads_fields_in_declaration_order() {
    let position = Coord {
        x: 1.0,
        y: 2.0,
        z: 3.0,
    };
    let data = Payload::new()
        .str("WP1")
        .u32(7)
        .i32(-3)
        .coord(position)
        .f32(88.5)
        .0;

    let mut cursor = Cursor::new(&data);
    let waypoint = Waypoint::from_payload(&mut cursor).unwrap();
    cursor.finish().unwrap();

    assert_eq!(Waypoint::TYPE_CODE, 42);
    assert_eq!(
        waypoint,
        Waypoint {
            label: "WP1".into(),
            index: 7,
            offset: -3,
            position,
            speed: 88.5,
        }
    );
}

#[test]
fn propagates_field_errors() {
    let data = Payload::new().str("WP1").u32(7).0;
    let mut cursor = Cursor::new(&data);

    assert!(matches!(
        Waypoint::from_payload(&mut cursor),
        Err(CursorError::BufferUnderrun { offset: 11, .. })
    ));
}

#[test]
fn unit_struct_reads_nothing() {
    let data = [0u8; 2];
    let mut cursor = Cursor::new(&data);

    assert_eq!(Marker::TYPE_CODE, 43);
    assert_eq!(Marker::from_payload(&mut cursor).unwrap(), Marker);
    assert_eq!(
        cursor.finish(),
        Err(CursorError::UnconsumedData { remaining: 2 })
    );
}
