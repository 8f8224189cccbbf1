//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::style::color::Color;

#[test]
fn test_parse_color() {
    let color = Color::parse("255,0,0,255").unwrap();
    assert_eq!(
        color,
        Color {
            r: 255,
            g: 0,
            b: 0,
            a: 255
        }
    );
    let color = Color::parse(" 0, 128, 64, 32 ").unwrap();
    assert_eq!(
        color,
        Color {
            r: 0,
            g: 128,
            b: 64,
            a: 32
        }
    );
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Color::parse("255,0,0").err(),
        Some("Invalid color value '255,0,0'".to_string())
    );
    assert_eq!(
        Color::parse("255,0,0,255,255").err(),
        Some("Invalid color value '255,0,0,255,255'".to_string())
    );
    assert_eq!(
        Color::parse("256,0,0,255").err(),
        Some("Invalid color value '256,0,0,255'".to_string())
    );
    assert_eq!(
        Color::parse("red,0,0,255").err(),
        Some("Invalid color value 'red,0,0,255'".to_string())
    );
}

#[test]
fn test_kml_channel_order() {
    // KML stores colors as aabbggrr
    assert_eq!(Color::parse("255,0,0,255").unwrap().kml_hex(), "ff0000ff");
    assert_eq!(Color::parse("0,255,0,255").unwrap().kml_hex(), "ff00ff00");
    assert_eq!(Color::parse("0,0,255,255").unwrap().kml_hex(), "ffff0000");
    assert_eq!(Color::parse("18,52,86,120").unwrap().kml_hex(), "78563412");
}
