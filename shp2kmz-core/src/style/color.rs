//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

/// RGBA color, parsed eagerly from the `"r,g,b,a"` encoding used by both
/// the style definition file and the per-feature style attribute.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Parse four comma separated channel values in r,g,b,a order.
    pub fn parse(raw: &str) -> Result<Color, String> {
        let channels = raw
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<u8>()
                    .map_err(|_| format!("Invalid color value '{}'", raw))
            })
            .collect::<Result<Vec<u8>, String>>()?;
        if channels.len() != 4 {
            return Err(format!("Invalid color value '{}'", raw));
        }
        Ok(Color {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            a: channels[3],
        })
    }

    /// 8-hex-digit KML color in alpha-blue-green-red channel order.
    // The a,b,g,r order is the KML wire format - don't fix it.
    pub fn kml_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.a, self.b, self.g, self.r)
    }
}
