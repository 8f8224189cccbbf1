//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::style::catalog::{IconStyle, LineStyle, StyleCatalog, StyleDefinition};
use crate::style::color::Color;

#[test]
fn test_parse_style_attribute() {
    let style = LineStyle::parse("color:0,255,0,255;width:2").unwrap();
    assert_eq!(
        style.color,
        Color {
            r: 0,
            g: 255,
            b: 0,
            a: 255
        }
    );
    assert_eq!(style.width, "2");
    assert_eq!(style.content, Some("color:0,255,0,255;width:2".to_string()));
}

#[test]
fn test_parse_style_attribute_errors() {
    assert_eq!(
        LineStyle::parse("color:0,255,0,255").err(),
        Some("Invalid style attribute 'color:0,255,0,255'".to_string())
    );
    assert_eq!(
        LineStyle::parse("width:2;color:0,255,0,255").err(),
        Some("Invalid style attribute 'width:2;color:0,255,0,255'".to_string())
    );
    assert!(LineStyle::parse("color:0,255;width:2").is_err());
}

#[test]
fn test_intern_first_seen_order() {
    let mut catalog = StyleCatalog::new();
    let key0 = catalog.intern_line_style("color:0,255,0,255;width:2").unwrap();
    let key1 = catalog.intern_line_style("color:255,0,0,255;width:4").unwrap();
    // re-interning returns the existing key
    let key0_again = catalog.intern_line_style("color:0,255,0,255;width:2").unwrap();
    assert_eq!(key0, "style00");
    assert_eq!(key1, "style01");
    assert_eq!(key0_again, "style00");
    assert_eq!(catalog.len(), 2);

    assert_eq!(
        catalog.find_line_style("color:255,0,0,255;width:4"),
        Some("style01".to_string())
    );
    assert_eq!(catalog.find_line_style("color:1,2,3,4;width:9"), None);
}

#[test]
fn test_unique_keys() {
    let mut catalog = StyleCatalog::new();
    let icon = StyleDefinition::Icon(IconStyle {
        href: "icon1.png".to_string(),
    });
    catalog.add("icon1", icon.clone()).unwrap();
    // identical re-registration is a no-op
    catalog.add("icon1", icon).unwrap();
    assert_eq!(catalog.len(), 1);

    let other = StyleDefinition::Icon(IconStyle {
        href: "other.png".to_string(),
    });
    assert_eq!(
        catalog.add("icon1", other).err(),
        Some("Conflicting style definitions for key 'icon1'".to_string())
    );
}
