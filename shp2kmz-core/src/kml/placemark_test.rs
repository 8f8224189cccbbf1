//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::feature::{Feature, FeatureAttr, FeatureAttrValType};
use crate::core::geom::{GeometryType, LineString, Point};
use crate::kml::placemark::{append_placemark, description_table};
use elementtree::Element;

fn point_feature() -> Feature {
    Feature {
        attributes: vec![
            FeatureAttr {
                key: "A".to_string(),
                value: FeatureAttrValType::String("x".to_string()),
            },
            FeatureAttr {
                key: "B".to_string(),
                value: FeatureAttrValType::String("y".to_string()),
            },
        ],
        label: "P1".to_string(),
        style: Some("icon1".to_string()),
        geometry: GeometryType::Point(Point::new(-3.70379, 40.416775)),
    }
}

#[test]
fn test_point_placemark() {
    let mut folder = Element::new("Folder");
    append_placemark(&mut folder, &point_feature(), 0, "icon1").unwrap();

    let placemark = folder.find("Placemark").unwrap();
    assert_eq!(placemark.get_attr("id"), Some("0"));
    assert_eq!(placemark.find("name").unwrap().text(), "P1");
    assert_eq!(placemark.find("styleUrl").unwrap().text(), "#icon1");

    let point = placemark.find("Point").unwrap();
    assert_eq!(point.find("altitudeMode").unwrap().text(), "clampToGround");
    assert_eq!(
        point.find("coordinates").unwrap().text(),
        "-3.70379, 40.416775, 0"
    );
}

#[test]
fn test_extended_data_excludes_reserved_fields() {
    let mut folder = Element::new("Folder");
    append_placemark(&mut folder, &point_feature(), 0, "icon1").unwrap();

    let placemark = folder.find("Placemark").unwrap();
    let extended = placemark.find("ExtendedData").unwrap();
    let names: Vec<&str> = extended
        .find_all("Data")
        .map(|d| d.get_attr("name").unwrap())
        .collect();
    // only A and B, in original field order
    assert_eq!(names, vec!["A", "B"]);
    let values: Vec<&str> = extended
        .find_all("Data")
        .map(|d| d.find("value").unwrap().text())
        .collect();
    assert_eq!(values, vec!["x", "y"]);
}

#[test]
fn test_description_table() {
    let html = description_table(&point_feature());
    assert_eq!(
        html,
        r#"<table class="esri-widget__table"><tbody><tr><th class="esri-feature__field-header">A</th><td>x</td></tr><tr><th class="esri-feature__field-header">B</th><td>y</td></tr></tbody></table>"#
    );
}

#[test]
fn test_line_placemark() {
    let feature = Feature {
        attributes: Vec::new(),
        label: "L1".to_string(),
        style: None,
        geometry: GeometryType::LineString(LineString {
            points: vec![Point::new(0.5, 1.5), Point::new(2.5, 3.5)],
        }),
    };
    let mut folder = Element::new("Folder");
    append_placemark(&mut folder, &feature, 3, "Tipo_Camino").unwrap();

    let placemark = folder.find("Placemark").unwrap();
    assert_eq!(placemark.get_attr("id"), Some("3"));
    assert_eq!(placemark.find("styleUrl").unwrap().text(), "#Tipo_Camino");

    let line = placemark.find("LineString").unwrap();
    assert_eq!(line.find("extrude").unwrap().text(), "0");
    assert_eq!(line.find("tessellate").unwrap().text(), "1");
    assert_eq!(line.find("altitudeMode").unwrap().text(), "clampToGround");
    // lon,lat pairs without altitude
    assert_eq!(line.find("coordinates").unwrap().text(), "0.5,1.5 2.5,3.5");
}

#[test]
fn test_multipart_geometry_rejected() {
    use crate::core::geom::MultiLineString;

    let feature = Feature {
        attributes: Vec::new(),
        label: "L1".to_string(),
        style: None,
        geometry: GeometryType::MultiLineString(MultiLineString { lines: Vec::new() }),
    };
    let mut folder = Element::new("Folder");
    assert_eq!(
        append_placemark(&mut folder, &feature, 0, "x").err(),
        Some("Placemark 'L1': multi-part geometry must be exploded first".to_string())
    );
}
