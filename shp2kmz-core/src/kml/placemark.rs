//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::feature::Feature;
use crate::core::geom::{GeometryType, LineString, Point};
use elementtree::Element;

/// HTML attribute table shown in the placemark balloon. Emitted verbatim
/// (CDATA) - KML viewers render it as HTML.
pub fn description_table(feature: &Feature) -> String {
    let mut html = String::from(r#"<table class="esri-widget__table"><tbody>"#);
    for attr in &feature.attributes {
        html.push_str(&format!(
            r#"<tr><th class="esri-feature__field-header">{}</th><td>{}</td></tr>"#,
            attr.key, attr.value
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn append_extended_data(placemark: &mut Element, feature: &Feature) {
    let extended = placemark.append_new_child("ExtendedData");
    for attr in &feature.attributes {
        let data = extended.append_new_child("Data");
        data.set_attr("name", attr.key.as_str());
        data.append_new_child("value")
            .set_text(attr.value.to_string());
    }
}

fn append_point(placemark: &mut Element, point: &Point) {
    let geometry = placemark.append_new_child("Point");
    geometry
        .append_new_child("altitudeMode")
        .set_text("clampToGround");
    geometry
        .append_new_child("coordinates")
        .set_text(format!("{}, {}, 0", point.x, point.y));
}

fn append_line(placemark: &mut Element, line: &LineString) {
    let geometry = placemark.append_new_child("LineString");
    geometry.append_new_child("extrude").set_text("0");
    geometry.append_new_child("tessellate").set_text("1");
    geometry
        .append_new_child("altitudeMode")
        .set_text("clampToGround");
    let coords = line
        .points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<String>>()
        .join(" ");
    geometry.append_new_child("coordinates").set_text(coords);
}

/// Complete placemark for a single feature. `index` is the element id,
/// unique within the layer folder.
pub fn append_placemark(
    folder: &mut Element,
    feature: &Feature,
    index: usize,
    style_key: &str,
) -> Result<(), String> {
    let placemark = folder.append_new_child("Placemark");
    placemark.set_attr("id", index.to_string());
    placemark
        .append_new_child("name")
        .set_text(feature.label.as_str());
    append_extended_data(placemark, feature);
    match feature.geometry {
        GeometryType::Point(ref point) => append_point(placemark, point),
        GeometryType::LineString(ref line) => append_line(placemark, line),
        GeometryType::MultiLineString(_) => {
            return Err(format!(
                "Placemark '{}': multi-part geometry must be exploded first",
                feature.label
            ));
        }
    }
    placemark
        .append_new_child("styleUrl")
        .set_text(format!("#{}", style_key));
    placemark
        .append_new_child("description")
        .set_text(description_table(feature));
    Ok(())
}
