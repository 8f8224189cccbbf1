//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use gdal::vector::{Feature as OgrFeature, FieldValue, Geometry, OGRwkbGeometryType};
use shp2kmz_core::core::feature::FeatureAttrValType;
use shp2kmz_core::core::geom::{self, GeometryType};
use shp2kmz_core::core::layer::LayerGeometry;

/// Reserved field carrying the display name
pub const LABEL_FIELD: &str = "Label";
/// Reserved field carrying the raw style value
pub const STYLE_FIELD: &str = "Style";

/// Layer geometry kind for an OGR geometry type code. `None` for
/// unsupported kinds (polygons etc.).
pub fn geom_kind(ogr_type: OGRwkbGeometryType::Type) -> Option<LayerGeometry> {
    match ogr_type {
        OGRwkbGeometryType::wkbPoint | OGRwkbGeometryType::wkbPoint25D => {
            Some(LayerGeometry::Point)
        }
        OGRwkbGeometryType::wkbLineString
        | OGRwkbGeometryType::wkbLineString25D
        | OGRwkbGeometryType::wkbMultiLineString
        | OGRwkbGeometryType::wkbMultiLineString25D => Some(LayerGeometry::Line),
        _ => None,
    }
}

/// Convert an OGR field value. Unsupported field types are reported and
/// skipped (`Ok(None)`).
pub fn attr_value(
    layer_name: &str,
    feature: &OgrFeature,
    field_name: &str,
) -> Result<Option<FeatureAttrValType>, String> {
    let field_value = feature
        .field(field_name)
        .map_err(|e| format!("Layer '{}' - error reading field '{}': {}", layer_name, field_name, e))?;
    let value = match field_value {
        Some(FieldValue::StringValue(v)) => Some(FeatureAttrValType::String(v)),
        Some(FieldValue::IntegerValue(v)) => Some(FeatureAttrValType::Int(v as i64)),
        Some(FieldValue::Integer64Value(v)) => Some(FeatureAttrValType::Int(v)),
        Some(FieldValue::RealValue(v)) => Some(FeatureAttrValType::Double(v)),
        Some(_) => {
            warn!(
                "Layer '{}' - skipping unsupported field '{}'",
                layer_name, field_name
            );
            None
        }
        None => None, // Skip NULL values
    };
    Ok(value)
}

/// Convert an OGR geometry (already transformed) to the core geometry type.
/// Only points and line strings are supported.
pub fn to_geo(geometry: &Geometry) -> Result<GeometryType, String> {
    match geometry.geometry_type() {
        OGRwkbGeometryType::wkbPoint | OGRwkbGeometryType::wkbPoint25D => {
            let (x, y, _) = geometry.get_point(0);
            Ok(GeometryType::Point(geom::Point::new(x, y)))
        }
        OGRwkbGeometryType::wkbLineString | OGRwkbGeometryType::wkbLineString25D => {
            Ok(GeometryType::LineString(line_string(geometry)))
        }
        OGRwkbGeometryType::wkbMultiLineString | OGRwkbGeometryType::wkbMultiLineString25D => {
            let lines = (0..geometry.geometry_count())
                .map(|n| line_string(&unsafe { geometry.get_unowned_geometry(n) }))
                .collect();
            Ok(GeometryType::MultiLineString(geom::MultiLineString {
                lines,
            }))
        }
        geom_type => Err(format!("Unsupported geometry type {}", geom_type)),
    }
}

fn line_string(geometry: &Geometry) -> geom::LineString {
    let points = geometry
        .get_point_vec()
        .iter()
        .map(|&(x, y, _)| geom::Point::new(x, y))
        .collect();
    geom::LineString { points }
}
