//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use shp2kmz_core::core::feature::Feature;
use shp2kmz_core::core::layer::{LayerGeometry, VectorLayer};
use shp2kmz_core::kml::placemark::append_placemark;
use shp2kmz_core::kml::KmlDocument;
use shp2kmz_core::style::catalog::{IconStyle, StyleCatalog, StyleDefinition};
use shp2kmz_core::style::resolver::LineStyleResolver;
use std::path::Path;

/// Assemble one input layer: a named folder with one placemark per feature,
/// with the layer's style definitions materialized into the shared catalog.
pub fn assemble_layer(
    document: &mut KmlDocument,
    layer: VectorLayer,
    styles_dir: &Path,
    catalog: &mut StyleCatalog,
) -> Result<(), String> {
    match layer.geometry_type {
        LayerGeometry::Point => assemble_point_layer(document, layer, catalog),
        LayerGeometry::Line => assemble_line_layer(document, layer, styles_dir, catalog),
    }
}

/// Point layers: one icon style per distinct raw `Style` value, the raw
/// value doubling as the style key.
fn assemble_point_layer(
    document: &mut KmlDocument,
    layer: VectorLayer,
    catalog: &mut StyleCatalog,
) -> Result<(), String> {
    let folder = document.append_folder(&layer.name)?;
    for (index, feature) in layer.features.iter().enumerate() {
        let key = feature.style.as_ref().ok_or(format!(
            "Layer '{}': point feature '{}' without style value",
            layer.name, feature.label
        ))?;
        catalog.add(
            key,
            StyleDefinition::Icon(IconStyle {
                href: format!("{}.png", key),
            }),
        )?;
        append_placemark(folder, feature, index, key)?;
    }
    Ok(())
}

/// Line layers: multi-part rows are exploded before any placemark is
/// built, then styles are resolved per the layer's active style source.
fn assemble_line_layer(
    document: &mut KmlDocument,
    layer: VectorLayer,
    styles_dir: &Path,
    catalog: &mut StyleCatalog,
) -> Result<(), String> {
    let features: Vec<Feature> = layer
        .features
        .into_iter()
        .flat_map(|feature| feature.explode())
        .collect();
    let resolver = LineStyleResolver::for_layer(&layer.name, &features, styles_dir, catalog)?;

    let folder = document.append_folder(&layer.name)?;
    for (index, feature) in features.iter().enumerate() {
        let key = resolver.style_key(feature, catalog)?;
        append_placemark(folder, feature, index, &key)?;
    }
    Ok(())
}
