//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::fields::{attr_value, geom_kind, to_geo, LABEL_FIELD, STYLE_FIELD};
use gdal::spatial_ref::{CoordTransform, SpatialRef};
use gdal::vector::LayerAccess;
use gdal::Dataset;
use gdal_sys::OSRAxisMappingStrategy;
use shp2kmz_core::core::feature::{Feature, FeatureAttr};
use shp2kmz_core::core::layer::VectorLayer;
use shp2kmz_core::datasource::DatasourceInput;
use std::path::{Path, PathBuf};

pub struct GdalDatasource {
    pub path: PathBuf,
}

impl GdalDatasource {
    pub fn new<P: AsRef<Path>>(path: P) -> GdalDatasource {
        GdalDatasource {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn layer_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Transformation between two EPSG references with traditional lon/lat
/// axis order (GDAL >= 3 would otherwise apply the authority order).
fn coord_transform(src_srid: i32, dst_srid: i32) -> Result<CoordTransform, String> {
    let src = SpatialRef::from_epsg(src_srid as u32)
        .map_err(|e| format!("Unknown source reference EPSG:{}: {}", src_srid, e))?;
    let dst = SpatialRef::from_epsg(dst_srid as u32)
        .map_err(|e| format!("Unknown target reference EPSG:{}: {}", dst_srid, e))?;
    src.set_axis_mapping_strategy(OSRAxisMappingStrategy::OAMS_TRADITIONAL_GIS_ORDER);
    dst.set_axis_mapping_strategy(OSRAxisMappingStrategy::OAMS_TRADITIONAL_GIS_ORDER);
    CoordTransform::new(&src, &dst).map_err(|e| {
        format!(
            "Cannot create transformation EPSG:{} -> EPSG:{}: {}",
            src_srid, dst_srid, e
        )
    })
}

impl DatasourceInput for GdalDatasource {
    /// Read the single layer of a shapefile, transforming every geometry
    /// into the target reference.
    fn read_layer(&self, src_srid: i32, dst_srid: i32) -> Result<Option<VectorLayer>, String> {
        let name = self.layer_name();
        let dataset = Dataset::open(&self.path)
            .map_err(|e| format!("Error opening '{}': {}", self.path.display(), e))?;
        let mut ogr_layer = dataset
            .layer(0)
            .map_err(|e| format!("Error reading layer of '{}': {}", self.path.display(), e))?;

        let geom_field = ogr_layer.defn().geom_fields().next();
        let geometry_type = match geom_field.and_then(|field| geom_kind(field.field_type())) {
            Some(kind) => kind,
            None => {
                warn!("Layer '{}' has an unsupported geometry type", name);
                return Ok(None);
            }
        };

        let field_names: Vec<String> = ogr_layer.defn().fields().map(|field| field.name()).collect();
        let transform = coord_transform(src_srid, dst_srid)?;

        let mut layer = VectorLayer::new(&name, geometry_type);
        for ogr_feature in ogr_layer.features() {
            // rows without geometry are dropped
            let mut ogr_geom = match ogr_feature.geometry() {
                Some(geometry) => geometry.clone(),
                None => continue,
            };
            ogr_geom
                .transform_inplace(&transform)
                .map_err(|e| format!("Coordinate transformation failed in layer '{}': {}", name, e))?;
            let geometry = to_geo(&ogr_geom)
                .map_err(|e| format!("Layer '{}': {}", name, e))?;

            let mut attributes = Vec::new();
            let mut label = String::new();
            let mut style = None;
            for field_name in &field_names {
                match field_name.as_str() {
                    LABEL_FIELD => {
                        if let Some(value) = attr_value(&name, &ogr_feature, field_name)? {
                            label = value.to_string();
                        }
                    }
                    STYLE_FIELD => {
                        // DBF has no real NULLs - empty strings mean "absent"
                        style = attr_value(&name, &ogr_feature, field_name)?
                            .map(|value| value.to_string())
                            .filter(|value| !value.is_empty());
                    }
                    _ => {
                        if let Some(value) = attr_value(&name, &ogr_feature, field_name)? {
                            attributes.push(FeatureAttr {
                                key: field_name.clone(),
                                value,
                            });
                        }
                    }
                }
            }

            layer.features.push(Feature {
                attributes,
                label,
                style,
                geometry,
            });
        }
        Ok(Some(layer))
    }
}
