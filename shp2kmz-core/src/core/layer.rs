//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::feature::Feature;
use std::fmt;

/// Geometry kind of a vector layer. Layers are homogeneous - other kinds
/// are rejected at the datasource.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LayerGeometry {
    Point,
    Line,
}

impl fmt::Display for LayerGeometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayerGeometry::Point => write!(f, "POINT"),
            LayerGeometry::Line => write!(f, "LINE"),
        }
    }
}

/// Ordered feature collection of one input file, named after the file's
/// base name. Geometries are already in the target reference.
#[derive(Clone, Debug)]
pub struct VectorLayer {
    pub name: String,
    pub geometry_type: LayerGeometry,
    pub features: Vec<Feature>,
}

impl VectorLayer {
    pub fn new(name: &str, geometry_type: LayerGeometry) -> VectorLayer {
        VectorLayer {
            name: name.to_string(),
            geometry_type,
            features: Vec::new(),
        }
    }
}
