//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::geom::GeometryType;
use std::fmt;

/// Supported feature attribute value types
#[derive(Clone, PartialEq, Debug)]
pub enum FeatureAttrValType {
    String(String),
    Double(f64),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for FeatureAttrValType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeatureAttrValType::String(v) => write!(f, "{}", v),
            FeatureAttrValType::Double(v) => write!(f, "{}", v),
            FeatureAttrValType::Int(v) => write!(f, "{}", v),
            FeatureAttrValType::Bool(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FeatureAttr {
    pub key: String,
    pub value: FeatureAttrValType,
}

/// One row of a layer's attribute/geometry table.
///
/// `attributes` keeps the original field order of the source table, with the
/// reserved fields (`geometry`, `Label`, `Style`) already split off.
#[derive(Clone, PartialEq, Debug)]
pub struct Feature {
    pub attributes: Vec<FeatureAttr>,
    /// Display name
    pub label: String,
    /// Raw style token or `color:..;width:..` encoding. `None` means the
    /// style is looked up externally.
    pub style: Option<String>,
    pub geometry: GeometryType,
}

impl Feature {
    /// Split a multi-part line row into one feature per part. Attributes,
    /// label and style are inherited by every part.
    pub fn explode(self) -> Vec<Feature> {
        let Feature {
            attributes,
            label,
            style,
            geometry,
        } = self;
        match geometry {
            GeometryType::MultiLineString(multi) => multi
                .lines
                .into_iter()
                .map(|part| Feature {
                    attributes: attributes.clone(),
                    label: label.clone(),
                    style: style.clone(),
                    geometry: GeometryType::LineString(part),
                })
                .collect(),
            geometry => vec![Feature {
                attributes,
                label,
                style,
                geometry,
            }],
        }
    }
}
