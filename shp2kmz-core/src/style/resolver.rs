//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::feature::Feature;
use crate::style::catalog::StyleCatalog;
use crate::style::qml::{QmlRenderer, QML_FILE_NAME};
use std::path::Path;

/// Active style source of one line layer.
///
/// Decided once per layer: an external style definition file in the styles
/// directory wins, otherwise styles are derived from the per-feature
/// `Style` attribute.
pub enum LineStyleResolver {
    /// External renderer definition - keys synthesized from the
    /// categorization attribute.
    Renderer(QmlRenderer),
    /// Styles derived from the distinct `Style` attribute values of the
    /// layer's own features.
    Attribute,
}

impl LineStyleResolver {
    /// Decide the style source for a line layer and materialize its style
    /// definitions into the catalog.
    ///
    /// `features` must already be exploded into single-part geometries.
    pub fn for_layer(
        layer_name: &str,
        features: &[Feature],
        styles_dir: &Path,
        catalog: &mut StyleCatalog,
    ) -> Result<LineStyleResolver, String> {
        let qml_path = styles_dir.join(QML_FILE_NAME);
        if qml_path.exists() {
            debug!(
                "Layer '{}': line styles from '{}'",
                layer_name,
                qml_path.display()
            );
            let renderer = QmlRenderer::read(&qml_path)?;
            for (key, def) in renderer.line_styles()? {
                catalog.add(&key, def)?;
            }
            Ok(LineStyleResolver::Renderer(renderer))
        } else {
            debug!("Layer '{}': line styles from feature attributes", layer_name);
            for feature in features {
                match feature.style {
                    Some(ref raw) => {
                        catalog.intern_line_style(raw)?;
                    }
                    None => {
                        return Err(format!(
                            "Layer '{}': feature '{}' has no style value and no style definition file is present",
                            layer_name, feature.label
                        ));
                    }
                }
            }
            Ok(LineStyleResolver::Attribute)
        }
    }

    /// Style key of a single feature, following the layer's active source.
    pub fn style_key(&self, feature: &Feature, catalog: &StyleCatalog) -> Result<String, String> {
        match self {
            LineStyleResolver::Renderer(renderer) => {
                // An explicit style token short-circuits the category lookup
                if let Some(ref style) = feature.style {
                    return Ok(style.clone());
                }
                let attr = feature
                    .attributes
                    .iter()
                    .find(|a| a.key == renderer.attribute)
                    .ok_or(format!(
                        "Feature '{}' has no attribute '{}'",
                        feature.label, renderer.attribute
                    ))?;
                let key = format!("{}_{}", renderer.attribute, attr.value);
                if catalog.get(&key).is_none() {
                    // default bucket categories are excluded from the catalog
                    warn!(
                        "Feature '{}': no style definition for '{}'",
                        feature.label, key
                    );
                }
                Ok(key)
            }
            LineStyleResolver::Attribute => {
                let raw = feature.style.as_ref().ok_or(format!(
                    "Feature '{}' has no style value",
                    feature.label
                ))?;
                catalog
                    .find_line_style(raw)
                    .ok_or(format!("No style definition matching '{}'", raw))
            }
        }
    }
}
