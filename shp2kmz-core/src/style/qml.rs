//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::style::catalog::{LineStyle, StyleDefinition};
use crate::style::color::Color;
use elementtree::Element;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;

/// Well-known file name of the line style definition in the styles directory
pub const QML_FILE_NAME: &str = "styles.qml";

fn read_xml(fname: &Path) -> Result<Element, io::Error> {
    let file = File::open(fname)?;
    let mut reader = BufReader::new(file);
    Element::from_reader(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Category label state. QML marks the default bucket with an empty label
/// string - modelled as an explicit variant here.
#[derive(Clone, PartialEq, Debug)]
pub enum CategoryLabel {
    Unlabeled,
    Label(String),
}

impl CategoryLabel {
    fn from_qml(raw: &str) -> CategoryLabel {
        if raw.is_empty() {
            CategoryLabel::Unlabeled
        } else {
            CategoryLabel::Label(raw.to_string())
        }
    }
}

#[derive(Clone, Debug)]
pub struct Category {
    pub label: CategoryLabel,
    pub symbol: String,
}

#[derive(Clone, Debug)]
struct SymbolProps {
    color: Color,
    width: String,
}

/// Categorized renderer description from a QGIS layer style file
#[derive(Clone, Debug)]
pub struct QmlRenderer {
    /// Attribute driving the categorization
    pub attribute: String,
    pub categories: Vec<Category>,
    symbols: HashMap<String, SymbolProps>,
}

impl QmlRenderer {
    pub fn read(path: &Path) -> Result<QmlRenderer, String> {
        let root = read_xml(path)
            .map_err(|e| format!("Error reading style file '{}': {}", path.display(), e))?;
        QmlRenderer::from_xml(&root)
            .map_err(|e| format!("Invalid style file '{}': {}", path.display(), e))
    }

    pub fn from_xml(root: &Element) -> Result<QmlRenderer, String> {
        let renderer = if root.tag().name() == "renderer-v2" {
            root
        } else {
            root.find("renderer-v2")
                .ok_or("Missing element 'renderer-v2'".to_string())?
        };
        let attribute = renderer
            .get_attr("attr")
            .ok_or("Missing attribute 'attr'".to_string())?
            .to_string();

        let mut categories = Vec::new();
        let category_list = renderer
            .find("categories")
            .ok_or("Missing element 'categories'".to_string())?;
        for category in category_list.find_all("category") {
            let symbol = category
                .get_attr("symbol")
                .ok_or("Missing attribute 'symbol'".to_string())?;
            categories.push(Category {
                label: CategoryLabel::from_qml(category.get_attr("label").unwrap_or("")),
                symbol: symbol.to_string(),
            });
        }

        let mut symbols = HashMap::new();
        let symbol_list = renderer
            .find("symbols")
            .ok_or("Missing element 'symbols'".to_string())?;
        for symbol in symbol_list.find_all("symbol") {
            let name = symbol
                .get_attr("name")
                .ok_or("Missing attribute 'name'".to_string())?;
            let color = layer_prop(symbol, "line_color")
                .ok_or(format!("Missing property 'line_color' for symbol '{}'", name))?;
            let width = layer_prop(symbol, "line_width")
                .ok_or(format!("Missing property 'line_width' for symbol '{}'", name))?;
            symbols.insert(
                name.to_string(),
                SymbolProps {
                    color: Color::parse(&color)?,
                    width,
                },
            );
        }

        Ok(QmlRenderer {
            attribute,
            categories,
            symbols,
        })
    }

    /// Style definitions for all labeled categories, keyed
    /// `<attribute>_<label>` in category order. Unlabeled categories
    /// (the default bucket) are excluded.
    pub fn line_styles(&self) -> Result<Vec<(String, StyleDefinition)>, String> {
        let mut styles = Vec::new();
        for category in &self.categories {
            let label = match category.label {
                CategoryLabel::Label(ref label) => label,
                CategoryLabel::Unlabeled => continue,
            };
            let symbol = self.symbols.get(&category.symbol).ok_or(format!(
                "Missing symbol '{}' for category '{}'",
                category.symbol, label
            ))?;
            styles.push((
                format!("{}_{}", self.attribute, label),
                StyleDefinition::Line(LineStyle {
                    color: symbol.color.clone(),
                    width: symbol.width.clone(),
                    content: None,
                }),
            ));
        }
        Ok(styles)
    }
}

/// Symbol property lookup in the `<layer><prop k=".." v=".."/></layer>`
/// structure of the style file.
fn layer_prop(symbol: &Element, key: &str) -> Option<String> {
    for layer in symbol.find_all("layer") {
        for prop in layer.find_all("prop") {
            if prop.get_attr("k") == Some(key) {
                return prop.get_attr("v").map(|v| v.to_string());
            }
        }
    }
    None
}
