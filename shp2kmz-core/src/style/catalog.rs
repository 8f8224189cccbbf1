//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::style::color::Color;

/// Icon based style of a point layer
#[derive(Clone, PartialEq, Debug)]
pub struct IconStyle {
    pub href: String,
}

/// Color/width based style of a line layer
#[derive(Clone, PartialEq, Debug)]
pub struct LineStyle {
    pub color: Color,
    /// String encoded numeric width
    pub width: String,
    /// Raw originating `Style` attribute, kept for reverse lookup.
    /// `None` for styles from an external style definition.
    pub content: Option<String>,
}

impl LineStyle {
    /// Parse the `color:<r,g,b,a>;width:<w>` attribute encoding
    /// (fixed segment order).
    pub fn parse(raw: &str) -> Result<LineStyle, String> {
        let segments = raw.split(';').collect::<Vec<&str>>();
        if segments.len() != 2 {
            return Err(format!("Invalid style attribute '{}'", raw));
        }
        let color = match segments[0].splitn(2, ':').collect::<Vec<&str>>().as_slice() {
            ["color", value] => Color::parse(value)?,
            _ => return Err(format!("Invalid style attribute '{}'", raw)),
        };
        let width = match segments[1].splitn(2, ':').collect::<Vec<&str>>().as_slice() {
            ["width", value] => value.to_string(),
            _ => return Err(format!("Invalid style attribute '{}'", raw)),
        };
        Ok(LineStyle {
            color,
            width,
            content: Some(raw.to_string()),
        })
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum StyleDefinition {
    Icon(IconStyle),
    Line(LineStyle),
}

/// Style definitions of the whole document, in first-seen order.
///
/// Keys are unique across all layers. Registering an identical definition
/// again is a no-op, a second definition under an existing key is an
/// integrity error.
pub struct StyleCatalog {
    entries: Vec<(String, StyleDefinition)>,
}

impl StyleCatalog {
    pub fn new() -> StyleCatalog {
        StyleCatalog {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&StyleDefinition> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, def)| def)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, StyleDefinition)> {
        self.entries.iter()
    }

    pub fn add(&mut self, key: &str, def: StyleDefinition) -> Result<(), String> {
        match self.get(key) {
            Some(existing) if *existing == def => Ok(()),
            Some(_) => Err(format!("Conflicting style definitions for key '{}'", key)),
            None => {
                self.entries.push((key.to_string(), def));
                Ok(())
            }
        }
    }

    /// Key of the attribute-derived line style for a raw `Style` value,
    /// interning a new definition on first sight. Synthetic keys are
    /// assigned in first-seen order, counted across all layers so they
    /// stay unique within the document.
    pub fn intern_line_style(&mut self, raw: &str) -> Result<String, String> {
        if let Some(key) = self.find_line_style(raw) {
            return Ok(key);
        }
        let style = LineStyle::parse(raw)?;
        let key = format!("style0{}", self.derived_count());
        self.entries.push((key.clone(), StyleDefinition::Line(style)));
        Ok(key)
    }

    /// Reverse lookup of an attribute-derived line style by its raw content.
    pub fn find_line_style(&self, raw: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(_, def)| match def {
                StyleDefinition::Line(line) => line.content.as_deref() == Some(raw),
                _ => false,
            })
            .map(|(key, _)| key.clone())
    }

    fn derived_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, def)| match def {
                StyleDefinition::Line(line) => line.content.is_some(),
                _ => false,
            })
            .count()
    }
}
