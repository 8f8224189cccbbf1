//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::style::catalog::{StyleCatalog, StyleDefinition};
use elementtree::Element;

/// Fixed icon scale of point styles
const ICON_SCALE: &str = "1.5";

/// Append one `Style` element per catalog entry, in catalog order.
pub fn append_style_elements(document: &mut Element, catalog: &StyleCatalog) {
    for (key, def) in catalog.iter() {
        let style = document.append_new_child("Style");
        style.set_attr("id", key.as_str());
        match def {
            StyleDefinition::Icon(icon) => {
                let icon_style = style.append_new_child("IconStyle");
                icon_style.append_new_child("scale").set_text(ICON_SCALE);
                icon_style
                    .append_new_child("Icon")
                    .append_new_child("href")
                    .set_text(icon.href.as_str());
            }
            StyleDefinition::Line(line) => {
                let line_style = style.append_new_child("LineStyle");
                line_style
                    .append_new_child("color")
                    .set_text(line.color.kml_hex());
                line_style
                    .append_new_child("width")
                    .set_text(line.width.as_str());
            }
        }
    }
}
