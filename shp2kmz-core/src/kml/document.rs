//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::kml::style::append_style_elements;
use crate::kml::writer::write_kml;
use crate::style::catalog::StyleCatalog;
use elementtree::Element;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// The composed output document: template skeleton plus one folder per
/// layer and a flat trailing style section. Built once, written once.
pub struct KmlDocument {
    root: Element,
}

impl KmlDocument {
    /// Load the template skeleton. Its first child element is the
    /// insertion point for folders and styles.
    pub fn from_template(path: &Path) -> Result<KmlDocument, String> {
        let file = File::open(path)
            .map_err(|e| format!("Error reading template '{}': {}", path.display(), e))?;
        let mut reader = BufReader::new(file);
        let root = Element::from_reader(&mut reader)
            .map_err(|e| format!("Error parsing template '{}': {}", path.display(), e))?;
        let doc = KmlDocument { root };
        // fail early on templates without an insertion point
        if doc.root.child_count() == 0 {
            return Err(format!(
                "Template '{}' has no document element",
                path.display()
            ));
        }
        Ok(doc)
    }

    /// Insertion point for layer folders and style definitions
    pub fn document_mut(&mut self) -> Result<&mut Element, String> {
        self.root
            .get_child_mut(0)
            .ok_or("Template has no document element".to_string())
    }

    /// Named folder entry for one layer
    pub fn append_folder(&mut self, layer_name: &str) -> Result<&mut Element, String> {
        let document = self.document_mut()?;
        let folder = document.append_new_child("Folder");
        folder.set_attr("id", layer_name);
        folder.append_new_child("name").set_text(layer_name);
        folder.append_new_child("Snippet");
        Ok(folder)
    }

    /// Append the style catalog after all layer folders
    pub fn append_styles(&mut self, catalog: &StyleCatalog) -> Result<(), String> {
        append_style_elements(self.document_mut()?, catalog);
        Ok(())
    }

    /// Serialize the document (single write)
    pub fn write(&self, path: &Path) -> Result<(), String> {
        let file = File::create(path)
            .map_err(|e| format!("Error creating '{}': {}", path.display(), e))?;
        write_kml(&self.root, BufWriter::new(file))
            .map_err(|e| format!("Error writing '{}': {}", path.display(), e))
    }
}
