//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use elementtree::Element;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Namespace declarations emitted on the root element
const NAMESPACES: [(&str, &str); 3] = [
    ("xmlns", "http://www.opengis.net/kml/2.2"),
    ("xmlns:gx", "http://www.google.com/kml/ext/2.2"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
];

/// Tags whose text is written verbatim as CDATA (HTML balloon content)
const CDATA_TAGS: [&str; 1] = ["description"];

/// Serialize an element tree with declaration, namespaces and indentation.
pub fn write_kml<W: Write>(root: &Element, out: W) -> Result<(), String> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| e.to_string())?;
    write_element(&mut writer, root, true).map_err(|e| e.to_string())
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
    is_root: bool,
) -> Result<(), quick_xml::Error> {
    let name = element.tag().name().to_string();
    let mut start = BytesStart::new(name.clone());
    if is_root {
        for (key, value) in NAMESPACES.iter() {
            start.push_attribute((*key, *value));
        }
    }
    for (attr_name, value) in element.attrs() {
        start.push_attribute((attr_name.name(), value));
    }

    // whitespace-only text is template noise, the writer indents itself
    let text = match element.text() {
        t if t.trim().is_empty() => "",
        t => t,
    };
    if element.child_count() == 0 && text.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if !text.is_empty() {
        if CDATA_TAGS.contains(&name.as_str()) {
            writer.write_event(Event::CData(BytesCData::new(text)))?;
        } else {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
    }
    for child in element.children() {
        write_element(writer, child, false)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
