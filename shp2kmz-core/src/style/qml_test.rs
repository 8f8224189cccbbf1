//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::style::catalog::StyleDefinition;
use crate::style::qml::{CategoryLabel, QmlRenderer};
use elementtree::Element;

const QML: &str = r#"<qgis version="3.16.4-Hannover">
  <renderer-v2 attr="Tipo" symbollevels="0" type="categorizedSymbol" enableorderby="0">
    <categories>
      <category render="true" symbol="0" value="Camino" label="Camino"/>
      <category render="true" symbol="1" value="Senda" label="Senda"/>
      <category render="true" symbol="2" value="" label=""/>
    </categories>
    <symbols>
      <symbol alpha="1" type="line" name="0">
        <layer class="SimpleLine" enabled="1">
          <prop k="line_color" v="255,0,0,255"/>
          <prop k="line_style" v="solid"/>
          <prop k="line_width" v="0.66"/>
        </layer>
      </symbol>
      <symbol alpha="1" type="line" name="1">
        <layer class="SimpleLine" enabled="1">
          <prop k="line_color" v="0,255,0,255"/>
          <prop k="line_width" v="0.26"/>
        </layer>
      </symbol>
      <symbol alpha="1" type="line" name="2">
        <layer class="SimpleLine" enabled="1">
          <prop k="line_color" v="0,0,255,255"/>
          <prop k="line_width" v="0.26"/>
        </layer>
      </symbol>
    </symbols>
  </renderer-v2>
</qgis>"#;

fn parse(xml: &str) -> Result<QmlRenderer, String> {
    let root = Element::from_reader(xml.as_bytes()).expect("Malformed XML");
    QmlRenderer::from_xml(&root)
}

#[test]
fn test_parse_renderer() {
    let renderer = parse(QML).unwrap();
    assert_eq!(renderer.attribute, "Tipo");
    assert_eq!(renderer.categories.len(), 3);
    assert_eq!(
        renderer.categories[0].label,
        CategoryLabel::Label("Camino".to_string())
    );
    assert_eq!(renderer.categories[2].label, CategoryLabel::Unlabeled);
}

#[test]
fn test_line_styles() {
    let renderer = parse(QML).unwrap();
    let styles = renderer.line_styles().unwrap();
    // the unlabeled default bucket is excluded
    assert_eq!(styles.len(), 2);
    assert_eq!(styles[0].0, "Tipo_Camino");
    assert_eq!(styles[1].0, "Tipo_Senda");
    match styles[0].1 {
        StyleDefinition::Line(ref line) => {
            assert_eq!(line.color.kml_hex(), "ff0000ff");
            assert_eq!(line.width, "0.66");
            assert_eq!(line.content, None);
        }
        _ => panic!("Expected a line style"),
    }
}

#[test]
fn test_missing_renderer() {
    assert_eq!(
        parse("<qgis></qgis>").err(),
        Some("Missing element 'renderer-v2'".to_string())
    );
}

#[test]
fn test_missing_symbol() {
    let qml = r#"<qgis>
      <renderer-v2 attr="Tipo" type="categorizedSymbol">
        <categories>
          <category render="true" symbol="9" value="Camino" label="Camino"/>
        </categories>
        <symbols/>
      </renderer-v2>
    </qgis>"#;
    let renderer = parse(qml).unwrap();
    assert_eq!(
        renderer.line_styles().err(),
        Some("Missing symbol '9' for category 'Camino'".to_string())
    );
}

#[test]
fn test_missing_width_property() {
    let qml = r#"<qgis>
      <renderer-v2 attr="Tipo" type="categorizedSymbol">
        <categories>
          <category render="true" symbol="0" value="Camino" label="Camino"/>
        </categories>
        <symbols>
          <symbol alpha="1" type="line" name="0">
            <layer class="SimpleLine">
              <prop k="line_color" v="255,0,0,255"/>
            </layer>
          </symbol>
        </symbols>
      </renderer-v2>
    </qgis>"#;
    assert_eq!(
        parse(qml).err(),
        Some("Missing property 'line_width' for symbol '0'".to_string())
    );
}
