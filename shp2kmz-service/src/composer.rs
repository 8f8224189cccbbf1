//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::assembler::assemble_layer;
use pbr::ProgressBar;
use shp2kmz_core::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use shp2kmz_core::core::Config;
use shp2kmz_core::datasource::DatasourceInput;
#[cfg(not(feature = "with-gdal"))]
use shp2kmz_core::datasource::DummyDatasource as GdalDatasource;
use shp2kmz_core::kml::KmlDocument;
use shp2kmz_core::kmz::write_kmz;
use shp2kmz_core::style::catalog::StyleCatalog;
#[cfg(feature = "with-gdal")]
use shp2kmz_gdal::GdalDatasource;
use std::fs;
use std::path::PathBuf;

/// Orchestrates one conversion run: assembles every discovered input layer
/// into the template document, merges all style definitions and hands the
/// result to the document writer and the archiver.
pub struct Composer {
    pub project_name: String,
    pub data_dir: PathBuf,
    pub styles_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub src_srid: i32,
    pub dst_srid: i32,
}

impl<'a> Config<'a, ApplicationCfg> for Composer {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let data_dir = PathBuf::from(&config.datasource.data_dir);
        let styles_dir = match config.datasource.styles_dir {
            Some(ref dir) => PathBuf::from(dir),
            None => data_dir.join("styles"),
        };
        Ok(Composer {
            project_name: config.project.name.clone(),
            data_dir,
            styles_dir,
            template: PathBuf::from(&config.template.path),
            output_dir: PathBuf::from(&config.project.output_dir),
            src_srid: config.datasource.src_srid,
            dst_srid: config.datasource.dst_srid,
        })
    }
    fn gen_config() -> String {
        DEFAULT_CONFIG.to_string()
    }
}

impl Composer {
    /// Input layers: `.shp` files in sorted file name order, which keeps
    /// the folder order of the generated document reproducible.
    pub fn discover_layers(&self) -> Result<Vec<PathBuf>, String> {
        let entries = fs::read_dir(&self.data_dir)
            .map_err(|e| format!("Error reading '{}': {}", self.data_dir.display(), e))?;
        let mut layers = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .map_or(false, |ext| ext.eq_ignore_ascii_case("shp"))
            })
            .collect::<Vec<_>>();
        layers.sort();
        Ok(layers)
    }

    /// Run the whole conversion. No partial output is written on failure.
    pub fn run(&self, progress: bool) -> Result<(), String> {
        let layers = self.discover_layers()?;
        info!(
            "Converting {} layer(s) from '{}'",
            layers.len(),
            self.data_dir.display()
        );

        let mut document = KmlDocument::from_template(&self.template)?;
        let mut catalog = StyleCatalog::new();
        let mut pb = ProgressBar::new(layers.len() as u64);
        for path in &layers {
            let ds = GdalDatasource::new(path);
            match ds.read_layer(self.src_srid, self.dst_srid)? {
                Some(layer) => {
                    info!("Layer '{}': {} feature(s)", layer.name, layer.features.len());
                    assemble_layer(&mut document, layer, &self.styles_dir, &mut catalog)?;
                }
                None => {} // unsupported geometry kind, reported by the datasource
            }
            if progress {
                pb.inc();
            }
        }
        document.append_styles(&catalog)?;

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| format!("Error creating '{}': {}", self.output_dir.display(), e))?;
        let kml_path = self.output_dir.join(format!("{}.kml", self.project_name));
        document.write(&kml_path)?;
        info!("Generated '{}'", kml_path.display());

        let kmz_path = self.output_dir.join(format!("{}.kmz", self.project_name));
        write_kmz(&kml_path, &self.styles_dir, &kmz_path)?;
        info!("Generated '{}'", kmz_path.display());

        if progress {
            pb.finish_print(&format!("Generated '{}'", kmz_path.display()));
        }
        Ok(())
    }
}
