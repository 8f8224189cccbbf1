//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub project: ProjectCfg,
    pub datasource: DatasourceCfg,
    pub template: TemplateCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ProjectCfg {
    /// Base name of the generated KML/KMZ files
    pub name: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatasourceCfg {
    /// Directory containing the input shapefiles
    pub data_dir: String,
    /// Directory with icon assets and the optional line style definition.
    /// Defaults to `<data_dir>/styles`.
    pub styles_dir: Option<String>,
    /// Spatial reference of the input geometries (EPSG code)
    #[serde(default = "default_src_srid")]
    pub src_srid: i32,
    /// Spatial reference of the generated document (EPSG code)
    #[serde(default = "default_dst_srid")]
    pub dst_srid: i32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TemplateCfg {
    pub path: String,
}

pub fn default_output_dir() -> String {
    "./generated".to_string()
}

pub fn default_src_srid() -> i32 {
    25830
}

pub fn default_dst_srid() -> i32 {
    4326
}

pub const DEFAULT_CONFIG: &'static str = r#"
[project]
name = "GIS Zona 1"
output_dir = "./generated"

[datasource]
data_dir = "./data"
styles_dir = "./data/styles"
src_srid = 25830
dst_srid = 4326

[template]
path = "./models/kml_model.kml"
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").unwrap();
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera
        .render(path, &context)
        .map_err(|e| format!("Template error: {}", e.source().unwrap()))?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
