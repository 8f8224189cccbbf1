//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use shp2kmz_core::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use shp2kmz_core::core::{parse_config, read_config, Config};
use shp2kmz_service::composer::Composer;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = if args.value_of("loglevel").is_none() && rust_log_env.is_ok() {
        rust_log_env.as_ref().unwrap()
    } else {
        args.value_of("loglevel").unwrap_or("info")
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn config_from_args(args: &ArgMatches<'_>) -> ApplicationCfg {
    let config = match args.value_of("config") {
        Some(path) => read_config(path),
        None => parse_config(DEFAULT_CONFIG.to_string(), ""),
    };
    config.unwrap_or_else(|err| {
        println!("Error reading configuration - {}", err);
        process::exit(1)
    })
}

fn composer_from_args(args: &ArgMatches<'_>) -> Composer {
    let mut config = config_from_args(args);
    if let Some(name) = args.value_of("project") {
        config.project.name = name.to_string();
    }
    if let Some(dir) = args.value_of("out") {
        config.project.output_dir = dir.to_string();
    }
    if let Some(dir) = args.value_of("data") {
        config.datasource.data_dir = dir.to_string();
        config.datasource.styles_dir = None;
    }
    if let Some(dir) = args.value_of("styles") {
        config.datasource.styles_dir = Some(dir.to_string());
    }
    if let Some(path) = args.value_of("template") {
        config.template.path = path.to_string();
    }
    Composer::from_config(&config).unwrap_or_else(|err| {
        println!("Error reading configuration - {}", err);
        process::exit(1)
    })
}

fn convert(args: &ArgMatches<'_>) {
    let composer = composer_from_args(args);
    let progress = args.value_of("progress").map_or(true, |s| {
        s.parse::<bool>()
            .expect("Error parsing 'progress' as boolean value")
    });
    if let Err(err) = composer.run(progress) {
        error!("{}", err);
        process::exit(1);
    }
}

#[cfg(feature = "with-gdal")]
extern crate shp2kmz_gdal;

fn version_info() -> String {
    #[cfg(feature = "with-gdal")]
    let version = format!(
        "{} (GDAL version {})",
        crate_version!(),
        shp2kmz_gdal::gdal_version()
    );
    #[cfg(not(feature = "with-gdal"))]
    let version = crate_version!().to_string();
    version
}

fn main() {
    dotenv().ok();
    let version_info = version_info();
    let mut app = App::new("shp2kmz")
        .version(&version_info as &str)
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("convert a directory of shapefiles into a KML document packaged as KMZ")
        .subcommand(
            SubCommand::with_name("convert")
                .setting(AppSettings::AllowLeadingHyphen)
                .args_from_usage(
                    "-c, --config=[FILE] 'Load from custom config file'
                     --project=[NAME] 'Project name (base name of the generated files)'
                     --data=[DIR] 'Directory with input shapefiles'
                     --styles=[DIR] 'Directory with icon assets and line style definition'
                     --template=[FILE] 'KML template file'
                     --out=[DIR] 'Output directory'
                     --progress=[true|false] 'Show progress bar'
                     --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'",
                )
                .about("Convert shapefiles to KML/KMZ"),
        )
        .subcommand(SubCommand::with_name("genconfig").about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("convert", Some(sub_m)) => {
                init_logger(sub_m);
                convert(sub_m);
            }
            ("genconfig", Some(_sub_m)) => {
                println!("{}", Composer::gen_config());
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
