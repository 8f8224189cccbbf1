//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::fs::{self, File};
use std::io;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Package the document and every file of the styles directory into a KMZ
/// archive. All entries are stored at the archive root.
pub fn write_kmz(kml_path: &Path, styles_dir: &Path, out_path: &Path) -> Result<(), String> {
    let file = File::create(out_path)
        .map_err(|e| format!("Error creating '{}': {}", out_path.display(), e))?;
    let mut kmz = ZipWriter::new(io::BufWriter::new(file));
    let options = SimpleFileOptions::default();

    add_entry(&mut kmz, kml_path, options)?;

    if styles_dir.is_dir() {
        let mut assets = fs::read_dir(styles_dir)
            .map_err(|e| format!("Error reading '{}': {}", styles_dir.display(), e))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect::<Vec<_>>();
        assets.sort();
        for asset in &assets {
            add_entry(&mut kmz, asset, options)?;
        }
    }

    kmz.finish()
        .map_err(|e| format!("Error writing '{}': {}", out_path.display(), e))?;
    Ok(())
}

fn add_entry<W: io::Write + io::Seek>(
    kmz: &mut ZipWriter<W>,
    path: &Path,
    options: SimpleFileOptions,
) -> Result<(), String> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or(format!("Invalid file name '{}'", path.display()))?;
    kmz.start_file(name, options)
        .map_err(|e| format!("Error adding archive entry '{}': {}", name, e))?;
    let mut input =
        File::open(path).map_err(|e| format!("Error reading '{}': {}", path.display(), e))?;
    io::copy(&mut input, kmz).map_err(|e| format!("Error adding archive entry '{}': {}", name, e))?;
    Ok(())
}
