//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

mod fields;
mod shape_ds;

pub use crate::shape_ds::GdalDatasource;

pub fn gdal_version() -> String {
    gdal::version::version_info("RELEASE_NAME")
}
