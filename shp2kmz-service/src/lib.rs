//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

#[cfg(feature = "with-gdal")]
extern crate shp2kmz_gdal;

pub mod assembler;
pub mod composer;
