//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::layer::VectorLayer;

pub trait DatasourceInput {
    /// Read the layer of one input file, with all coordinates transformed
    /// from `src_srid` into `dst_srid`.
    ///
    /// Returns `Ok(None)` for layers with an unsupported geometry kind
    /// (reported by the datasource, skipped by the caller).
    fn read_layer(&self, src_srid: i32, dst_srid: i32) -> Result<Option<VectorLayer>, String>;
}

pub struct DummyDatasource;

impl DummyDatasource {
    pub fn new<P: AsRef<std::path::Path>>(_path: P) -> DummyDatasource {
        DummyDatasource {}
    }
}

impl DatasourceInput for DummyDatasource {
    fn read_layer(&self, _src_srid: i32, _dst_srid: i32) -> Result<Option<VectorLayer>, String> {
        Err("GDAL datasource not supported in this build".to_string())
    }
}
