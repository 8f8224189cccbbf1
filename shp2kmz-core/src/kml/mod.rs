//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod document;
pub mod placemark;
pub mod style;
pub mod writer;

pub use self::document::KmlDocument;

#[cfg(test)]
mod placemark_test;
