//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod catalog;
pub mod color;
pub mod qml;
pub mod resolver;

pub use self::catalog::{IconStyle, LineStyle, StyleCatalog, StyleDefinition};
pub use self::color::Color;
pub use self::resolver::LineStyleResolver;

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod color_test;
#[cfg(test)]
mod qml_test;
