//! Factory variants: simple factory, factory method, abstract factory.
//!
//! - [`ShapeFactory`] / [`ShapeKind::create`]: a discriminator in, a product out.
//! - [`Logistics`]: the creator trait whose implementors choose the product.
//! - [`WidgetFactory`]: a family of related products per theme.
//!
//! All three fail with [`FactoryError::UnknownProduct`] rather than inventing a default.

pub mod abstract_factory;
pub mod demo;
pub mod error;
pub mod method;
pub mod shape;
pub mod simple;

pub use abstract_factory::{
    render_form, widget_factory, Button, Checkbox, DarkThemeFactory, LightThemeFactory,
    WidgetFactory,
};
pub use demo::FactoryDemo;
pub use error::*;
pub use method::{Logistics, RoadLogistics, SeaLogistics, Ship, Transport, Truck};
pub use shape::{Circle, Rectangle, Shape, ShapeKind, Square};
pub use simple::{ShapeConstructor, ShapeFactory};
