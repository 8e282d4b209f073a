//! A simple factory driven by a registry of constructors.

use super::{Circle, FactoryError, Rectangle, Shape, Square};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Constructor stored in the factory.
pub type ShapeConstructor = fn() -> Box<dyn Shape>;

/// Maps product keys to constructors.
///
/// Keys are case-insensitive. Asking for a key nobody registered is an error, never a
/// default product.
#[derive(Debug, Clone, Default)]
pub struct ShapeFactory {
    constructors: HashMap<String, ShapeConstructor>,
}

impl ShapeFactory {
    /// An empty factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory that knows `circle`, `square` and `rectangle`.
    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        factory.register("circle", || Box::new(Circle::default()));
        factory.register("square", || Box::new(Square::default()));
        factory.register("rectangle", || Box::new(Rectangle::default()));
        factory
    }

    /// Adds or replaces the constructor for `key`.
    pub fn register(&mut self, key: &str, constructor: ShapeConstructor) {
        let key = key.trim().to_ascii_lowercase();
        debug!(%key, "Registering product");
        self.constructors.insert(key, constructor);
    }

    pub fn create(&self, key: &str) -> Result<Box<dyn Shape>, FactoryError> {
        let normalized = key.trim().to_ascii_lowercase();
        match self.constructors.get(&normalized) {
            Some(constructor) => {
                debug!(key = %normalized, "Creating product");
                Ok(constructor())
            }
            None => {
                warn!(key, "Unknown product");
                Err(FactoryError::UnknownProduct(key.to_string()))
            }
        }
    }

    /// Registered keys, sorted.
    pub fn products(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Triangle;

    impl Shape for Triangle {
        fn name(&self) -> &'static str {
            "triangle"
        }

        fn area(&self) -> f64 {
            0.5
        }
    }

    #[test]
    fn creates_registered_products() {
        let factory = ShapeFactory::with_defaults();
        assert_eq!(factory.create("circle").unwrap().name(), "circle");
        assert_eq!(factory.create(" Square ").unwrap().name(), "square");
        assert_eq!(factory.products(), vec!["circle", "rectangle", "square"]);
    }

    #[test]
    fn unregistered_key_is_an_error() {
        let err = ShapeFactory::with_defaults().create("triangle").unwrap_err();
        assert_eq!(err, FactoryError::UnknownProduct("triangle".to_string()));
        assert_eq!(err.to_string(), "Unknown product type: triangle");
    }

    #[test]
    fn empty_factory_knows_nothing() {
        assert!(ShapeFactory::new().create("circle").is_err());
    }

    #[test]
    fn registration_extends_the_family() {
        let mut factory = ShapeFactory::with_defaults();
        factory.register("Triangle", || Box::new(Triangle));
        let triangle = factory.create("triangle").unwrap();
        assert_eq!(triangle.draw(), "Drawing a triangle with area 0.50");
    }
}
