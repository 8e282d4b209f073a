use super::FactoryError;
use std::f64::consts::PI;
use std::fmt::{self, Debug};
use std::str::FromStr;

/// The product family the shape factories produce.
pub trait Shape: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn area(&self) -> f64;

    fn draw(&self) -> String {
        format!("Drawing a {} with area {:.2}", self.name(), self.area())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Default for Square {
    fn default() -> Self {
        Self { side: 1.0 }
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 1.0,
        }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Discriminator for the built-in shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Rectangle];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
        }
    }

    /// The simplest factory: one `match`, one default-sized product per kind.
    pub fn create(self) -> Box<dyn Shape> {
        match self {
            ShapeKind::Circle => Box::new(Circle::default()),
            ShapeKind::Square => Box::new(Square::default()),
            ShapeKind::Rectangle => Box::new(Rectangle::default()),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FactoryError::UnknownProduct(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!("Circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("SQUARE".parse::<ShapeKind>(), Ok(ShapeKind::Square));
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(FactoryError::UnknownProduct("hexagon".to_string()))
        );
    }

    #[test]
    fn each_kind_creates_its_own_product() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.create().name(), kind.name());
        }
    }

    #[test]
    fn draw_reports_area() {
        assert_eq!(Square { side: 3.0 }.draw(), "Drawing a square with area 9.00");
        assert_eq!(Circle::default().draw(), "Drawing a circle with area 3.14");
    }
}
