//! Closed shape hierarchy with exhaustive dispatch.
//!
//! `Shape` and `Triangle` are plain enums, so every `match` over them is
//! checked for exhaustiveness and no other crate can add a variant. Two
//! branches are deliberately left open: the isosceles triangle and the
//! general polygon carry trait objects, so new kinds can be plugged in from
//! anywhere that implements `IsoscelesLike` or `PolygonLike`.

use crate::error::ShapeError;
use crate::style;
use std::f64::consts::PI;
use std::fmt;
use std::io::{self, Write};

// =============================================================================
// Milestone 1: Leaf variants
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({:?})", self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle({:?}x{:?})", self.length, self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilateral {
    pub side: f64,
}

impl fmt::Display for Equilateral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Equilateral(side={:?})", self.side)
    }
}

/// A triangle given by its three sides. The only validated shape: the sides
/// must satisfy the strict triangle inequality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalene {
    a: f64,
    b: f64,
    c: f64,
}

impl Scalene {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ShapeError> {
        // Written as the positive condition so NaN sides are rejected too.
        let valid = a + b > c && a + c > b && b + c > a;
        if !valid {
            tracing::debug!(a, b, c, "rejected scalene sides");
            return Err(ShapeError::InvalidSides { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl fmt::Display for Scalene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalene({:?},{:?},{:?})", self.a, self.b, self.c)
    }
}

// =============================================================================
// Milestone 2: Open extension points
// =============================================================================

/// Anything that behaves like an isosceles triangle. Implement it to extend
/// the isosceles branch of the hierarchy.
pub trait IsoscelesLike: fmt::Debug + fmt::Display {
    fn equal_side(&self) -> f64;
    fn base(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Isosceles {
    pub equal_side: f64,
    pub base: f64,
}

impl IsoscelesLike for Isosceles {
    fn equal_side(&self) -> f64 {
        self.equal_side
    }

    fn base(&self) -> f64 {
        self.base
    }
}

impl fmt::Display for Isosceles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Isosceles(equal={:?}, base={:?})", self.equal_side, self.base)
    }
}

/// A polygon known only by its side count. Implement it to extend the
/// polygon branch of the hierarchy.
pub trait PolygonLike: fmt::Debug + fmt::Display {
    fn sides(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polygon {
    pub sides: u32,
}

impl PolygonLike for Polygon {
    fn sides(&self) -> u32 {
        self.sides
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} sides)", self.sides)
    }
}

/// A polygon defined outside the core set, plugged in through `PolygonLike`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomPolygon {
    inner: Polygon,
}

impl CustomPolygon {
    pub fn new(sides: u32) -> Self {
        Self {
            inner: Polygon { sides },
        }
    }
}

impl PolygonLike for CustomPolygon {
    fn sides(&self) -> u32 {
        self.inner.sides()
    }
}

impl fmt::Display for CustomPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomPolygon({} sides)", self.inner.sides)
    }
}

// =============================================================================
// Milestone 3: The closed hierarchy
// =============================================================================

#[derive(Debug)]
pub enum Triangle {
    Equilateral(Equilateral),
    Isosceles(Box<dyn IsoscelesLike>),
    Scalene(Scalene),
}

#[derive(Debug)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Polygon(Box<dyn PolygonLike>),
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle(Circle { radius })
    }

    pub fn rectangle(length: f64, width: f64) -> Self {
        Shape::Rectangle(Rectangle { length, width })
    }

    pub fn equilateral(side: f64) -> Self {
        Shape::Triangle(Triangle::Equilateral(Equilateral { side }))
    }

    pub fn isosceles(equal_side: f64, base: f64) -> Self {
        Self::isosceles_like(Isosceles { equal_side, base })
    }

    pub fn isosceles_like(triangle: impl IsoscelesLike + 'static) -> Self {
        Shape::Triangle(Triangle::Isosceles(Box::new(triangle)))
    }

    pub fn scalene(a: f64, b: f64, c: f64) -> Result<Self, ShapeError> {
        Scalene::new(a, b, c).map(|s| Shape::Triangle(Triangle::Scalene(s)))
    }

    pub fn polygon(polygon: impl PolygonLike + 'static) -> Self {
        Shape::Polygon(Box::new(polygon))
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Triangle::Equilateral(e) => write!(f, "{e}"),
            Triangle::Isosceles(iso) => write!(f, "{iso}"),
            Triangle::Scalene(sc) => write!(f, "{sc}"),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "{c}"),
            Shape::Rectangle(r) => write!(f, "{r}"),
            Shape::Triangle(t) => write!(f, "{t}"),
            Shape::Polygon(p) => write!(f, "{p}"),
        }
    }
}

// =============================================================================
// Milestone 4: Dispatch
// =============================================================================

/// Area of a shape, or `UnsupportedArea` for polygons: a side count alone
/// does not determine an area.
pub fn area(shape: &Shape) -> Result<f64, ShapeError> {
    match shape {
        Shape::Circle(c) => Ok(PI * c.radius * c.radius),
        Shape::Rectangle(r) => Ok(r.length * r.width),
        Shape::Triangle(Triangle::Equilateral(e)) => Ok(3f64.sqrt() / 4.0 * e.side * e.side),
        Shape::Triangle(Triangle::Isosceles(iso)) => {
            let (equal, base) = (iso.equal_side(), iso.base());
            let height = (equal * equal - (base * base) / 4.0).sqrt();
            Ok(base * height / 2.0)
        }
        Shape::Triangle(Triangle::Scalene(sc)) => {
            // Heron's formula
            let (a, b, c) = sc.sides();
            let p = (a + b + c) / 2.0;
            Ok((p * (p - a) * (p - b) * (p - c)).sqrt())
        }
        Shape::Polygon(p) => {
            tracing::debug!(shape = %p, "area requested for general polygon");
            Err(ShapeError::unsupported_area(p))
        }
    }
}

pub fn describe(shape: &Shape) -> String {
    match shape {
        Shape::Circle(c) => format!("A circle with radius {:?}", c.radius),
        Shape::Rectangle(r) => format!("A rectangle {:?} by {:?}", r.length, r.width),
        Shape::Triangle(Triangle::Equilateral(e)) => {
            format!("An equilateral triangle of side {:?}", e.side)
        }
        Shape::Triangle(Triangle::Isosceles(iso)) => format!(
            "An isosceles triangle (equal={:?}, base={:?})",
            iso.equal_side(),
            iso.base()
        ),
        Shape::Triangle(Triangle::Scalene(sc)) => {
            let (a, b, c) = sc.sides();
            format!("A scalene triangle ({a:?},{b:?},{c:?})")
        }
        Shape::Polygon(p) => format!("A polygon with {} sides", p.sides()),
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo_shapes() -> Result<Vec<Shape>, ShapeError> {
    Ok(vec![
        Shape::circle(5.0),
        Shape::rectangle(2.0, 3.0),
        Shape::equilateral(3.0),
        Shape::isosceles(5.0, 6.0),
        Shape::scalene(3.0, 4.0, 5.0)?,
        Shape::polygon(CustomPolygon::new(5)),
    ])
}

pub fn write_report<W: Write>(out: &mut W) -> io::Result<()> {
    tracing::info!("running sealed shapes demo");

    let shapes = match demo_shapes() {
        Ok(shapes) => shapes,
        Err(err) => return writeln!(out, "{}", style::failure(&err.to_string())),
    };

    for shape in &shapes {
        writeln!(out, "{} {}", style::arrow(), describe(shape))?;
        match area(shape) {
            Ok(value) => writeln!(out, "   area = {value:?}")?,
            Err(err) => writeln!(out, "   area = (not supported): {err}")?,
        }
    }

    writeln!(out)?;
    writeln!(out, "{} Scalene(1.0,1.0,5.0)", style::arrow())?;
    match Scalene::new(1.0, 1.0, 5.0) {
        Ok(sc) => writeln!(out, "   constructed {sc}")?,
        Err(err) => writeln!(out, "   {}", style::failure(&format!("rejected: {err}")))?,
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
