//! `<area>` and its shapes.

use serde::{Deserialize, Serialize};

use super::ValuePair;

/// A WGS 84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// `<circle>`: a center point and a radius in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// `<polygon>`: a closed ring of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

/// A geographic target of an `<info>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    #[serde(default)]
    pub area_desc: String,
    #[serde(default)]
    pub polygon: Vec<Polygon>,
    #[serde(default)]
    pub circle: Vec<Circle>,
    #[serde(default)]
    pub geocode: Vec<ValuePair>,
}

impl Area {
    pub fn has_circle_or_polygon(&self) -> bool {
        !self.circle.is_empty() || !self.polygon.is_empty()
    }

    pub fn has_any_shape(&self) -> bool {
        self.has_circle_or_polygon() || !self.geocode.is_empty()
    }
}
