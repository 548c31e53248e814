use crate::domain::Point;

pub const MEASUREMENT: &str = "weather";

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
}

impl Reading {
    pub fn to_point(&self) -> Point {
        Point::new(MEASUREMENT)
            .tag("location", &self.location)
            .float_field("temperature", self.temperature)
            .float_field("humidity", self.humidity)
    }
}
