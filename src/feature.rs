//! Shapes paired with free-form attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::Shape;

/// A shape together with a JSON object of properties.
///
/// Features are a construction source for
/// [`GeometryCollection`](crate::scalar::GeometryCollection); only the shape is kept there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    shape: Shape,
    #[serde(default)]
    properties: Map<String, Value>,
}

impl Feature {
    /// A feature with no properties.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            properties: Map::new(),
        }
    }

    pub fn with_properties(shape: impl Into<Shape>, properties: Map<String, Value>) -> Self {
        Self {
            shape: shape.into(),
            properties,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn into_shape(self) -> Shape {
        self.shape
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Set a property, returning the previous value under `key` if there was one.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }
}

impl From<Shape> for Feature {
    fn from(value: Shape) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::p0;
    use serde_json::json;

    #[test]
    fn properties() {
        let mut feature = Feature::new(p0());
        assert!(feature.properties().is_empty());

        assert_eq!(feature.set_property("name", "origin"), None);
        assert_eq!(
            feature.set_property("name", "start"),
            Some(json!("origin"))
        );
        assert_eq!(feature.property("name"), Some(&json!("start")));
        assert_eq!(feature.property("missing"), None);
    }

    #[test]
    fn serde_round_trip() {
        let mut properties = Map::new();
        properties.insert("id".to_string(), json!(7));
        let feature = Feature::with_properties(p0(), properties);

        let text = serde_json::to_string(&feature).unwrap();
        let parsed: Feature = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, feature);
        assert_eq!(parsed.into_shape(), Shape::from(p0()));
    }
}
