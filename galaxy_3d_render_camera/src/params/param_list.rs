/// Named parameter bundle handed to the render engine.
///
/// Keys are the well-known names from `params::keys`. Setting a key that
/// is already present replaces its value.

use rustc_hash::FxHashMap;
use glam::Vec3;

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Float(f32),
    FloatArray(Vec<f32>),
    Normal(Vec3),
    Point(Vec3),
}

/// Named parameter bundle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamList {
    values: FxHashMap<&'static str, ParamValue>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &'static str, value: ParamValue) {
        self.values.insert(key, value);
    }

    pub fn set_float(&mut self, key: &'static str, value: f32) {
        self.set(key, ParamValue::Float(value));
    }

    pub fn set_float_array(&mut self, key: &'static str, values: &[f32]) {
        self.set(key, ParamValue::FloatArray(values.to_vec()));
    }

    pub fn set_normal(&mut self, key: &'static str, normal: Vec3) {
        self.set(key, ParamValue::Normal(normal));
    }

    pub fn set_point(&mut self, key: &'static str, point: Vec3) {
        self.set(key, ParamValue::Point(point));
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Float value of `key`, or `None` if absent or of another type
    pub fn get_float(&self, key: &str) -> Option<f32> {
        match self.values.get(key) {
            Some(ParamValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    /// Float array value of `key`, or `None` if absent or of another type
    pub fn get_float_array(&self, key: &str) -> Option<&[f32]> {
        match self.values.get(key) {
            Some(ParamValue::FloatArray(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn get_normal(&self, key: &str) -> Option<Vec3> {
        match self.values.get(key) {
            Some(ParamValue::Normal(normal)) => Some(*normal),
            _ => None,
        }
    }

    pub fn get_point(&self, key: &str) -> Option<Vec3> {
        match self.values.get(key) {
            Some(ParamValue::Point(point)) => Some(*point),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (key, value) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> + '_ {
        self.values.iter().map(|(key, value)| (*key, value))
    }
}

#[cfg(test)]
#[path = "param_list_tests.rs"]
mod tests;
