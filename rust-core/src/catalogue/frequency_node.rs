//! Tagged tree view of the catalogue.
//!
//! Every node is either a numeric leaf or an ordered table of named children, so
//! traversal code can match exhaustively instead of inspecting value types. This
//! is the shape written to and read back from JSON.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A numeric leaf or a named sub-table, keys kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum FrequencyNode {
    Value(f64),
    Table(Vec<(String, FrequencyNode)>),
}

impl FrequencyNode {
    /// Empty table.
    pub fn table() -> Self {
        FrequencyNode::Table(Vec::new())
    }

    pub fn as_value(&self) -> Option<f64> {
        match self {
            FrequencyNode::Value(value) => Some(*value),
            FrequencyNode::Table(_) => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, FrequencyNode::Table(_))
    }

    /// Direct children; empty for a leaf.
    pub fn entries(&self) -> &[(String, FrequencyNode)] {
        match self {
            FrequencyNode::Value(_) => &[],
            FrequencyNode::Table(entries) => entries,
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Child named `key`, if this is a table containing it.
    pub fn get(&self, key: &str) -> Option<&FrequencyNode> {
        self.entries()
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, node)| node)
    }

    /// Descend through nested tables, e.g. `["gps", "draconitic_frequency"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&FrequencyNode> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Numeric leaf at `path`.
    pub fn value_at(&self, path: &[&str]) -> Option<f64> {
        self.get_path(path).and_then(FrequencyNode::as_value)
    }

    /// Visit every leaf depth-first with its dotted path (`gps.draconitic_harmonics.3`).
    pub fn for_each_leaf<F>(&self, mut visit: F)
    where
        F: FnMut(&str, f64),
    {
        self.walk("", &mut visit);
    }

    /// All leaves with their dotted paths, in traversal order.
    pub fn leaves(&self) -> Vec<(String, f64)> {
        let mut leaves = Vec::new();
        self.for_each_leaf(|path, value| leaves.push((path.to_string(), value)));
        leaves
    }

    fn walk<F>(&self, path: &str, visit: &mut F)
    where
        F: FnMut(&str, f64),
    {
        match self {
            FrequencyNode::Value(value) => visit(path, *value),
            FrequencyNode::Table(entries) => {
                for (key, child) in entries {
                    if path.is_empty() {
                        child.walk(key, visit);
                    } else {
                        child.walk(&format!("{}.{}", path, key), visit);
                    }
                }
            }
        }
    }
}

impl From<f64> for FrequencyNode {
    fn from(value: f64) -> Self {
        FrequencyNode::Value(value)
    }
}

impl<K: Into<String>> FromIterator<(K, FrequencyNode)> for FrequencyNode {
    fn from_iter<I: IntoIterator<Item = (K, FrequencyNode)>>(iter: I) -> Self {
        FrequencyNode::Table(iter.into_iter().map(|(key, node)| (key.into(), node)).collect())
    }
}

// ======================== SERDE ========================
// Tables map to JSON objects with their key order preserved. Non-finite leaves are
// written as `null` by serde_json, and `null` is read back as an unbounded value.

impl Serialize for FrequencyNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FrequencyNode::Value(value) => serializer.serialize_f64(*value),
            FrequencyNode::Table(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, node) in entries {
                    map.serialize_entry(key, node)?;
                }
                map.end()
            }
        }
    }
}

struct FrequencyNodeVisitor;

impl<'de> Visitor<'de> for FrequencyNodeVisitor {
    type Value = FrequencyNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, null, or an object of frequency nodes")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<FrequencyNode, E> {
        Ok(FrequencyNode::Value(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<FrequencyNode, E> {
        Ok(FrequencyNode::Value(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<FrequencyNode, E> {
        Ok(FrequencyNode::Value(value as f64))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FrequencyNode, E> {
        Ok(FrequencyNode::Value(f64::INFINITY))
    }

    fn visit_none<E: de::Error>(self) -> Result<FrequencyNode, E> {
        Ok(FrequencyNode::Value(f64::INFINITY))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FrequencyNode, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, node)) = access.next_entry::<String, FrequencyNode>()? {
            entries.push((key, node));
        }
        Ok(FrequencyNode::Table(entries))
    }
}

impl<'de> Deserialize<'de> for FrequencyNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FrequencyNodeVisitor)
    }
}
