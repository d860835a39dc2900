use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scenediff_types::{PrimPath, Token, Value, ValueType};

use crate::attribute::Attribute;
use crate::error::SceneError;
use crate::relationship::Relationship;

/// A node in the scene tree.
///
/// A `Prim` is immutable once built and exposes only the read capabilities
/// the differencing engine needs: its path (the stable identity among
/// siblings), its authored attributes and relationships, and its children.
/// An *absent* prim is represented as `None` at the engine's API, never as a
/// `Prim` in a special state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prim {
    path: PrimPath,
    type_name: Token,
    attributes: BTreeMap<Token, Attribute>,
    relationships: BTreeMap<Token, Relationship>,
    children: Vec<Prim>,
}

impl Prim {
    /// The prim's absolute path.
    pub fn path(&self) -> &PrimPath {
        &self.path
    }

    /// The prim's own name (last path component).
    pub fn name(&self) -> &str {
        self.path.name()
    }

    /// The prim's schema type name.
    pub fn type_name(&self) -> &Token {
        &self.type_name
    }

    /// Authored attributes, in name order.
    pub fn authored_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// Look up an authored attribute by name.
    pub fn attribute(&self, name: &Token) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Authored relationships, in name order.
    pub fn authored_relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }

    /// Look up an authored relationship by name.
    pub fn relationship(&self, name: &Token) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    /// Direct children, in insertion order. Child paths are unique.
    pub fn children(&self) -> &[Prim] {
        &self.children
    }

    /// Find a descendant (or this prim) by absolute path.
    pub fn find(&self, path: &PrimPath) -> Option<&Prim> {
        if &self.path == path {
            return Some(self);
        }
        if !path.as_str().starts_with(self.path.as_str()) {
            return None;
        }
        self.children.iter().find_map(|child| child.find(path))
    }
}

enum AttrSpec {
    Authored(Value),
    Unauthored(ValueType),
}

/// Builder for a prim subtree.
///
/// Names and target paths are accepted as plain strings and validated when
/// the tree is frozen by [`build`](PrimSpec::build), which also rejects
/// duplicate attribute, relationship, and child names.
pub struct PrimSpec {
    name: String,
    type_name: String,
    attributes: Vec<(String, AttrSpec)>,
    relationships: Vec<(String, Vec<String>)>,
    children: Vec<PrimSpec>,
}

impl PrimSpec {
    /// Start a prim with the given name and schema type.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            attributes: Vec::new(),
            relationships: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Author an attribute with a value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .push((name.into(), AttrSpec::Authored(value.into())));
        self
    }

    /// Declare an attribute without authoring a value.
    pub fn attr_unauthored(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.attributes
            .push((name.into(), AttrSpec::Unauthored(value_type)));
        self
    }

    /// Author a relationship with the given targets, in order.
    pub fn relationship<I, S>(mut self, name: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets = targets.into_iter().map(Into::into).collect();
        self.relationships.push((name.into(), targets));
        self
    }

    /// Add a child prim.
    pub fn child(mut self, child: PrimSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Validate and freeze the subtree, rooted at `/<name>`.
    pub fn build(self) -> Result<Prim, SceneError> {
        self.build_at(None)
    }

    fn build_at(self, parent: Option<&PrimPath>) -> Result<Prim, SceneError> {
        let name = Token::new(self.name)?;
        let path = match parent {
            Some(parent) => parent.child(&name),
            None => PrimPath::root_prim(&name),
        };
        let type_name = Token::new(self.type_name)?;

        let mut attributes = BTreeMap::new();
        for (name, spec) in self.attributes {
            let name = Token::new(name)?;
            let attr = match spec {
                AttrSpec::Authored(value) => Attribute::with_value(name.clone(), value),
                AttrSpec::Unauthored(value_type) => {
                    Attribute::unauthored(name.clone(), value_type)
                }
            };
            if attributes.insert(name.clone(), attr).is_some() {
                return Err(SceneError::DuplicateAttribute { path, name });
            }
        }

        let mut relationships = BTreeMap::new();
        for (name, targets) in self.relationships {
            let name = Token::new(name)?;
            let targets = targets
                .into_iter()
                .map(PrimPath::parse)
                .collect::<Result<Vec<_>, _>>()?;
            let rel = Relationship::new(name.clone(), targets);
            if relationships.insert(name.clone(), rel).is_some() {
                return Err(SceneError::DuplicateRelationship { path, name });
            }
        }

        let mut children = Vec::with_capacity(self.children.len());
        for child in self.children {
            let child = child.build_at(Some(&path))?;
            if children.iter().any(|c: &Prim| c.path() == child.path()) {
                let name = Token::new(child.name())?;
                return Err(SceneError::DuplicateChild { path, name });
            }
            children.push(child);
        }

        Ok(Prim {
            path,
            type_name,
            attributes,
            relationships,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_computes_child_paths() {
        let prim = PrimSpec::new("World", "Xform")
            .child(PrimSpec::new("Sphere", "Sphere").attr("radius", 2.0))
            .build()
            .unwrap();

        assert_eq!(prim.path().as_str(), "/World");
        assert_eq!(prim.children().len(), 1);
        let child = &prim.children()[0];
        assert_eq!(child.path().as_str(), "/World/Sphere");
        assert_eq!(child.name(), "Sphere");
        assert_eq!(child.type_name().as_str(), "Sphere");
    }

    #[test]
    fn attributes_are_looked_up_by_name() {
        let prim = PrimSpec::new("Sphere", "Sphere")
            .attr("radius", 2.0)
            .attr_unauthored("visibility", ValueType::Token)
            .build()
            .unwrap();

        let radius = Token::new("radius").unwrap();
        assert_eq!(
            prim.attribute(&radius).unwrap().authored_value(),
            Some(&Value::Float(2.0))
        );
        assert_eq!(prim.authored_attributes().count(), 2);
    }

    #[test]
    fn relationships_keep_target_order() {
        let prim = PrimSpec::new("Mesh", "Mesh")
            .relationship("material:binding", ["/Looks/Metal", "/Looks/Glass"])
            .build()
            .unwrap();

        let name = Token::new("material:binding").unwrap();
        let rel = prim.relationship(&name).unwrap();
        assert_eq!(rel.targets()[0].as_str(), "/Looks/Metal");
        assert_eq!(rel.targets()[1].as_str(), "/Looks/Glass");
    }

    #[test]
    fn duplicate_attribute_rejected() {
        let result = PrimSpec::new("Sphere", "Sphere")
            .attr("radius", 1.0)
            .attr("radius", 2.0)
            .build();
        assert!(matches!(
            result,
            Err(SceneError::DuplicateAttribute { .. })
        ));
    }

    #[test]
    fn duplicate_child_rejected() {
        let result = PrimSpec::new("World", "Xform")
            .child(PrimSpec::new("A", "Xform"))
            .child(PrimSpec::new("A", "Sphere"))
            .build();
        assert!(matches!(result, Err(SceneError::DuplicateChild { .. })));
    }

    #[test]
    fn invalid_name_surfaces_type_error() {
        let result = PrimSpec::new("Bad/Name", "Xform").build();
        assert!(matches!(result, Err(SceneError::Type(_))));
    }

    #[test]
    fn find_walks_the_subtree() {
        let prim = PrimSpec::new("World", "Xform")
            .child(PrimSpec::new("Geom", "Scope").child(PrimSpec::new("Cube", "Cube")))
            .build()
            .unwrap();

        let path = PrimPath::parse("/World/Geom/Cube").unwrap();
        assert_eq!(prim.find(&path).unwrap().name(), "Cube");

        let missing = PrimPath::parse("/World/Geom/Sphere").unwrap();
        assert!(prim.find(&missing).is_none());
    }
}
