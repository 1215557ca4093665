//! Schema nodes consumed by the compiler
//!
//! [`Schema`] mirrors the subset of an OpenAPI 3.0 / 3.1 schema object the
//! compiler understands. With the `serde` feature it deserialises straight
//! from the document; the builder methods cover hand-written schemas.

use indexmap::IndexMap;

use crate::types::Value;

// ============================================================================
// Keyword value types
// ============================================================================

/// The `type` keyword: a single name, or a list as in OpenAPI 3.1
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum TypeDeclaration {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeDeclaration {
    /// Declared type names in order
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Single(name) => vec![name.as_str()],
            Self::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// `exclusiveMinimum` / `exclusiveMaximum`
///
/// OpenAPI 3.0 uses a flag modifying `minimum`/`maximum`; 3.1 uses the bound
/// itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum ExclusiveBound {
    Flag(bool),
    Limit(f64),
}

/// The `discriminator` object of a tagged union
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DiscriminatorObject {
    pub property_name: String,
}

// ============================================================================
// Schema
// ============================================================================

/// A schema node
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Schema {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub schema_type: Option<TypeDeclaration>,
    pub nullable: bool,
    #[cfg_attr(feature = "serde", serde(rename = "enum"))]
    pub enum_values: Option<Vec<Value>>,
    pub format: Option<String>,
    pub default: Option<Value>,

    // Composition
    pub all_of: Option<Vec<Schema>>,
    pub any_of: Option<Vec<Schema>>,
    pub one_of: Option<Vec<Schema>>,
    pub not: Option<Box<Schema>>,
    pub discriminator: Option<DiscriminatorObject>,

    // String constraints
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,

    // Numeric constraints
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<ExclusiveBound>,
    pub exclusive_maximum: Option<ExclusiveBound>,
    pub multiple_of: Option<f64>,

    // Array constraints
    pub items: Option<Box<Schema>>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub unique_items: bool,

    // Object constraints
    pub properties: IndexMap<String, Schema>,
    pub required: Vec<String>,
}

impl Schema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema for a specific type
    pub fn with_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(TypeDeclaration::Single(schema_type.into())),
            ..Default::default()
        }
    }

    /// Deserialise a schema from a JSON document fragment
    #[cfg(feature = "serde")]
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Set nullable
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Add format
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Restrict to the given values
    pub fn enum_values(mut self, values: Vec<Value>) -> Self {
        self.enum_values = Some(values);
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Inclusive numeric bounds
    pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.minimum = min;
        self.maximum = max;
        self
    }

    pub fn multiple_of(mut self, multiple: f64) -> Self {
        self.multiple_of = Some(multiple);
        self
    }

    pub fn items(mut self, items: Schema) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    pub fn count(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_items = min;
        self.max_items = max;
        self
    }

    pub fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = unique;
        self
    }

    /// Add a property, keeping declaration order
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn all_of(mut self, schemas: Vec<Schema>) -> Self {
        self.all_of = Some(schemas);
        self
    }

    pub fn any_of(mut self, schemas: Vec<Schema>) -> Self {
        self.any_of = Some(schemas);
        self
    }

    pub fn one_of(mut self, schemas: Vec<Schema>) -> Self {
        self.one_of = Some(schemas);
        self
    }

    pub fn not(mut self, schema: Schema) -> Self {
        self.not = Some(Box::new(schema));
        self
    }

    /// Tag property for `anyOf` / `oneOf` branches
    pub fn discriminator(mut self, property_name: impl Into<String>) -> Self {
        self.discriminator = Some(DiscriminatorObject {
            property_name: property_name.into(),
        });
        self
    }

    /// Effective lower bound and whether it is exclusive
    ///
    /// A 3.1 numeric `exclusiveMinimum` takes precedence over `minimum`.
    pub fn lower_bound(&self) -> Option<(f64, bool)> {
        match self.exclusive_minimum {
            Some(ExclusiveBound::Limit(limit)) => Some((limit, true)),
            Some(ExclusiveBound::Flag(exclusive)) => self.minimum.map(|min| (min, exclusive)),
            None => self.minimum.map(|min| (min, false)),
        }
    }

    /// Effective upper bound and whether it is exclusive
    pub fn upper_bound(&self) -> Option<(f64, bool)> {
        match self.exclusive_maximum {
            Some(ExclusiveBound::Limit(limit)) => Some((limit, true)),
            Some(ExclusiveBound::Flag(exclusive)) => self.maximum.map(|max| (max, exclusive)),
            None => self.maximum.map(|max| (max, false)),
        }
    }

    /// The single string an `enum` pins this schema to, if any
    pub fn constant_string(&self) -> Option<&str> {
        match self.enum_values.as_deref() {
            Some([Value::String(s)]) => Some(s.as_str()),
            _ => None,
        }
    }
}
