use super::interface::{Resource, ResourceId};

/// A single filter value rendered into one query pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl Scalar {
    /// Truthiness as the backend's repeated-key filters expect it: empty
    /// strings, zero, `false` and null are all falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Str(s) => !s.is_empty(),
            Scalar::Int(i) => *i != 0,
            Scalar::Bool(b) => *b,
            Scalar::Null => false,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Scalar::Str(s) => s.clone(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Null => "null".to_string(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    One(Scalar),
    Many(Vec<Scalar>),
    Ref(ResourceId),
}

impl FilterValue {
    /// Collapse a resource reference to its id. An unsaved resource has no id
    /// to collapse to and degenerates to its JSON rendition as a plain string
    /// rather than failing the whole filter.
    pub fn reference<T: Resource>(resource: &T) -> Self {
        match resource.id() {
            Some(id) => FilterValue::Ref(id),
            None => {
                let repr = serde_json::to_string(resource).unwrap_or_else(|_| "null".to_string());
                FilterValue::One(Scalar::Str(repr))
            }
        }
    }
}

/// An insertion-ordered filter mapping for collection listings.
///
/// Keys render into query pairs in the order they were pushed; multi-value
/// entries keep their element order. An optional key pushed as `None` is
/// omitted entirely, which is distinct from pushing `Scalar::Null` (that
/// renders as the literal string `null`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    entries: Vec<(String, FilterValue)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(mut self, key: &str, value: impl Into<Scalar>) -> Self {
        self.entries
            .push((key.to_string(), FilterValue::One(value.into())));
        self
    }

    pub fn push_opt(self, key: &str, value: Option<impl Into<Scalar>>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    pub fn push_many(
        mut self,
        key: &str,
        values: impl IntoIterator<Item = impl Into<Scalar>>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.entries
            .push((key.to_string(), FilterValue::Many(values)));
        self
    }

    pub fn push_ref<T: Resource>(mut self, key: &str, resource: &T) -> Self {
        self.entries
            .push((key.to_string(), FilterValue::reference(resource)));
        self
    }

    /// Filter by a raw id, without the resource in hand.
    pub fn push_id(mut self, key: &str, id: ResourceId) -> Self {
        self.entries.push((key.to_string(), FilterValue::Ref(id)));
        self
    }

    /// Render the filter into ordered query pairs.
    ///
    /// Multi-value entries contribute one pair per truthy element; falsy
    /// elements are silently skipped. References contribute the id in
    /// decimal. Single scalars always contribute a pair, including `Null`,
    /// which renders as `"null"`. The asymmetry between the multi-value and
    /// single-value treatment of falsy values is part of the contract.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            match value {
                FilterValue::Many(items) => {
                    for item in items {
                        if item.is_truthy() {
                            pairs.push((key.clone(), item.render()));
                        }
                    }
                }
                FilterValue::Ref(id) => pairs.push((key.clone(), id.to_string())),
                FilterValue::One(scalar) => pairs.push((key.clone(), scalar.render())),
            }
        }
        pairs
    }
}
