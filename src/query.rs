use std::fmt;

/// Sort direction for [`Query::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Query-string parameters forwarded unchanged to the API.
///
/// Pairs keep their insertion order on the wire.
///
/// ```
/// use sevima::{Order, Query};
///
/// let query = Query::new()
///     .page(1)
///     .per_page(20)
///     .filter_op("nilai_angka", "gt", 3)
///     .filter("program_studi", "Ilmu Hukum")
///     .order("nim", Order::Asc);
/// assert_eq!(query.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary `key=value` pair.
    pub fn param(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    pub fn per_page(self, per_page: u32) -> Self {
        self.param("per_page", per_page)
    }

    /// `filter[field]=value`
    pub fn filter(self, field: &str, value: impl fmt::Display) -> Self {
        self.param(format!("filter[{field}]"), value)
    }

    /// `filter[field][op]=value`, e.g. `op = "gt"`.
    pub fn filter_op(self, field: &str, op: &str, value: impl fmt::Display) -> Self {
        self.param(format!("filter[{field}][{op}]"), value)
    }

    /// `order[field]=asc|desc`
    pub fn order(self, field: &str, order: Order) -> Self {
        self.param(format!("order[{field}]"), order)
    }

    /// Appends every pair of `other` after the existing ones.
    pub fn merge(mut self, other: Query) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Query::new(), |query, (k, v)| query.param(k, v))
    }
}

impl<K, V> Extend<(K, V)> for Query
where
    K: Into<String>,
    V: fmt::Display,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.pairs
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.to_string())));
    }
}
