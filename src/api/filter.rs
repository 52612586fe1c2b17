//! Filters for the material list endpoint.

use crate::domain::MaterialType;

/// Optional filters for `GET /api/library/materials`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialFilter {
    pub subject: Option<String>,
    pub level: Option<String>,
    pub material_type: Option<MaterialType>,
    /// Case-insensitive title substring
    pub search: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl MaterialFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn material_type(mut self, material_type: MaterialType) -> Self {
        self.material_type = Some(material_type);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set query parameters in wire order. Empty strings count as unset.
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("subject", self.subject.as_deref()),
            ("level", self.level.as_deref()),
            ("material_type", self.material_type.as_ref().map(MaterialType::as_str)),
            ("search", self.search.as_deref()),
        ];

        let mut pairs: Vec<(&'static str, String)> = text
            .into_iter()
            .filter_map(|(key, value)| match value {
                Some(v) if !v.is_empty() => Some((key, v.to_string())),
                _ => None,
            })
            .collect();

        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }

        pairs
    }

    /// `key=value` pairs joined with `&`, values percent-encoded
    pub fn query_string(&self) -> String {
        self.pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}
