//! Listing filters parsed from request parameters.

/// Sentinel parameter value meaning "no restriction".
pub const ALL: &str = "all";

/// A filter that is either unrestricted or pinned to one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Parse a request parameter. Missing, empty, and `"all"` are unrestricted;
    /// anything else is kept verbatim (values are case-sensitive).
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None => Facet::All,
            Some(v) if v.is_empty() || v == ALL => Facet::All,
            Some(v) => Facet::Only(v.to_string()),
        }
    }

    /// Value to serialize into a link, or `None` when it equals the default.
    pub fn as_param(&self) -> Option<&str> {
        match self {
            Facet::All => None,
            Facet::Only(v) => Some(v),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// Exact, case-sensitive comparison.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(v) => v == value,
        }
    }
}

/// Active listing filters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub lang: Facet,
    pub category: Facet,
    /// Free-text query, already trimmed. Empty means no text filter.
    pub query: String,
}

impl FilterState {
    /// Build from raw `lang`, `category`, and `q` parameters.
    pub fn from_params(lang: Option<&str>, category: Option<&str>, q: Option<&str>) -> Self {
        Self {
            lang: Facet::from_param(lang),
            category: Facet::from_param(category),
            query: q.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    /// Lowercased query to match against, or `None` when there is no text filter.
    pub fn needle(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.to_lowercase())
        }
    }

    /// Whether any filter narrows the listing.
    pub fn is_active(&self) -> bool {
        !self.lang.is_all() || !self.category.is_all() || !self.query.is_empty()
    }

    pub fn with_lang(&self, lang: Facet) -> Self {
        Self {
            lang,
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Facet) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            ..self.clone()
        }
    }

    /// Query string carrying every non-default filter, in `lang`, `category`,
    /// `q` order. Empty when nothing is active, otherwise starts with `?`.
    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(lang) = self.lang.as_param() {
            parts.push(format!("lang={}", urlencoding::encode(lang)));
        }
        if let Some(category) = self.category.as_param() {
            parts.push(format!("category={}", urlencoding::encode(category)));
        }
        if !self.query.is_empty() {
            parts.push(format!("q={}", urlencoding::encode(&self.query)));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }

    /// Link to `base` carrying these filters.
    pub fn href(&self, base: &str) -> String {
        format!("{}{}", base, self.query_string())
    }
}
