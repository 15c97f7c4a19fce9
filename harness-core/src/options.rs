//! Caller-supplied query options.

use crate::query::{Query, QueryValue};

/// Optional parameters layered over an operation's defaults.
///
/// The typed fields cover the options the harness sets most often; anything
/// else goes into [`QueryOptions::extra`] and is passed through verbatim.
///
/// # Examples
///
/// ```
/// use harness_core::QueryOptions;
///
/// let options = QueryOptions::default()
///     .with_steps(false)
///     .with_param("continue_straight", "true");
/// let overrides = options.to_overrides();
/// assert_eq!(overrides.keys().collect::<Vec<_>>(), ["steps", "continue_straight"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Response format, e.g. `json` or `flatbuffers`.
    pub output: Option<String>,
    /// Whether to return route steps.
    pub steps: Option<bool>,
    /// Whether to search for alternative routes.
    pub alternatives: Option<bool>,
    /// Overview geometry detail: `simplified`, `full` or `false`.
    pub overview: Option<String>,
    /// Geometry encoding: `polyline`, `polyline6` or `geojson`.
    pub geometries: Option<String>,
    /// Annotation selection, e.g. `true` or `duration,nodes`.
    pub annotations: Option<String>,
    /// `;`-separated snapping radii.
    pub radiuses: Option<String>,
    /// `;`-separated waypoint hints.
    pub hints: Option<String>,
    /// Any other parameter, in insertion order.
    pub extra: Query,
}

impl QueryOptions {
    /// Set `output`.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set `steps`.
    #[must_use]
    pub const fn with_steps(mut self, steps: bool) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set `alternatives`.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = Some(alternatives);
        self
    }

    /// Set `overview`.
    #[must_use]
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    /// Set `geometries`.
    #[must_use]
    pub fn with_geometries(mut self, geometries: impl Into<String>) -> Self {
        self.geometries = Some(geometries.into());
        self
    }

    /// Set `annotations`.
    #[must_use]
    pub fn with_annotations(mut self, annotations: impl Into<String>) -> Self {
        self.annotations = Some(annotations.into());
        self
    }

    /// Set `radiuses`.
    #[must_use]
    pub fn with_radiuses(mut self, radiuses: impl Into<String>) -> Self {
        self.radiuses = Some(radiuses.into());
        self
    }

    /// Set `hints`.
    #[must_use]
    pub fn with_hints(mut self, hints: impl Into<String>) -> Self {
        self.hints = Some(hints.into());
        self
    }

    /// Add an arbitrary parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// Flatten into the override set fed to
    /// [`overwrite_params`](crate::overwrite_params).
    ///
    /// Typed fields that are set come first, followed by the extras.
    #[must_use]
    pub fn to_overrides(&self) -> Query {
        let typed = [
            ("output", self.output.clone()),
            ("steps", self.steps.map(|flag| flag.to_string())),
            ("alternatives", self.alternatives.map(|flag| flag.to_string())),
            ("overview", self.overview.clone()),
            ("geometries", self.geometries.clone()),
            ("annotations", self.annotations.clone()),
            ("radiuses", self.radiuses.clone()),
            ("hints", self.hints.clone()),
        ];
        let mut overrides: Query = typed
            .into_iter()
            .filter_map(|(key, value)| value.map(|set| (key, set)))
            .collect();
        for (key, value) in self.extra.iter() {
            overrides.insert(key, value.clone());
        }
        overrides
    }
}
