use crate::error::ParseTraversalModeError;
use std::fmt;
use std::str::FromStr;

/// How `owl:equivalentClass` links take part in a closure.
///
/// `rdfs:subClassOf` edges are followed in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalMode {
    /// Only `rdfs:subClassOf` edges are followed.
    SubclassesOnly,
    /// Equivalent classes are followed and counted as descendants as soon as they are discovered.
    #[default]
    IncludeEquivalents,
    /// Equivalent classes are followed so that their own subclasses are explored,
    /// but they are only counted when they are expanded.
    TraverseEquivalents,
}

impl TraversalMode {
    /// The short name of the mode, as accepted by [`FromStr`].
    ///
    /// ```
    /// use oxclosure::TraversalMode;
    ///
    /// assert_eq!(TraversalMode::TraverseEquivalents.as_str(), "traverse");
    /// assert_eq!("include".parse::<TraversalMode>()?, TraversalMode::IncludeEquivalents);
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubclassesOnly => "subclasses",
            Self::IncludeEquivalents => "include",
            Self::TraverseEquivalents => "traverse",
        }
    }

    /// Whether `owl:equivalentClass` links are followed in both directions.
    #[inline]
    pub const fn follows_equivalents(self) -> bool {
        matches!(self, Self::IncludeEquivalents | Self::TraverseEquivalents)
    }

    /// Whether equivalent classes enter the result when discovered instead of when expanded.
    #[inline]
    pub const fn counts_equivalents_on_discovery(self) -> bool {
        matches!(self, Self::IncludeEquivalents)
    }
}

impl FromStr for TraversalMode {
    type Err = ParseTraversalModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "subclasses" | "subclasses-only" | "default" => Ok(Self::SubclassesOnly),
            "include" | "include-equivalents" => Ok(Self::IncludeEquivalents),
            "traverse" | "traverse-equivalents" => Ok(Self::TraverseEquivalents),
            _ => Err(ParseTraversalModeError {
                value: value.into(),
            }),
        }
    }
}

impl fmt::Display for TraversalMode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of a closure computation.
///
/// The defaults follow equivalent classes ([`TraversalMode::IncludeEquivalents`]),
/// drop every node that is not an IRI and count the start class as its own descendant.
///
/// ```
/// use oxclosure::{ClosureOptions, TraversalMode};
///
/// let options = ClosureOptions::default()
///     .with_mode(TraversalMode::SubclassesOnly)
///     .without_start();
/// assert!(options.only_uris);
/// assert!(!options.include_start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosureOptions {
    /// How equivalent classes are handled.
    pub mode: TraversalMode,
    /// Discards every candidate node that is not a proper resource identifier before it is visited.
    pub only_uris: bool,
    /// Adds the start node to the result.
    pub include_start: bool,
}

impl ClosureOptions {
    /// Sets the [`TraversalMode`].
    #[inline]
    #[must_use]
    pub fn with_mode(mut self, mode: TraversalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Keeps literals, blank nodes and any other non IRI node found along the way.
    #[inline]
    #[must_use]
    pub fn with_all_terms(mut self) -> Self {
        self.only_uris = false;
        self
    }

    /// Does not count the start node as one of its own descendants.
    #[inline]
    #[must_use]
    pub fn without_start(mut self) -> Self {
        self.include_start = false;
        self
    }
}

impl Default for ClosureOptions {
    #[inline]
    fn default() -> Self {
        Self {
            mode: TraversalMode::default(),
            only_uris: true,
            include_start: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modes() {
        for mode in [
            TraversalMode::SubclassesOnly,
            TraversalMode::IncludeEquivalents,
            TraversalMode::TraverseEquivalents,
        ] {
            assert_eq!(mode.to_string().parse::<TraversalMode>().ok(), Some(mode));
        }
        assert_eq!(
            "traverse-equivalents".parse::<TraversalMode>().ok(),
            Some(TraversalMode::TraverseEquivalents)
        );
        assert_eq!(
            "default".parse::<TraversalMode>().ok(),
            Some(TraversalMode::SubclassesOnly)
        );
    }

    #[test]
    fn parse_unknown_mode() {
        let Err(error) = "transitive".parse::<TraversalMode>() else {
            panic!("'transitive' is not a traversal mode")
        };
        assert_eq!(error.value(), "transitive");
        assert!(error.to_string().contains("'transitive'"));
    }

    #[test]
    fn mode_rules() {
        assert!(!TraversalMode::SubclassesOnly.follows_equivalents());
        assert!(TraversalMode::IncludeEquivalents.follows_equivalents());
        assert!(TraversalMode::TraverseEquivalents.follows_equivalents());
        assert!(TraversalMode::IncludeEquivalents.counts_equivalents_on_discovery());
        assert!(!TraversalMode::TraverseEquivalents.counts_equivalents_on_discovery());
    }
}
