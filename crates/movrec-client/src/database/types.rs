//! Database microservice response types.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::Deserialize;

/// Movie title and feature vector as returned by the database microservice.
///
/// Identity is the title alone: two movies are equal iff their `id` fields
/// are byte-equal, and hashing follows equality. Ordering compares titles
/// case-insensitively, with the exact title as a tie-break so that the
/// ordering stays consistent with equality.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    /// The movie title. Never empty per the service contract.
    pub id: String,
    /// The encoding of the movie properties. All vectors in one response
    /// have the same length; the service guarantees this, not the client.
    pub vector: Vec<f64>,
}

impl Movie {
    /// Creates a new `Movie`.
    #[must_use]
    pub fn new(id: impl Into<String>, vector: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            vector,
        }
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .to_lowercase()
            .cmp(&other.id.to_lowercase())
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Title-to-feature-vector map, the bulk-transfer alternative to a
/// `Vec<Movie>` for the same underlying data.
pub type TitleVectors = HashMap<String, Vec<f64>>;

/// Result of one completed HTTP exchange with the database microservice.
///
/// Transport faults that prevent the exchange from completing at all are
/// not an `Outcome`; they surface as errors from the API trait methods.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 2xx response with a decoded payload.
    Success(T),
    /// Completed exchange with a non-success status.
    Failure {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body text, kept for diagnostics.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equality_is_by_id_only() {
        // Arrange
        let a = Movie::new("Alien", vec![0.1, 0.2]);
        let b = Movie::new("Alien", vec![0.9, 0.9]);
        let c = Movie::new("alien", vec![0.1, 0.2]);

        // Assert: vector is ignored, case is not
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ordering_ignores_case() {
        // Arrange
        let mut movies = vec![
            Movie::new("zorro", vec![0.3]),
            Movie::new("Bambi", vec![0.2]),
            Movie::new("alien", vec![0.1]),
        ];

        // Act
        movies.sort();

        // Assert: "alien" sorts before "Bambi" despite ASCII order
        let ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["alien", "Bambi", "zorro"]);
    }

    #[test]
    fn test_ordering_breaks_case_ties_consistently_with_eq() {
        // Arrange
        let upper = Movie::new("Alien", vec![]);
        let lower = Movie::new("alien", vec![]);

        // Assert: equal ignoring case, but cmp must not report Equal
        assert_ne!(upper, lower);
        assert_ne!(upper.cmp(&lower), Ordering::Equal);
        assert_eq!(upper.cmp(&upper.clone()), Ordering::Equal);
    }

    #[test]
    fn test_hash_follows_equality() {
        // Arrange
        let mut set = HashSet::new();
        set.insert(Movie::new("Alien", vec![0.1, 0.2]));

        // Act: same id, different vector
        let inserted = set.insert(Movie::new("Alien", vec![0.3, 0.4]));

        // Assert
        assert!(!inserted);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_movie_deserializes_from_wire_shape() {
        // Arrange
        let json = r#"{"id":"Alien","vector":[0.1,0.2]}"#;

        // Act
        let movie: Movie = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.id, "Alien");
        assert_eq!(movie.vector, vec![0.1, 0.2]);
    }

    #[test]
    fn test_null_list_is_a_decode_error() {
        // Arrange & Act: a null payload where a collection is expected
        let result: Result<Vec<Movie>, _> = serde_json::from_str("null");

        // Assert
        assert!(result.is_err());
    }
}
