use crate::error::SimilarityError;

/// A normalized closeness score between two texts, in `[0, 1]`.
///
/// Scores are compared against the responder threshold at full `f64`
/// precision. Implementations are expected to be deterministic for fixed
/// inputs. Any
/// `Fn(&str, &str) -> f64` closure is an infallible capability.
pub trait Similarity {
    fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError>;

    /// Scores `query` against every candidate, in candidate order.
    ///
    /// Backends that can amortize work across candidates should override this.
    fn similarities(&self, query: &str, candidates: &[&str]) -> Result<Vec<f64>, SimilarityError> {
        candidates
            .iter()
            .map(|candidate| self.similarity(query, candidate))
            .collect()
    }
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64,
{
    fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError> {
        Ok(self(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recording {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl Similarity for Recording {
        fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError> {
            self.calls.borrow_mut().push((a.to_string(), b.to_string()));
            Ok(0.5)
        }
    }

    #[test]
    fn test_closure_is_a_capability() {
        let exact = |a: &str, b: &str| -> f64 { if a == b { 1.0 } else { 0.0 } };
        assert_eq!(exact.similarity("oi", "oi"), Ok(1.0));
        assert_eq!(exact.similarity("oi", "olá"), Ok(0.0));
    }

    #[test]
    fn test_default_batch_scores_in_candidate_order() {
        let backend = Recording {
            calls: RefCell::new(Vec::new()),
        };
        let scores = backend.similarities("q", &["x", "y", "z"]).unwrap();

        assert_eq!(scores, vec![0.5, 0.5, 0.5]);
        let seen: Vec<String> = backend.calls.borrow().iter().map(|(_, b)| b.clone()).collect();
        assert_eq!(seen, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_default_batch_stops_on_first_error() {
        struct Broken;
        impl Similarity for Broken {
            fn similarity(&self, _: &str, _: &str) -> Result<f64, SimilarityError> {
                Err(SimilarityError::new("model not loaded"))
            }
        }

        let err = Broken.similarities("q", &["x", "y"]).unwrap_err();
        assert_eq!(err.message, "model not loaded");
    }
}
