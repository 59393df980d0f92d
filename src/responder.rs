use crate::config::ResponderConfig;
use crate::error::{ResponderError, SimilarityError};
use crate::knowledge_base::KnowledgeBase;
use crate::similarity::Similarity;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub answer: String,
    pub score: f64,
    /// Index of the winning knowledge-base entry; `None` for the fallback.
    pub entry: Option<usize>,
}

impl MatchResult {
    pub fn is_fallback(&self) -> bool {
        self.entry.is_none()
    }
}

/// Answers a query with the knowledge-base entry whose question is most
/// similar to it.
///
/// The scan starts from `threshold` as the best score and only a strictly
/// greater score replaces the running best, so a score equal to the
/// threshold falls back and ties keep the earliest entry.
pub struct Responder<S> {
    knowledge_base: KnowledgeBase,
    similarity: S,
    config: ResponderConfig,
}

impl<S: Similarity> Responder<S> {
    pub fn new(knowledge_base: KnowledgeBase, similarity: S) -> Self {
        Responder {
            knowledge_base,
            similarity,
            config: ResponderConfig::default(),
        }
    }

    pub fn with_config(
        knowledge_base: KnowledgeBase,
        similarity: S,
        config: ResponderConfig,
    ) -> Result<Self, ResponderError> {
        config.validate()?;
        Ok(Responder {
            knowledge_base,
            similarity,
            config,
        })
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Like [`Responder::answer`] for raw input that has not been decoded yet.
    pub fn answer_utf8(&self, query: &[u8]) -> Result<String, ResponderError> {
        let query = std::str::from_utf8(query)
            .map_err(|e| ResponderError::InvalidInput(format!("query is not UTF-8 text: {e}")))?;
        self.answer(query)
    }

    pub fn answer(&self, query: &str) -> Result<String, ResponderError> {
        self.best_match(query).map(|m| m.answer)
    }

    pub fn best_match(&self, query: &str) -> Result<MatchResult, ResponderError> {
        let fallback = MatchResult {
            answer: self.config.fallback.clone(),
            score: self.config.threshold,
            entry: None,
        };
        if self.knowledge_base.is_empty() {
            return Ok(fallback);
        }

        let questions = self.knowledge_base.questions();
        let scores = self.similarity.similarities(query, &questions)?;
        if scores.len() != questions.len() {
            return Err(SimilarityError::new(format!(
                "expected {} scores, got {}",
                questions.len(),
                scores.len()
            ))
            .into());
        }

        let mut best_score = self.config.threshold;
        let mut best_entry = None;
        for (i, &score) in scores.iter().enumerate() {
            if !(0.0..=1.0).contains(&score) {
                warn!(score, question = questions[i], "similarity score outside [0, 1]");
            }
            if score > best_score {
                best_score = score;
                best_entry = Some(i);
            }
        }

        debug!(query, best_score, entry = ?best_entry, "scored knowledge base");

        Ok(match best_entry {
            Some(i) => MatchResult {
                answer: self.knowledge_base.entries()[i].answer.clone(),
                score: best_score,
                entry: Some(i),
            },
            None => fallback,
        })
    }
}
