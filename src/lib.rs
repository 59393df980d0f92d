//! Best-match question answering: pick the knowledge-base answer whose
//! question is most similar to the user's query, or fall back when nothing
//! clears the similarity threshold.

pub mod chat;
pub mod config;
pub mod countries;
pub mod datagen;
pub mod error;
pub mod knowledge_base;
pub mod lexical;
pub mod responder;
pub mod similarity;

pub use config::{ChatConfig, ResponderConfig};
pub use error::{ConfigError, KnowledgeBaseError, ResponderError, SimilarityError};
pub use knowledge_base::{KnowledgeBase, KnowledgeEntry};
pub use lexical::LexicalSimilarity;
pub use responder::{MatchResult, Responder};
pub use similarity::Similarity;
