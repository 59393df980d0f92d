use crate::error::SimilarityError;
use crate::similarity::Similarity;
use lazy_static::lazy_static;
use ndarray::Array1;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref STOP_WORDS: FxHashSet<&'static str> = {
        let words = vec![
            "a", "o", "as", "os", "de", "do", "da", "dos", "das", "que", "e", "em", "no",
            "na", "nos", "nas", "para", "com", "um", "uma", "por", "se", "ao", "mais",
            "mas", "também", "então", "assim",
        ];
        words.into_iter().collect()
    };
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// TF-IDF bag-of-words similarity fitted on a fixed corpus.
///
/// Terms outside the corpus vocabulary carry no weight, so the scores are
/// only meaningful against the corpus the backend was fitted on.
pub struct LexicalSimilarity {
    vocabulary: FxHashMap<String, usize>,
    idf_values: Array1<f64>,
}

impl LexicalSimilarity {
    pub fn fit<'a>(corpus: impl IntoIterator<Item = &'a str>) -> Self {
        let documents: Vec<Vec<String>> = corpus.into_iter().map(tokenize).collect();

        // Vocabulary in first-seen order and document frequencies
        let mut vocabulary = FxHashMap::default();
        let mut doc_freq: Vec<f64> = Vec::new();
        for tokens in &documents {
            let unique: FxHashSet<&String> = tokens.iter().collect();
            for token in tokens {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.clone(), doc_freq.len());
                    doc_freq.push(0.0);
                }
            }
            for token in unique {
                doc_freq[vocabulary[token]] += 1.0;
            }
        }

        let doc_count = documents.len() as f64;
        let idf_values = doc_freq
            .into_iter()
            .map(|df| (1.0 + doc_count / (1.0 + df)).ln())
            .collect();

        LexicalSimilarity {
            vocabulary,
            idf_values,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    fn calculate_tfidf(&self, text: &str) -> Array1<f64> {
        let tokens = tokenize(text);
        let mut tfidf = Array1::<f64>::zeros(self.vocabulary.len());
        if tokens.is_empty() {
            return tfidf;
        }

        let tokens_count = tokens.len() as f64;
        for token in &tokens {
            if let Some(&i) = self.vocabulary.get(token) {
                tfidf[i] += 1.0 / tokens_count;
            }
        }

        tfidf * &self.idf_values
    }
}

impl Similarity for LexicalSimilarity {
    fn similarity(&self, a: &str, b: &str) -> Result<f64, SimilarityError> {
        Ok(cosine_similarity(
            &self.calculate_tfidf(a),
            &self.calculate_tfidf(b),
        ))
    }

    fn similarities(&self, query: &str, candidates: &[&str]) -> Result<Vec<f64>, SimilarityError> {
        let query_embedding = self.calculate_tfidf(query);
        Ok(candidates
            .iter()
            .map(|candidate| cosine_similarity(&query_embedding, &self.calculate_tfidf(candidate)))
            .collect())
    }
}

fn tokenize(text: &str) -> Vec<String> {
    // Normalize text
    let text = text.nfc().collect::<String>().to_lowercase();

    // Remove special characters and split into tokens
    let text = PUNCTUATION.replace_all(&text, " ");

    text.split_whitespace()
        .filter(|&token| !STOP_WORDS.contains(token))
        .map(|token| token.to_string())
        .collect()
}

fn cosine_similarity(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let dot_product = a.dot(b);
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}
