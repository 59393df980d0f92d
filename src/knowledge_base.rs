use crate::error::KnowledgeBaseError;
use rustc_hash::FxHashSet;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

const DEFAULT_TABLE: &[(&str, &str)] = &[
    ("Oi", "Olá."),
    ("Olá", "Olá. Tudo bem?"),
    ("Qual é o seu nome?", "Meu nome é Chatbot."),
    ("Como você se chama?", "Meu nome é Chatbot."),
    ("Como você está?", "Estou bem, obrigado por perguntar!"),
    ("Qual é a capital do Brasil?", "A capital do Brasil é Brasília."),
    ("Qual a sua idade?", "Sou um programa de computador, não tenho idade."),
    (
        "O que você pode fazer?",
        "Posso responder a perguntas e fornecer informações gerais.",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
}

/// Ordered question/answer table. Questions are unique and the table is
/// never modified after construction.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn from_pairs<I, Q, A>(pairs: I) -> Result<Self, KnowledgeBaseError>
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<String>,
        A: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let mut entries = Vec::new();

        for (question, answer) in pairs {
            let question = question.into();
            if !seen.insert(question.clone()) {
                return Err(KnowledgeBaseError::DuplicateQuestion(question));
            }
            entries.push(KnowledgeEntry {
                question,
                answer: answer.into(),
            });
        }

        Ok(KnowledgeBase { entries })
    }

    /// The built-in Portuguese small-talk table.
    pub fn builtin() -> Self {
        let entries = DEFAULT_TABLE
            .iter()
            .map(|(question, answer)| KnowledgeEntry {
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect();
        KnowledgeBase { entries }
    }

    /// Parses a JSON object of `"question": "answer"` members, keeping
    /// document order.
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeBaseError> {
        let raw: RawTable = serde_json::from_str(json).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => KnowledgeBaseError::InvalidInput(e.to_string()),
            _ => KnowledgeBaseError::Json(e),
        })?;

        let mut pairs = Vec::with_capacity(raw.0.len());
        for (question, value) in raw.0 {
            match value {
                Value::String(answer) => pairs.push((question, answer)),
                other => {
                    return Err(KnowledgeBaseError::InvalidInput(format!(
                        "answer for {question:?} is not text: {other}"
                    )));
                }
            }
        }

        Self::from_pairs(pairs)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn questions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.question.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Members in document order, duplicates included, so they can be rejected
// instead of silently overwritten.
struct RawTable(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = RawTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping questions to answers")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<RawTable, M::Error> {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    members.push((key, value));
                }
                Ok(RawTable(members))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
