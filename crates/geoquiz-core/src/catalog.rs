//! The question catalog: country name → ordered question set.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::model::{Country, Question};

/// Immutable mapping from country name to its questions.
///
/// Keys are matched exactly and case-sensitively against the names the
/// reverse geocoder reports. A country with no entry and a country with an
/// empty entry look the same to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCatalog {
    entries: BTreeMap<String, Vec<Question>>,
}

impl QuizCatalog {
    pub fn new(entries: BTreeMap<String, Vec<Question>>) -> Self {
        Self { entries }
    }

    /// The catalog shipped with geoquiz, built once per process.
    pub fn builtin() -> &'static QuizCatalog {
        static BUILTIN: OnceLock<QuizCatalog> = OnceLock::new();
        BUILTIN.get_or_init(builtin_entries)
    }

    /// Questions for `country`, or an empty slice when there are none.
    pub fn lookup(&self, country: &Country) -> &[Question] {
        country.name().map(|n| self.lookup_name(n)).unwrap_or(&[])
    }

    /// Questions for a raw country name.
    pub fn lookup_name(&self, name: &str) -> &[Question] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Country names in sorted order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Question])> {
        self.entries
            .iter()
            .map(|(name, questions)| (name.as_str(), questions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn builtin_entries() -> QuizCatalog {
    let mut entries = BTreeMap::new();

    entries.insert(
        "France".to_string(),
        vec![
            Question::new("Qual é a capital da França?", "Paris"),
            Question::new("Quantos departamentos a França tem?", "101"),
            Question::new("Qual é o famoso monumento em Paris?", "Torre Eiffel"),
        ],
    );
    entries.insert(
        "Japan".to_string(),
        vec![
            Question::new("Qual é a capital do Japão?", "Tóquio"),
            Question::new("Qual é a moeda do Japão?", "Iene"),
            Question::new("Qual é o símbolo nacional do Japão?", "Crisântemo"),
        ],
    );
    entries.insert(
        "India".to_string(),
        vec![
            Question::new("Qual é a capital da Índia?", "Nova Délhi"),
            Question::new("Quantos estados a Índia tem?", "28"),
            Question::new("Qual é a língua mais falada na Índia?", "Hindi"),
        ],
    );

    QuizCatalog::new(entries)
}
