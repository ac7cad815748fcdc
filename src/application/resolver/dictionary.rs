use dashmap::DashMap;

// Grouped by concept, languages in es/de/fr/it/nl order. Homographs such as
// "casa" and "auto" appear once per language and collapse on insert.
const SEED: &[(&str, &str)] = &[
    ("flor", "flower"),
    ("blume", "flower"),
    ("fleur", "flower"),
    ("fiore", "flower"),
    ("bloem", "flower"),
    ("casa", "house"),
    ("haus", "house"),
    ("maison", "house"),
    ("casa", "house"),
    ("huis", "house"),
    ("agua", "water"),
    ("wasser", "water"),
    ("eau", "water"),
    ("acqua", "water"),
    ("water", "water"),
    ("perro", "dog"),
    ("hund", "dog"),
    ("chien", "dog"),
    ("cane", "dog"),
    ("hond", "dog"),
    ("gato", "cat"),
    ("katze", "cat"),
    ("chat", "cat"),
    ("gatto", "cat"),
    ("kat", "cat"),
    ("libro", "book"),
    ("buch", "book"),
    ("livre", "book"),
    ("libro", "book"),
    ("boek", "book"),
    ("coche", "car"),
    ("auto", "car"),
    ("voiture", "car"),
    ("macchina", "car"),
    ("auto", "car"),
    ("mesa", "table"),
    ("tisch", "table"),
    ("table", "table"),
    ("tavolo", "table"),
    ("tafel", "table"),
];

/// Known foreign word to English mappings. Keys and values are stored
/// normalized; later inserts for the same key win.
#[derive(Debug, Default)]
pub struct StaticDictionary {
    entries: DashMap<String, String>,
}

impl StaticDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let dict = Self::new();
        for (foreign, english) in SEED {
            dict.insert(foreign, english);
        }
        dict
    }

    pub fn insert(&self, foreign: &str, english: &str) {
        self.entries.insert(foreign.to_string(), english.to_string());
    }

    pub fn get(&self, word: &str) -> Option<String> {
        self.entries.get(word).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StaticDictionary {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let dict = Self::new();
        for (foreign, english) in iter {
            dict.insert(foreign, english);
        }
        dict
    }
}
