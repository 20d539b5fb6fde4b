use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// Word lists bundled into the binary
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    English,
    Code,
}

impl SupportedLanguage {
    fn file_name(&self) -> String {
        format!("{}.json", self.to_string().to_lowercase())
    }
}

/// On-disk layout of a JSON word list, before validation.
#[derive(Deserialize)]
struct RawVocabulary {
    name: String,
    words: Vec<String>,
}

/// A non-empty list of words to draw a test from.
#[derive(Deserialize, Clone, Debug)]
#[serde(try_from = "RawVocabulary")]
pub struct Vocabulary {
    pub name: String,
    pub size: u32,
    words: Vec<String>,
}

impl TryFrom<RawVocabulary> for Vocabulary {
    type Error = io::Error;

    fn try_from(raw: RawVocabulary) -> Result<Self, Self::Error> {
        if raw.words.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("vocabulary {} has no words", raw.name),
            ));
        }

        // the stored size is recomputed, never trusted
        Ok(Self {
            name: raw.name,
            size: raw.words.len() as u32,
            words: raw.words,
        })
    }
}

impl Vocabulary {
    /// Load one of the embedded word lists.
    pub fn builtin(language: SupportedLanguage) -> Result<Self, Box<dyn Error>> {
        let file_name = language.file_name();
        let file = LANG_DIR.get_file(&file_name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("language file {file_name} not found"),
            )
        })?;

        let contents = file.contents_utf8().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("language file {file_name} is not utf-8"),
            )
        })?;

        Self::from_json(contents)
    }

    /// Load a word list from disk.
    ///
    /// `.json` files use the same `{name, size, words}` layout as the embedded
    /// lists; anything else is read as whitespace separated words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        debug!("loading vocabulary from {}", path.display());

        if path.extension().is_some_and(|ext| ext == "json") {
            return Self::from_json(&contents);
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        let words = contents.split_whitespace().map(str::to_owned).collect();

        Self::from_words(name, words)
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        Ok(from_str(json)?)
    }

    pub fn from_words(name: String, words: Vec<String>) -> Result<Self, Box<dyn Error>> {
        Ok(Self::try_from(RawVocabulary { name, words })?)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Uniform draw, with replacement.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_english() {
        let vocab = Vocabulary::builtin(SupportedLanguage::English).unwrap();

        assert_eq!(vocab.name, "english");
        assert!(!vocab.words().is_empty());
        assert_eq!(vocab.size as usize, vocab.words().len());
    }

    #[test]
    fn test_builtin_code() {
        let vocab = Vocabulary::builtin(SupportedLanguage::Code).unwrap();

        assert_eq!(vocab.name, "code");
        assert!(vocab.contains("struct"));
    }

    #[test]
    fn test_supported_language_display() {
        assert_eq!(SupportedLanguage::English.to_string(), "English");
        assert_eq!(SupportedLanguage::Code.to_string(), "Code");
    }

    #[test]
    fn test_from_json() {
        let json_data = r#"
        {
            "name": "pets",
            "size": 2,
            "words": ["cat", "dog"]
        }
        "#;

        let vocab = Vocabulary::from_json(json_data).unwrap();

        assert_eq!(vocab.name, "pets");
        assert_eq!(vocab.words(), &["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_from_json_rejects_empty_list() {
        let json_data = r#"{ "name": "nothing", "size": 0, "words": [] }"#;

        assert!(Vocabulary::from_json(json_data).is_err());
    }

    #[test]
    fn test_deserialize_never_yields_an_empty_vocabulary() {
        let json_data = r#"{ "name": "nothing", "words": [] }"#;

        let err = serde_json::from_str::<Vocabulary>(json_data).unwrap_err();
        assert!(err.to_string().contains("has no words"));
    }

    #[test]
    fn test_declared_size_is_ignored() {
        let json_data = r#"{ "name": "pets", "size": 40, "words": ["cat", "dog"] }"#;

        let vocab: Vocabulary = serde_json::from_str(json_data).unwrap();
        assert_eq!(vocab.size, 2);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Vocabulary::from_json("not json").is_err());
    }

    #[test]
    fn test_from_plain_text_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha beta\ngamma\n\n  delta").unwrap();

        let vocab = Vocabulary::from_file(file.path()).unwrap();

        assert_eq!(vocab.size, 4);
        assert!(vocab.contains("gamma"));
        assert!(!vocab.contains(""));
    }

    #[test]
    fn test_from_empty_text_file() {
        let file = NamedTempFile::new().unwrap();

        assert!(Vocabulary::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_missing_file() {
        assert!(Vocabulary::from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn test_pick_stays_in_vocabulary() {
        let vocab = Vocabulary::from_words(
            "pets".to_string(),
            vec!["cat".to_string(), "dog".to_string()],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert!(vocab.contains(vocab.pick(&mut rng)));
        }
    }
}
