use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::DetectorConfig;

/// Languages with built-in stop words, negation markers and sentence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Look up a language from an ISO-like code. Returns None for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "es" | "spa" | "spanish" | "español" | "espanol" => Some(Self::Spanish),
            _ => None,
        }
    }

    /// Like [`Language::from_code`], but falls back to English with a warning.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            warn!(
                language = code,
                "Unrecognized language code, falling back to English resources"
            );
            Self::English
        })
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    pub fn stop_words(&self) -> &'static [&'static str] {
        match self {
            Self::English => ENGLISH_STOP_WORDS,
            Self::Spanish => SPANISH_STOP_WORDS,
        }
    }

    pub fn negation_markers(&self) -> &'static [&'static str] {
        match self {
            Self::English => &["no", "not", "never", "none", "nobody", "nothing", "neither", "nor"],
            Self::Spanish => &[
                "no", "nunca", "jamás", "ni", "tampoco", "nada", "nadie", "ninguno", "ninguna",
            ],
        }
    }

    /// Abbreviations whose trailing period does not end a sentence (lowercase).
    pub fn abbreviations(&self) -> &'static [&'static str] {
        match self {
            Self::English => &[
                "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "etc.", "i.e.",
                "e.g.", "inc.", "ltd.", "corp.", "co.", "no.", "nos.", "vol.", "approx.", "dept.", "a.m.",
                "p.m.", "u.s.",
            ],
            Self::Spanish => &[
                "sr.", "sra.", "srta.", "dr.", "dra.", "d.", "dña.", "ud.", "uds.", "lic.", "ing.",
                "prof.", "etc.", "pág.", "núm.", "aprox.", "av.", "avda.", "p.ej.", "a.m.", "p.m.",
                "ee.uu.",
            ],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Word tables for one detection run, built once and shared by reference
/// across the extractor, matcher and classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageResources {
    pub language: Language,
    pub stop_words: HashSet<String>,
    pub negation_markers: HashSet<String>,
}

impl LanguageResources {
    /// Built-in tables for `language`.
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            stop_words: to_owned_set(language.stop_words()),
            negation_markers: to_owned_set(language.negation_markers()),
        }
    }

    /// Resolve the configured language and, when a custom stop-word file is
    /// configured, replace the built-in stop words with its contents.
    pub fn load(config: &DetectorConfig) -> Self {
        let language = Language::resolve(&config.language);
        let mut resources = Self::for_language(language);

        if let Some(path) = &config.stop_words_path {
            resources.stop_words = load_stop_words(path);
        }

        debug!(
            language = %resources.language,
            stop_words = resources.stop_words.len(),
            negation_markers = resources.negation_markers.len(),
            "Language resources ready"
        );
        resources
    }

    pub fn without_stop_words(mut self) -> Self {
        self.stop_words.clear();
        self
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn is_negation_marker(&self, token: &str) -> bool {
        self.negation_markers.contains(token)
    }

    pub fn abbreviations(&self) -> &'static [&'static str] {
        self.language.abbreviations()
    }
}

impl Default for LanguageResources {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

fn to_owned_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Read a newline-separated stop-word list. An unreadable file yields an
/// empty set; matching continues without stop-word filtering.
fn load_stop_words(path: &Path) -> HashSet<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect(),
        Err(e) => {
            warn!(
                path = %path.display(),
                "Stop words not available ({}), using empty set",
                e
            );
            HashSet::new()
        }
    }
}

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "be", "became", "because", "become", "becomes", "been", "before",
    "beforehand", "behind", "being", "below", "beside", "besides", "between", "both", "but", "by",
    "can", "cannot", "could", "did", "do", "does", "doing", "done", "down", "during", "each",
    "either", "else", "elsewhere", "enough", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "for", "former", "formerly", "from", "further", "had", "has",
    "have", "having", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "indeed", "into", "is",
    "it", "its", "itself", "just", "latter", "least", "less", "many", "may", "me", "meanwhile",
    "might", "more", "moreover", "most", "mostly", "much", "must", "my", "myself", "namely",
    "neither", "never", "nevertheless", "no", "nobody", "none", "noone", "nor", "not", "nothing",
    "now", "nowhere", "of", "off", "often", "on", "once", "only", "onto", "or", "other", "others",
    "otherwise", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "rather",
    "same", "seem", "seemed", "seeming", "seems", "several", "she", "should", "since", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "these", "they", "this", "those",
    "though", "through", "throughout", "thru", "thus", "to", "together", "too", "toward",
    "towards", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
    "your", "yours", "yourself", "yourselves",
];

const SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos", "en",
    "entre", "era", "erais", "eran", "eras", "eres", "es", "esa", "esas", "ese", "eso", "esos",
    "esta", "estaba", "estabais", "estaban", "estabas", "estad", "estada", "estadas", "estado",
    "estados", "estamos", "estando", "estar", "estaremos", "estará", "estarán", "estarás",
    "estaré", "estaría", "estaríamos", "estarían", "estarías", "estas", "este", "estemos",
    "esto", "estos", "estoy", "estuve", "estuvieron", "estuvimos", "estuvo", "está", "estábamos",
    "estáis", "están", "estás", "esté", "estén", "fue", "fuera", "fueron", "fui", "fuimos", "ha",
    "habéis", "había", "habíamos", "habían", "han", "has", "hasta", "hay", "haya", "he", "hemos",
    "hube", "hubo", "la", "las", "le", "les", "lo", "los", "me", "mi", "mis", "mucho", "muchos",
    "muy", "más", "mí", "mía", "mías", "mío", "míos", "nos", "nosotras", "nosotros", "nuestra",
    "nuestras", "nuestro", "nuestros", "o", "os", "otra", "otras", "otro", "otros", "para",
    "pero", "poco", "por", "porque", "que", "quien", "quienes", "qué", "se", "sea", "sean", "ser",
    "será", "serán", "sería", "si", "sido", "siendo", "sin", "sobre", "sois", "somos", "son",
    "soy", "su", "sus", "suya", "suyas", "suyo", "suyos", "sí", "también", "tanto", "te",
    "tendrá", "tenemos", "tener", "tengo", "tenía", "tenían", "ti", "tiene", "tienen", "todo",
    "todos", "tu", "tus", "tuve", "tuvo", "tú", "un", "una", "uno", "unos", "vosotras",
    "vosotros", "vuestra", "vuestras", "vuestro", "vuestros", "y", "ya", "yo", "él", "éramos",
    "no", "ni", "nada", "nadie", "nunca", "tampoco",
];
