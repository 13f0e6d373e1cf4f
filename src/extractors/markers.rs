// src/extractors/markers.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

// --- Pattern Fragments ---
// Separators allowed between an item head and its body.
const ITEM_SEPARATORS: &str = r"[.\-–—:]";
// An item head is only recognized at the start of a slice, a line, or a sentence.
const ITEM_HEAD_LEAD: &str = r"(?:^|[\n.:;])\s*";
// A personal-name token: capitalized word or single-letter initial.
const NAME_TOKEN: &str = r"\b\p{Lu}(?:[\p{L}'’\-]+|\.)";
// A signature block starts the text or follows whitespace, never a glued abbreviation.
const SIGNATURE_LEAD: &str = r"(?:^|\s)";

// --- Default Template (Lazy Static) ---
static DEFAULT_MARKERS: Lazy<MarkerTable> = Lazy::new(|| {
    MarkerTable::compile(&TemplateConfig::default())
        .expect("Failed to compile the default resolution template")
});

/// Vocabulary of one document template family.
///
/// Everything is plain text; [`MarkerTable::compile`] turns it into
/// case-insensitive, whitespace- and accent-tolerant patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub resolution_label: String,
    pub recitals_marker: String,
    pub operative_marker: String,
    pub final_provisions_marker: String,
    pub recital_opener: String,
    pub article_keywords: Vec<String>,
    pub article_ordinals: Vec<String>,
    pub provision_ordinals: Vec<String>,
    pub closing_opener: String,
    pub academic_titles: Vec<String>,
    pub courtesy_titles: Vec<String>,
    pub rector_role: String,
    pub secretary_role: String,
    pub certification_opener: String,
    pub certification_closer: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            resolution_label: "RESOLUCIÓN".into(),
            recitals_marker: "CONSIDERANDO".into(),
            operative_marker: "RESUELVE".into(),
            final_provisions_marker: "DISPOSICIONES FINALES".into(),
            recital_opener: "Que,".into(),
            article_keywords: words(&["Artículo", "Art."]),
            article_ordinals: words(&[
                "PRIMERO", "SEGUNDO", "TERCERO", "CUARTO", "QUINTO",
                "SEXTO", "SÉPTIMO", "OCTAVO", "NOVENO", "DÉCIMO",
            ]),
            provision_ordinals: words(&[
                "PRIMERA", "SEGUNDA", "TERCERA", "CUARTA", "QUINTA",
                "SEXTA", "SÉPTIMA", "OCTAVA", "NOVENA", "DÉCIMA",
            ]),
            closing_opener: "Dado en".into(),
            academic_titles: words(&["Mgtr.", "Msc.", "Ing.", "Abg.", "Lcd."]),
            courtesy_titles: words(&["Srta.", "Sra.", "Sr."]),
            rector_role: "RECTOR".into(),
            secretary_role: "SECRETARIA".into(),
            certification_opener: "En mi calidad".into(),
            certification_closer: "Lo certifico.".into(),
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl TemplateConfig {
    /// Loads a template override from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ExtractError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ExtractError::InvalidTemplate(format!("reading {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            ExtractError::InvalidTemplate(format!("parsing {}: {}", path.display(), e))
        })
    }
}

/// Compiled, read-only marker table handed to every extractor.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    /// `RESOLUCIÓN: <value>`; the value is captured as `value`.
    pub resolution_line: Regex,
    pub recitals: Regex,
    pub operative: Regex,
    pub final_provisions: Regex,
    pub closing_start: Regex,
    /// Any courtesy/academic title, role word or certification opener.
    pub signature_cues: Regex,
    pub recital_head: Regex,
    pub article_head: Regex,
    /// Ordinal head; `sep` is set when separator punctuation follows the ordinal.
    pub provision_head: Regex,
    /// Any feminine ordinal word, used by the loose provision split.
    pub provision_ordinal: Regex,
    pub ocr_acronym_gap: Regex,
    pub rector: Regex,
    pub secretary: Regex,
    pub certification: Regex,
    pub rector_role: String,
    pub secretary_role: String,
}

impl MarkerTable {
    /// The built-in CONSIDERANDO / RESUELVE / DISPOSICIONES FINALES template.
    pub fn default_template() -> &'static MarkerTable {
        &DEFAULT_MARKERS
    }

    pub fn compile(config: &TemplateConfig) -> Result<Self, ExtractError> {
        let non_empty = |name: &str, list: &[String]| {
            if list.iter().all(|w| w.trim().is_empty()) {
                Err(ExtractError::InvalidTemplate(format!("`{}` must list at least one word", name)))
            } else {
                Ok(())
            }
        };
        non_empty("article_keywords", &config.article_keywords)?;
        non_empty("article_ordinals", &config.article_ordinals)?;
        non_empty("provision_ordinals", &config.provision_ordinals)?;
        non_empty("academic_titles", &config.academic_titles)?;
        non_empty("courtesy_titles", &config.courtesy_titles)?;

        let academic = alternation(&config.academic_titles);
        let courtesy = alternation(&config.courtesy_titles);
        let rector_role = phrase(&config.rector_role);
        let secretary_role = phrase(&config.secretary_role);
        let article_ordinals = alternation(&config.article_ordinals);
        let provision_ordinals = alternation(&config.provision_ordinals);

        Ok(Self {
            resolution_line: build(&format!(
                r"(?i){}\s*:\s*(?P<value>[^\n]+)",
                phrase(&config.resolution_label)
            ))?,
            recitals: build(&format!(r"(?i){}\s*:?", phrase(&config.recitals_marker)))?,
            operative: build(&format!(r"(?i){}\s*:?", phrase(&config.operative_marker)))?,
            final_provisions: build(&format!(
                r"(?i){}\s*:?",
                phrase(&config.final_provisions_marker)
            ))?,
            closing_start: build(&format!("(?i){}", phrase(&config.closing_opener)))?,
            signature_cues: build(&format!(
                "(?i){}|{}|{}|{}|{}",
                academic,
                courtesy,
                rector_role,
                secretary_role,
                phrase(&config.certification_opener)
            ))?,
            recital_head: build(&format!(
                "(?i){}(?P<head>{})",
                ITEM_HEAD_LEAD,
                phrase(&config.recital_opener)
            ))?,
            article_head: build(&format!(
                r"(?i){}(?P<head>(?:{})\s*(?P<label>\d+|{})\b\s*{}+(?:\s*-\s*)?)",
                ITEM_HEAD_LEAD,
                alternation(&config.article_keywords),
                article_ordinals,
                ITEM_SEPARATORS
            ))?,
            provision_head: build(&format!(
                r"(?i){}(?P<head>(?P<label>{})(?:\s*(?P<sep>{}+)\s*|[ \t]+))",
                ITEM_HEAD_LEAD, provision_ordinals, ITEM_SEPARATORS
            ))?,
            provision_ordinal: build(&format!("(?i){}", provision_ordinals))?,
            ocr_acronym_gap: build(r"\b(\p{Lu}{1,6})\s*-\s+(\p{Lu}{2,})\b")?,
            rector: build(&format!(
                r"{}(?:(?P<prefix>(?i:{}))\s+)?(?P<name>{}(?:\s+{}){{1,4}})\s+(?i:{})",
                SIGNATURE_LEAD, academic, NAME_TOKEN, NAME_TOKEN, rector_role
            ))?,
            secretary: build(&format!(
                r"{}(?P<prefix>(?i:{}))\s+(?P<name>{}(?:\s+{}){{1,5}})\s+(?i:{})",
                SIGNATURE_LEAD, courtesy, NAME_TOKEN, NAME_TOKEN, secretary_role
            ))?,
            certification: build(&format!(
                r"(?is)(?P<message>{}.*?{})",
                phrase(&config.certification_opener),
                phrase(&config.certification_closer)
            ))?,
            rector_role: config.rector_role.trim().to_string(),
            secretary_role: config.secretary_role.trim().to_string(),
        })
    }

    /// Section markers by name, in template order. Used for boundary logging and debug dumps.
    pub fn section_markers(&self) -> [(&'static str, &Regex); 6] {
        [
            ("resolution", &self.resolution_line),
            ("recitals", &self.recitals),
            ("operative", &self.operative),
            ("final_provisions", &self.final_provisions),
            ("closing", &self.closing_start),
            ("signature", &self.signature_cues),
        ]
    }
}

fn build(pattern: &str) -> Result<Regex, ExtractError> {
    Regex::new(pattern).map_err(|e| ExtractError::RegexError(format!("'{}': {}", pattern, e)))
}

/// Pattern for a literal phrase: words joined by `\s+`, vowels accent-tolerant,
/// word boundaries only where the phrase starts/ends with a word character.
fn phrase(text: &str) -> String {
    let text = text.trim();
    let body = text
        .split_whitespace()
        .map(|word| word.chars().map(tolerant_char).collect::<String>())
        .collect::<Vec<_>>()
        .join(r"\s+");

    let starts_word = text.chars().next().is_some_and(char::is_alphanumeric);
    let ends_word = text.chars().last().is_some_and(char::is_alphanumeric);
    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        body,
        if ends_word { r"\b" } else { "" }
    )
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .filter(|w| !w.trim().is_empty())
        .map(|w| phrase(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn tolerant_char(c: char) -> String {
    let class = match c.to_lowercase().next().unwrap_or(c) {
        'a' | 'á' => "[aá]",
        'e' | 'é' => "[eé]",
        'i' | 'í' => "[ií]",
        'o' | 'ó' => "[oó]",
        'u' | 'ú' | 'ü' => "[uúü]",
        _ => return regex::escape(c.encode_utf8(&mut [0; 4])),
    };
    class.to_string()
}
