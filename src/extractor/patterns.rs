// file: src/extractor/patterns.rs
// description: compiled regex patterns for heading detection and tokenization
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Heading shapes, matched against trimmed span text
    pub static ref NUMBERED_HEADING: Regex = Regex::new(
        r"^\d+\.?\s+[A-Z]"
    ).expect("NUMBERED_HEADING regex is valid");

    pub static ref ALL_CAPS_HEADING: Regex = Regex::new(
        r"^[A-Z][A-Z\s]{3,}$"
    ).expect("ALL_CAPS_HEADING regex is valid");

    pub static ref STRICT_CAPS_HEADING: Regex = Regex::new(
        r"^[A-Z][A-Z\s]{5,}$"
    ).expect("STRICT_CAPS_HEADING regex is valid");

    pub static ref CHAPTER_HEADING: Regex = Regex::new(
        r"^Chapter\s+\d+"
    ).expect("CHAPTER_HEADING regex is valid");

    pub static ref ROMAN_HEADING: Regex = Regex::new(
        r"^[IVX]+\.\s"
    ).expect("ROMAN_HEADING regex is valid");

    pub static ref TWO_LEVEL_HEADING: Regex = Regex::new(
        r"^\d+\.\d+\.?\s"
    ).expect("TWO_LEVEL_HEADING regex is valid");

    pub static ref THREE_LEVEL_HEADING: Regex = Regex::new(
        r"^\d+\.\d+\.\d+\.?\s"
    ).expect("THREE_LEVEL_HEADING regex is valid");

    // Title candidates that are really page furniture (checked lowercased)
    pub static ref PAGE_NUMBER_LINE: Regex = Regex::new(
        r"^\d+$|^page \d+|^\d+/\d+"
    ).expect("PAGE_NUMBER_LINE regex is valid");

    // Scoring tokens, matched against lowercased text
    pub static ref WORD_TOKEN: Regex = Regex::new(
        r"[a-z]{3,}"
    ).expect("WORD_TOKEN regex is valid");
}

pub fn matches_heading_shape(text: &str) -> bool {
    [
        &*NUMBERED_HEADING,
        &*ALL_CAPS_HEADING,
        &*CHAPTER_HEADING,
        &*ROMAN_HEADING,
        &*TWO_LEVEL_HEADING,
        &*THREE_LEVEL_HEADING,
    ]
    .iter()
    .any(|pattern| pattern.is_match(text))
}

pub fn is_page_number_line(line: &str) -> bool {
    PAGE_NUMBER_LINE.is_match(&line.to_lowercase())
}
