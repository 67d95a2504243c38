// src/stemmer/tables.rs
//
// Fixed affix tables and stop words of the ISRI stemmer. Every table is an
// ordered list: lookups scan it front to back and the first entry wins.

use std::collections::HashSet;
use log::debug;

pub const ALEF: char = '\u{0627}'; // ا
pub const ALEF_MADDA: char = '\u{0622}'; // آ
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}'; // أ
pub const ALEF_HAMZA_BELOW: char = '\u{0625}'; // إ
pub const HAMZA: char = '\u{0621}'; // ء
pub const YEH_HAMZA: char = '\u{0626}'; // ئ
pub const TEH: char = '\u{062A}'; // ت
pub const TEH_MARBUTA: char = '\u{0629}'; // ة
pub const SEEN: char = '\u{0633}'; // س
pub const MEEM: char = '\u{0645}'; // م
pub const NOON: char = '\u{0646}'; // ن
pub const WAW: char = '\u{0648}'; // و
pub const YEH: char = '\u{064A}'; // ي

/// Length three prefixes.
pub const PREFIXES_3: [&str; 4] = [
    "\u{0643}\u{0627}\u{0644}", // كال
    "\u{0628}\u{0627}\u{0644}", // بال
    "\u{0648}\u{0644}\u{0644}", // ولل
    "\u{0648}\u{0627}\u{0644}", // وال
];

/// Length two prefixes.
pub const PREFIXES_2: [&str; 2] = [
    "\u{0627}\u{0644}", // ال
    "\u{0644}\u{0644}", // لل
];

/// Length one prefixes.
pub const PREFIXES_1: [&str; 9] = [
    "\u{0644}", // ل
    "\u{0628}", // ب
    "\u{0641}", // ف
    "\u{0633}", // س
    "\u{0648}", // و
    "\u{064A}", // ي
    "\u{062A}", // ت
    "\u{0646}", // ن
    "\u{0627}", // ا
];

/// Length three suffixes.
pub const SUFFIXES_3: [&str; 5] = [
    "\u{062A}\u{0645}\u{0644}", // تمل
    "\u{0647}\u{0645}\u{0644}", // همل
    "\u{062A}\u{0627}\u{0646}", // تان
    "\u{062A}\u{064A}\u{0646}", // تين
    "\u{0643}\u{0645}\u{0644}", // كمل
];

/// Length two suffixes.
pub const SUFFIXES_2: [&str; 16] = [
    "\u{0648}\u{0646}", // ون
    "\u{0627}\u{062A}", // ات
    "\u{0627}\u{0646}", // ان
    "\u{064A}\u{0646}", // ين
    "\u{062A}\u{0646}", // تن
    "\u{0643}\u{0645}", // كم
    "\u{0647}\u{0646}", // هن
    "\u{0646}\u{0627}", // نا
    "\u{064A}\u{0627}", // يا
    "\u{0647}\u{0627}", // ها
    "\u{062A}\u{0645}", // تم
    "\u{0643}\u{0646}", // كن
    "\u{0646}\u{064A}", // ني
    "\u{0648}\u{0627}", // وا
    "\u{0645}\u{0627}", // ما
    "\u{0647}\u{0645}", // هم
];

/// Length one suffixes.
pub const SUFFIXES_1: [&str; 7] = [
    "\u{0629}", // ة
    "\u{0647}", // ه
    "\u{064A}", // ي
    "\u{0643}", // ك
    "\u{062A}", // ت
    "\u{0627}", // ا
    "\u{0646}", // ن
];

/// High-frequency closed-class forms that are never stemmed. Compared after
/// diacritics are stripped, so entries carry none.
pub const STOP_WORDS: [&str; 52] = [
    "\u{064A}\u{0643}\u{0648}\u{0646}",
    "\u{0648}\u{0644}\u{064A}\u{0633}",
    "\u{0648}\u{0643}\u{0627}\u{0646}",
    "\u{0643}\u{0630}\u{0644}\u{0643}",
    "\u{0627}\u{0644}\u{062A}\u{064A}",
    "\u{0648}\u{0628}\u{064A}\u{0646}",
    "\u{0639}\u{0644}\u{064A}\u{0647}\u{0627}",
    "\u{0645}\u{0633}\u{0627}\u{0621}",
    "\u{0627}\u{0644}\u{0630}\u{064A}",
    "\u{0648}\u{0643}\u{0627}\u{0646}\u{062A}",
    "\u{0648}\u{0644}\u{0643}\u{0646}",
    "\u{0648}\u{0627}\u{0644}\u{062A}\u{064A}",
    "\u{062A}\u{0643}\u{0648}\u{0646}",
    "\u{0627}\u{0644}\u{064A}\u{0648}\u{0645}",
    "\u{0627}\u{0644}\u{0644}\u{0630}\u{064A}\u{0646}",
    "\u{0639}\u{0644}\u{064A}\u{0647}",
    "\u{0643}\u{0627}\u{0646}\u{062A}",
    "\u{0644}\u{0630}\u{0644}\u{0643}",
    "\u{0623}\u{0645}\u{0627}\u{0645}",
    "\u{0647}\u{0646}\u{0627}\u{0643}",
    "\u{0645}\u{0646}\u{0647}\u{0627}",
    "\u{0645}\u{0627}\u{0632}\u{0627}\u{0644}",
    "\u{0644}\u{0627}\u{0632}\u{0627}\u{0644}",
    "\u{0644}\u{0627}\u{064A}\u{0632}\u{0627}\u{0644}",
    "\u{0645}\u{0627}\u{064A}\u{0632}\u{0627}\u{0644}",
    "\u{0627}\u{0635}\u{0628}\u{062D}",
    "\u{0623}\u{0635}\u{0628}\u{062D}",
    "\u{0623}\u{0645}\u{0633}\u{0649}",
    "\u{0627}\u{0645}\u{0633}\u{0649}",
    "\u{0623}\u{0636}\u{062D}\u{0649}",
    "\u{0627}\u{0636}\u{062D}\u{0649}",
    "\u{0645}\u{0627}\u{0628}\u{0631}\u{062D}",
    "\u{0645}\u{0627}\u{0641}\u{062A}\u{0626}",
    "\u{0645}\u{0627}\u{0627}\u{0646}\u{0641}\u{0643}",
    "\u{0644}\u{0627}\u{0633}\u{064A}\u{0645}\u{0627}",
    "\u{0648}\u{0644}\u{0627}\u{064A}\u{0632}\u{0627}\u{0644}",
    "\u{0627}\u{0644}\u{062D}\u{0627}\u{0644}\u{064A}",
    "\u{0627}\u{0644}\u{064A}\u{0647}\u{0627}",
    "\u{0627}\u{0644}\u{0630}\u{064A}\u{0646}",
    "\u{0641}\u{0627}\u{0646}\u{0647}",
    "\u{0648}\u{0627}\u{0644}\u{0630}\u{064A}",
    "\u{0648}\u{0647}\u{0630}\u{0627}",
    "\u{0644}\u{0647}\u{0630}\u{0627}",
    "\u{0641}\u{0643}\u{0627}\u{0646}",
    "\u{0633}\u{062A}\u{0643}\u{0648}\u{0646}",
    "\u{0627}\u{0644}\u{064A}\u{0647}",
    "\u{064A}\u{0645}\u{0643}\u{0646}",
    "\u{0628}\u{0647}\u{0630}\u{0627}",
    "\u{0627}\u{0644}\u{0630}\u{0649}",
    // Extras beyond the classic ISRI list. Three letters with no leading hamza,
    // so they never change a stem, but batch output still flags them.
    "\u{0647}\u{0630}\u{0627}",
    "\u{0647}\u{0630}\u{0647}",
    "\u{0630}\u{0644}\u{0643}",
];

/// An ordered list of affixes that all share the same length in code points.
#[derive(Debug, Clone)]
pub struct AffixTable {
    width: usize,
    entries: Vec<Vec<char>>,
}

impl AffixTable {
    pub fn new(entries: &[&str]) -> Self {
        let entries: Vec<Vec<char>> = entries.iter().map(|e| e.chars().collect()).collect();
        let width = entries.first().map_or(0, |e| e.len());
        debug_assert!(entries.iter().all(|e| e.len() == width));
        Self { width, entries }
    }

    /// Number of code points every entry in this table has.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in table order, that the token starts with.
    pub fn leading_match(&self, token: &[char]) -> Option<&[char]> {
        self.entries
            .iter()
            .find(|entry| token.starts_with(entry.as_slice()))
            .map(|entry| entry.as_slice())
    }

    /// First entry, in table order, that the token ends with.
    pub fn trailing_match(&self, token: &[char]) -> Option<&[char]> {
        self.entries
            .iter()
            .find(|entry| token.ends_with(entry.as_slice()))
            .map(|entry| entry.as_slice())
    }
}

/// All lookup data the stemmer needs. Built once and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct StemmerTables {
    pub prefixes_3: AffixTable,
    pub prefixes_2: AffixTable,
    pub prefixes_1: AffixTable,
    pub suffixes_3: AffixTable,
    pub suffixes_2: AffixTable,
    pub suffixes_1: AffixTable,
    stop_words: HashSet<String>,
}

impl StemmerTables {
    pub fn new() -> Self {
        let stop_words: HashSet<String> = STOP_WORDS.iter().map(|w| w.to_string()).collect();
        debug!("Built stemmer tables with {} stop words", stop_words.len());

        Self {
            prefixes_3: AffixTable::new(&PREFIXES_3),
            prefixes_2: AffixTable::new(&PREFIXES_2),
            prefixes_1: AffixTable::new(&PREFIXES_1),
            suffixes_3: AffixTable::new(&SUFFIXES_3),
            suffixes_2: AffixTable::new(&SUFFIXES_2),
            suffixes_1: AffixTable::new(&SUFFIXES_1),
            stop_words,
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

impl Default for StemmerTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn table_sizes() {
        let tables = StemmerTables::new();
        assert_eq!(tables.prefixes_3.len(), 4);
        assert_eq!(tables.prefixes_2.len(), 2);
        assert_eq!(tables.prefixes_1.len(), 9);
        assert_eq!(tables.suffixes_3.len(), 5);
        assert_eq!(tables.suffixes_2.len(), 16);
        assert_eq!(tables.suffixes_1.len(), 7);
        assert_eq!(tables.stop_word_count(), 52);
    }

    #[test]
    fn widths_match_entry_lengths() {
        let tables = StemmerTables::new();
        assert_eq!(tables.prefixes_3.width(), 3);
        assert_eq!(tables.prefixes_2.width(), 2);
        assert_eq!(tables.suffixes_1.width(), 1);
    }

    #[test]
    fn stop_words_carry_no_diacritics() {
        for word in STOP_WORDS {
            assert!(!word.chars().any(|c| ('\u{064B}'..='\u{0652}').contains(&c)));
        }
    }

    #[test]
    fn leading_match_returns_first_entry_in_order() {
        let table = AffixTable::new(&PREFIXES_2);
        assert_eq!(table.leading_match(&chars("الكتاب")), Some(&chars("ال")[..]));
        assert_eq!(table.leading_match(&chars("كتاب")), None);
    }

    #[test]
    fn trailing_match_scans_in_order() {
        let table = AffixTable::new(&SUFFIXES_2);
        assert_eq!(table.trailing_match(&chars("معلمون")), Some(&chars("ون")[..]));
        assert_eq!(table.trailing_match(&chars("كتب")), None);
    }

    #[test]
    fn stop_word_lookup_is_exact() {
        let tables = StemmerTables::new();
        assert!(tables.is_stop_word("الذي"));
        assert!(!tables.is_stop_word("الذ"));
        assert!(!tables.is_stop_word("الذيي"));
    }

    #[test]
    fn extra_stop_words_are_three_letters_without_hamza() {
        for word in &STOP_WORDS[49..] {
            assert_eq!(word.chars().count(), 3);
            assert!(!word.starts_with(|c: char| matches!(c, ALEF_MADDA | ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW)));
        }
    }
}
