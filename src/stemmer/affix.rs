// src/stemmer/affix.rs
//
// Affix removal stages. Each function returns a new token and removes at
// most one affix.

use log::trace;

use super::tables::{AffixTable, StemmerTables, WAW};

fn without_leading(table: &AffixTable, token: &[char]) -> Option<Vec<char>> {
    table.leading_match(token).map(|affix| {
        trace!("prefix {:?} matched", affix.iter().collect::<String>());
        token[affix.len()..].to_vec()
    })
}

fn without_trailing(table: &AffixTable, token: &[char]) -> Option<Vec<char>> {
    table.trailing_match(token).map(|affix| {
        trace!("suffix {:?} matched", affix.iter().collect::<String>());
        token[..token.len() - affix.len()].to_vec()
    })
}

/// Remove one length three prefix (tokens of 6+ letters) or, failing that,
/// one length two prefix (tokens of 5+ letters).
pub fn strip_prefix(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    if token.len() >= 6 {
        if let Some(stripped) = without_leading(&tables.prefixes_3, token) {
            return stripped;
        }
    }
    if token.len() >= 5 {
        if let Some(stripped) = without_leading(&tables.prefixes_2, token) {
            return stripped;
        }
    }
    token.to_vec()
}

/// Remove one length three suffix (tokens of 6+ letters) or, failing that,
/// one length two suffix (tokens of 5+ letters).
pub fn strip_suffix(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    if token.len() >= 6 {
        if let Some(stripped) = without_trailing(&tables.suffixes_3, token) {
            return stripped;
        }
    }
    if token.len() >= 5 {
        if let Some(stripped) = without_trailing(&tables.suffixes_2, token) {
            return stripped;
        }
    }
    token.to_vec()
}

pub fn strip_short_prefix(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    without_leading(&tables.prefixes_1, token).unwrap_or_else(|| token.to_vec())
}

pub fn strip_short_suffix(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    without_trailing(&tables.suffixes_1, token).unwrap_or_else(|| token.to_vec())
}

/// Drop the connective waw when it precedes a word that itself starts with waw.
pub fn reduce_waw(token: &[char]) -> Vec<char> {
    if token.len() >= 4 && token[0] == WAW && token[1] == WAW {
        trace!("collapsing doubled waw");
        return token[1..].to_vec();
    }
    token.to_vec()
}
