// src/stemmer/patterns.rs
//
// Length-keyed pattern reduction. Every rule list is evaluated in order and
// the first rule whose conditions all hold decides the result. Positions are
// 0-based indexes into the token handed to the reducer, and each reducer is
// only ever called with a token of the length it was written for.

use log::trace;

use super::affix::{strip_short_prefix, strip_short_suffix};
use super::tables::{
    StemmerTables, ALEF, HAMZA, MEEM, NOON, SEEN, TEH, TEH_MARBUTA, WAW, YEH, YEH_HAMZA,
};

use self::Condition::{At, Same};

/// A single positional check of a pattern rule.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// The letter at the position is one of the listed letters.
    At(usize, &'static [char]),
    /// The letters at both positions are identical.
    Same(usize, usize),
}

impl Condition {
    fn holds(&self, token: &[char]) -> bool {
        match *self {
            At(pos, letters) => letters.contains(&token[pos]),
            Same(a, b) => token[a] == token[b],
        }
    }
}

/// `when` conditions joined by AND; `keep` lists the positions that survive.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub pattern: &'static str,
    pub when: &'static [Condition],
    pub keep: &'static [usize],
}

impl PatternRule {
    pub fn matches(&self, token: &[char]) -> bool {
        self.when.iter().all(|condition| condition.holds(token))
    }

    pub fn extract(&self, token: &[char]) -> Vec<char> {
        self.keep.iter().map(|&pos| token[pos]).collect()
    }
}

/// Four letter patterns yielding three letter roots.
pub static LEN4_RULES: [PatternRule; 4] = [
    PatternRule { pattern: "مفعل", when: &[At(0, &[MEEM])], keep: &[1, 2, 3] },
    PatternRule { pattern: "فاعل", when: &[At(1, &[ALEF])], keep: &[0, 2, 3] },
    PatternRule { pattern: "فعال فعول فعيل", when: &[At(2, &[ALEF, WAW, YEH])], keep: &[0, 1, 3] },
    PatternRule { pattern: "فعلة", when: &[At(3, &[TEH_MARBUTA])], keep: &[0, 1, 2] },
];

/// Five letter patterns yielding three letter roots.
pub static LEN5_ROOT3_RULES: [PatternRule; 15] = [
    PatternRule { pattern: "افتعل افاعل", when: &[At(0, &[ALEF]), At(2, &[ALEF, TEH])], keep: &[1, 3, 4] },
    PatternRule { pattern: "مفعول مفعال مفعيل", when: &[At(0, &[MEEM]), At(3, &[ALEF, YEH, WAW])], keep: &[1, 2, 4] },
    PatternRule { pattern: "مفعلة تفعلة افعلة", when: &[At(4, &[TEH_MARBUTA]), At(0, &[ALEF, TEH, MEEM])], keep: &[1, 2, 3] },
    PatternRule { pattern: "مفتعل يفتعل تفتعل", when: &[At(2, &[TEH]), At(0, &[MEEM, YEH, TEH])], keep: &[1, 3, 4] },
    PatternRule { pattern: "مفاعل تفاعل", when: &[At(2, &[ALEF]), At(0, &[MEEM, TEH])], keep: &[1, 3, 4] },
    PatternRule { pattern: "فعولة فعالة", when: &[At(4, &[TEH_MARBUTA]), At(2, &[ALEF, WAW])], keep: &[0, 1, 3] },
    PatternRule { pattern: "انفعل منفعل", when: &[At(1, &[NOON]), At(0, &[ALEF, MEEM])], keep: &[2, 3, 4] },
    PatternRule { pattern: "افعال", when: &[At(0, &[ALEF]), At(3, &[ALEF])], keep: &[1, 2, 4] },
    PatternRule { pattern: "فعلان", when: &[At(3, &[ALEF]), At(4, &[NOON])], keep: &[0, 1, 2] },
    PatternRule { pattern: "تفعيل", when: &[At(0, &[TEH]), At(3, &[YEH])], keep: &[1, 2, 4] },
    PatternRule { pattern: "فاعول", when: &[At(1, &[ALEF]), At(3, &[WAW])], keep: &[0, 2, 4] },
    PatternRule { pattern: "فواعل", when: &[At(1, &[WAW]), At(2, &[ALEF])], keep: &[0, 3, 4] },
    PatternRule { pattern: "فعائل", when: &[At(2, &[ALEF]), At(3, &[HAMZA, YEH_HAMZA])], keep: &[0, 1, 4] },
    PatternRule { pattern: "فاعلة", when: &[At(1, &[ALEF]), At(4, &[TEH_MARBUTA])], keep: &[0, 2, 3] },
    PatternRule { pattern: "فعالي", when: &[At(2, &[ALEF]), At(4, &[YEH])], keep: &[0, 1, 3] },
];

/// Five letter patterns yielding four letter roots.
pub static LEN5_ROOT4_RULES: [PatternRule; 3] = [
    PatternRule { pattern: "تفعلل افعلل مفعلل", when: &[At(0, &[ALEF, TEH, MEEM])], keep: &[1, 2, 3, 4] },
    PatternRule { pattern: "فعللة", when: &[At(4, &[TEH_MARBUTA])], keep: &[0, 1, 2, 3] },
    PatternRule { pattern: "فعالل", when: &[At(2, &[ALEF])], keep: &[0, 1, 3, 4] },
];

/// Six letter patterns yielding three letter roots.
pub static LEN6_ROOT3_RULES: [PatternRule; 5] = [
    PatternRule { pattern: "استفعل مستفعل", when: &[At(0, &[ALEF, MEEM]), At(1, &[SEEN]), At(2, &[TEH])], keep: &[3, 4, 5] },
    PatternRule { pattern: "مفعالة", when: &[At(0, &[MEEM]), At(3, &[ALEF]), At(5, &[TEH_MARBUTA])], keep: &[1, 2, 4] },
    PatternRule { pattern: "افتعال", when: &[At(0, &[ALEF]), At(2, &[TEH]), At(4, &[ALEF])], keep: &[1, 3, 5] },
    PatternRule { pattern: "افعوعل", when: &[At(0, &[ALEF]), At(3, &[WAW]), Same(2, 4)], keep: &[1, 4, 5] },
    PatternRule { pattern: "تفاعيل", when: &[At(0, &[TEH]), At(2, &[ALEF]), At(4, &[YEH])], keep: &[1, 3, 5] },
];

/// Six letter patterns yielding four letter roots.
pub static LEN6_ROOT4_RULES: [PatternRule; 2] = [
    PatternRule { pattern: "افعلال", when: &[At(0, &[ALEF]), At(4, &[ALEF])], keep: &[1, 2, 3, 5] },
    PatternRule { pattern: "متفعلل", when: &[At(0, &[MEEM]), At(1, &[TEH])], keep: &[2, 3, 4, 5] },
];

fn first_match(rules: &[PatternRule], token: &[char]) -> Option<Vec<char>> {
    rules.iter().find(|rule| rule.matches(token)).map(|rule| {
        trace!("pattern {} matched", rule.pattern);
        rule.extract(token)
    })
}

/// Short suffix first; the short prefix only goes when no suffix did.
fn strip_short_affix(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    let stripped = strip_short_suffix(tables, token);
    if stripped.len() == token.len() {
        strip_short_prefix(tables, &stripped)
    } else {
        stripped
    }
}

pub fn reduce_len4(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    debug_assert_eq!(token.len(), 4);
    first_match(&LEN4_RULES, token).unwrap_or_else(|| strip_short_affix(tables, token))
}

pub fn reduce_len5_primary(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    debug_assert_eq!(token.len(), 5);
    first_match(&LEN5_ROOT3_RULES, token).unwrap_or_else(|| strip_short_affix(tables, token))
}

pub fn reduce_len5_secondary(token: &[char]) -> Vec<char> {
    debug_assert_eq!(token.len(), 5);
    first_match(&LEN5_ROOT4_RULES, token).unwrap_or_else(|| token.to_vec())
}

/// Ending step for tokens that entered the length five path.
pub fn finish_len5(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    match token.len() {
        4 => reduce_len4(tables, token),
        5 => reduce_len5_secondary(token),
        _ => token.to_vec(),
    }
}

pub fn process_len5(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    let reduced = reduce_len5_primary(tables, token);
    finish_len5(tables, &reduced)
}

pub fn reduce_len6_primary(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    debug_assert_eq!(token.len(), 6);
    first_match(&LEN6_ROOT3_RULES, token).unwrap_or_else(|| strip_short_affix(tables, token))
}

pub fn reduce_len6_secondary(token: &[char]) -> Vec<char> {
    debug_assert_eq!(token.len(), 6);
    first_match(&LEN6_ROOT4_RULES, token).unwrap_or_else(|| token.to_vec())
}

/// Ending step for tokens that entered the length six path.
pub fn finish_len6(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    match token.len() {
        5 => process_len5(tables, token),
        6 => reduce_len6_secondary(token),
        _ => token.to_vec(),
    }
}

pub fn process_len6(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    let reduced = reduce_len6_primary(tables, token);
    finish_len6(tables, &reduced)
}

/// Seven letter tokens only get pattern reduction once a single letter affix
/// brings them down to six.
pub fn process_len7(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    debug_assert_eq!(token.len(), 7);
    let mut reduced = strip_short_suffix(tables, token);
    if reduced.len() == 7 {
        reduced = strip_short_prefix(tables, &reduced);
    }
    if reduced.len() == 6 {
        return process_len6(tables, &reduced);
    }
    reduced
}

/// Dispatch on the token's length. Tokens shorter than 4 or longer than 7
/// letters come back unchanged.
pub fn reduce(tables: &StemmerTables, token: &[char]) -> Vec<char> {
    trace!("pattern reduction for a token of length {}", token.len());
    match token.len() {
        4 => reduce_len4(tables, token),
        5 => process_len5(tables, token),
        6 => process_len6(tables, token),
        7 => process_len7(tables, token),
        _ => token.to_vec(),
    }
}
