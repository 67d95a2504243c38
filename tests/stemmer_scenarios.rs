use jidhr::stemmer::affix::{reduce_waw, strip_prefix, strip_suffix};
use jidhr::stemmer::patterns;
use jidhr::stemmer::{IsriStemmer, Stemmer, StemmerTables};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn plural_with_diacritics_reduces_to_root() {
    assert_eq!(jidhr::stem("مُعَلِّمُون"), "علم");
}

#[test]
fn stop_word_is_returned_as_is() {
    assert_eq!(jidhr::stem("الذي"), "الذي");
}

#[test]
fn seven_letter_verbal_noun() {
    assert_eq!(jidhr::stem("استخراج"), "خرج");
}

#[test]
fn doubled_waw_drops_one_letter() {
    assert_eq!(jidhr::stem("ووضع"), "وضع");
}

#[test]
fn two_letter_word_is_unchanged() {
    assert_eq!(jidhr::stem("له"), "له");
    assert_eq!(jidhr::stem("لَهُ"), "له");
}

#[test]
fn common_derivations() {
    let stemmer = IsriStemmer::new();
    let cases = [
        ("الكتاب", "كتب"),
        ("مكتبة", "كتب"),
        ("كاتبون", "كتب"),
        ("المدرسة", "درس"),
        ("مستخدمون", "خدم"),
        ("استعمال", "عمل"),
        ("بالمدرسة", "درس"),
        ("أعمال", "عمل"),
        ("انكسار", "كسر"),
    ];
    for (word, root) in cases {
        assert_eq!(stemmer.stem(word), root, "{}", word);
    }
}

#[test]
fn minimal_forms_skip_pattern_reduction() {
    let tables = StemmerTables::new();
    for word in ["علم", "من", "ق", ""] {
        let token = chars(word);
        let staged = reduce_waw(&strip_suffix(&tables, &strip_prefix(&tables, &token)));
        assert_eq!(patterns::reduce(&tables, &staged), staged);
        assert_eq!(jidhr::stem(word), word);
    }
}

#[test]
fn earliest_len4_rule_decides() {
    // مقال fits both rule 1 (leading meem) and rule 3 (alif at position 2)
    let tables = StemmerTables::new();
    let reduced: String = patterns::reduce_len4(&tables, &chars("مقال")).into_iter().collect();
    assert_eq!(reduced, "قال");
    assert_eq!(jidhr::stem("مقال"), "قال");
}
