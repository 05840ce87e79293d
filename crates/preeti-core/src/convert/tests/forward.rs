use super::*;

#[test]
fn test_empty_input() {
    assert_eq!(preeti_to_unicode(""), "");
}

#[test]
fn test_short_i_is_moved_after_consonant() {
    assert_eq!(preeti_to_unicode("lk"), "पि");
    assert_eq!(preeti_to_unicode("ls"), "कि");
}

#[test]
fn test_short_i_with_conjunct() {
    assert_eq!(preeti_to_unicode("lq"), "त्रि");
    assert_eq!(preeti_to_unicode("l?"), "क्षि");
}

#[test]
fn test_trailing_trigger_is_kept() {
    assert_eq!(preeti_to_unicode("l"), "ि");
    assert_eq!(preeti_to_unicode("kl"), "पि");
}

#[test]
fn test_trigger_before_non_consonant() {
    // Vowel sign, digit and whitespace do not take the short-i.
    assert_eq!(preeti_to_unicode("lf"), "िा");
    assert_eq!(preeti_to_unicode("l5"), "ि५");
    assert_eq!(preeti_to_unicode("l k"), "ि प");
}

#[test]
fn test_repeated_triggers() {
    assert_eq!(preeti_to_unicode("lll"), "ििि");
    // Only the last trigger sits next to the consonant.
    assert_eq!(preeti_to_unicode("llk"), "िपि");
}

#[test]
fn test_words() {
    assert_eq!(preeti_to_unicode("g]kfn"), "नेपाल");
    assert_eq!(preeti_to_unicode("ldq"), "मित्र");
    assert_eq!(preeti_to_unicode("sfd"), "काम");
    assert_eq!(preeti_to_unicode("lbg"), "दिन");
}

#[test]
fn test_digits() {
    assert_eq!(preeti_to_unicode("0123456789"), "०१२३४५६७८९");
}

#[test]
fn test_punctuation_and_signs() {
    assert_eq!(preeti_to_unicode("x."), "ह।");
    assert_eq!(preeti_to_unicode("s+"), "कं");
    assert_eq!(preeti_to_unicode("k\\"), "प्");
    assert_eq!(preeti_to_unicode("kr"), "प्र");
}

#[test]
fn test_unmapped_passthrough() {
    assert_eq!(preeti_to_unicode("m"), "m");
    assert_eq!(preeti_to_unicode("ABC"), "ABC");
    assert_eq!(preeti_to_unicode("नेपाल"), "नेपाल");
}

#[test]
fn test_mixed_input() {
    assert_eq!(preeti_to_unicode("s, k!"), "क, प!");
    assert_eq!(preeti_to_unicode("g]kfn\n"), "नेपाल\n");
}

#[test]
fn test_injected_tables() {
    let tiny = tiny_tables();
    assert_eq!(preeti_to_unicode_with(&tiny, "lK"), "पि");
    assert_eq!(preeti_to_unicode_with(&tiny, "lks"), "पिs");
    assert_eq!(preeti_to_unicode_with(&tiny, ""), "");
}

#[test]
fn test_direction_dispatch() {
    assert_eq!(
        convert_with(tables(), Direction::PreetiToUnicode, "lk"),
        preeti_to_unicode("lk")
    );
}
