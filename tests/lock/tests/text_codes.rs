//! Character codes feeding ordered search: the codes of a sorted ASCII
//! string form a sorted sequence.

use myutils_search::search;
use myutils_text::{ascii_codes, code_points};

#[test]
fn sorted_alphabet_codes_are_searchable() {
    let codes: Vec<u32> = code_points("abcdefghijklmnopqrstuvwxyz").collect();
    assert_eq!(search(&codes, &u32::from('m')), Some(12));
    assert_eq!(search(&codes, &u32::from('A')), None);
}

#[test]
fn strict_and_lazy_codes_agree_on_ascii() {
    let text = "The quick brown fox";
    let strict: Vec<u32> = ascii_codes(text).unwrap().into_iter().map(u32::from).collect();
    let lazy: Vec<u32> = code_points(text).collect();
    assert_eq!(strict, lazy);
}
