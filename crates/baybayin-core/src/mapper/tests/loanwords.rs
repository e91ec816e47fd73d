use super::*;

#[test]
fn test_localization() {
    assert_eq!(map("fan"), "ᜉᜈ+");
    assert_eq!(map("fan"), map("pan"));
    assert_eq!(map("van"), map("ban"));
    assert_eq!(map("zen"), map("sen"));
    assert_eq!(map("ca"), "ᜃ");
    assert_eq!(map("cu"), "ᜃᜓ");
    assert_eq!(map("F"), "ᜉ+");
}

#[test]
fn test_localized_first_syllable() {
    let fan = map("fan");
    let fun = map("fun");
    assert_eq!(fan.chars().next(), map("pan").chars().next());
    assert_eq!(fun, map("pun"));
}

#[test]
fn test_j_as_dy() {
    assert_eq!(map("ja"), "ᜇ+ᜌ");
    assert_eq!(map("je"), "ᜇ+ᜌᜒ");
    assert_eq!(map("ju"), "ᜇ+ᜌᜓ");
    assert_eq!(map("Jose"), "ᜇ+ᜌᜓᜐᜒ");
    assert_eq!(map_with("ja", VowelCanceller::Ekis, MapOptions::default()), "ᜇxᜌ");
    // no following vowel: left as is
    assert_eq!(map("j"), "j");
}

#[test]
fn test_ch_as_ts() {
    assert_eq!(map("cha"), "ᜆ+ᜐ");
    assert_eq!(map("Che"), "ᜆ+ᜐᜒ");
    assert_eq!(map("chu"), "ᜆ+ᜐᜓ");
    // without a vowel, c localizes to k
    assert_eq!(map("ch"), "ᜃ+ᜑ+");
}

#[test]
fn test_cy_ci() {
    assert_eq!(map("ci"), "ᜐ+ᜒ");
    assert_eq!(map("cy"), "ᜐ+ᜒ");
    assert_eq!(map("cine"), "ᜐ+ᜒᜈᜒ");
}

#[test]
fn test_qu() {
    assert_eq!(map("que"), "ᜃᜒ");
    assert_eq!(map("qui"), "ᜃᜒ");
    assert_eq!(map("Quezon"), "ᜃᜒᜐᜓᜈ+");
    assert_eq!(map("qua"), "ᜃ+ᜏ");
    assert_eq!(map("quo"), "ᜃ+ᜏᜓ");
    assert_eq!(map("q"), "q");
    assert_eq!(map("quu"), "qᜂᜂ");
}

#[test]
fn test_x_initial_seeds_i() {
    assert_eq!(map("x"), "ᜁᜃ+ᜐ+");
    assert_eq!(map("X"), "ᜁᜃ+ᜐ+");
    assert_eq!(map("a-x"), "a-ᜁᜃ+ᜐ+");
}

#[test]
fn test_x_seed_from_previous_vowel() {
    assert_eq!(map("ax"), "aᜀᜃ+ᜐ+");
    assert_eq!(map("ex"), "ᜁᜁᜃ+ᜐ+");
    assert_eq!(map("ox"), "oᜂᜃ+ᜐ+");
    assert_eq!(map("taxi"), "ᜆᜀᜃ+ᜐ+ᜁ");
    assert_ne!(map("x"), map("ax").trim_start_matches('a'));
}

#[test]
fn test_x_after_consonant_has_no_seed() {
    assert_eq!(map("tx"), "ᜆ+ᜃ+ᜐ+");
}

#[test]
fn test_x_uses_active_canceller() {
    assert_eq!(
        map_with("x", VowelCanceller::Pamudpod, MapOptions::default()),
        "ᜁᜃ]ᜐ]"
    );
}

#[test]
fn test_ending_normalization_is_opt_in() {
    assert_eq!(map("John"), "ᜇ+ᜌᜓᜑ+ᜈ+");
    let opts = MapOptions {
        normalize_endings: true,
    };
    assert_eq!(map_with("John", VowelCanceller::Kurus, opts), "ᜇ+ᜌᜓᜈ+");
    assert_eq!(map_with("burgh", VowelCanceller::Kurus, opts), "ᜊᜓᜍ+ᜄ+");
}
