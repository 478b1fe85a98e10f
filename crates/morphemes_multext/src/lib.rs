//! dict_uk tag to MULTEXT-East MSD conversion.
//!
//! The `multext` column of v0.4 dataset rows carries a positional MSD code
//! such as `Ncmsny`. Upstream dict_uk exports describe the same word with
//! colon-separated tags such as `noun:anim:m:v_naz`. [`MsdConverter`] maps
//! the tag form onto the 15-slot MULTEXT-East template, one part of speech
//! at a time, and trims the unused trailing slots.
//!
//! ## Example
//!
//! ```
//! use morphemes_multext::MsdConverter;
//!
//! let converter = MsdConverter::new();
//! assert_eq!(converter.convert_tags(&["noun", "anim", "m", "v_naz"], "кіт"), "Ncmsny");
//! assert_eq!(converter.convert_tags(&["verb", "imperf", "inf"], "робити"), "Vmpn");
//! ```

use std::collections::HashSet;

use regex::Regex;

/// Valid Roman numerals, including the bare empty match.
const ROMAN_NUMERAL: &str = r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$";

/// Slot values keyed by dict_uk tag, in lookup priority order.
const CASES: &[(&str, &str)] = &[
    ("v_naz", "n"),
    ("v_rod", "g"),
    ("v_dav", "d"),
    ("v_zna", "a"),
    ("v_oru", "i"),
    ("v_mis", "l"),
    ("v_kly", "v"),
];

const GENDERS: &[(&str, &str)] = &[("m", "m"), ("f", "f"), ("n", "n")];

const GENDERS_WITH_COMMON: &[(&str, &str)] = &[("m", "m"), ("f", "f"), ("n", "n"), ("c", "c")];

const TENSES: &[(&str, &str)] = &[("pres", "p"), ("futr", "f"), ("past", "s")];

const PERSONS: &[(&str, &str)] = &[("1", "1"), ("2", "2"), ("3", "3")];

const PRONOUN_TYPES: &[(&str, &str)] = &[
    ("pers", "p"),
    ("refl", "x"),
    ("pos", "s"),
    ("dem", "d"),
    ("int", "q"),
    ("rel", "r"),
    ("neg", "z"),
    ("ind", "i"),
    ("gen", "g"),
    ("emph", "h"),
];

const SYNTACTIC_TYPES: &[(&str, &str)] = &[("noun", "n"), ("adj", "a"), ("adv", "r")];

/// Converts dict_uk morphological tags into MULTEXT-East MSD codes.
///
/// ## Example
///
/// ```
/// use morphemes_multext::MsdConverter;
///
/// let converter = MsdConverter::new();
/// let result = converter.convert_text("кіт\tкіт\tnoun:anim:m:v_naz\n");
/// assert_eq!(result.converted, 1);
/// assert_eq!(result.output, "кіт\tкіт\tnoun:anim:m:v_naz\tNcmsny\n");
/// ```
pub struct MsdConverter {
    roman: Regex,
}

/// Outcome of converting a whole dict_uk export.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Converted text, one output line per input line.
    pub output: String,
    /// Number of lines that received an MSD code.
    pub converted: usize,
    /// Lines copied through unchanged because they had fewer than three fields.
    pub skipped: Vec<SkippedLine>,
}

/// A line that could not be converted and was passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line: usize,
    /// The line content after whitespace trimming.
    pub content: String,
}

impl MsdConverter {
    pub fn new() -> Self {
        Self {
            roman: Regex::new(ROMAN_NUMERAL).expect("Invalid Roman numeral pattern"),
        }
    }

    /// Maps one tag list onto the 15-slot MSD template.
    ///
    /// The first tag selects the part of speech. The lemma participates only
    /// where the tags cannot decide a slot: numeral form (digit, Roman,
    /// spelled out), preposition case government and compound detection.
    pub fn convert_tags(&self, tags: &[&str], lemma: &str) -> String {
        let mut msd: [&str; 15] = ["-"; 15];
        let tag_set: HashSet<&str> = tags.iter().copied().collect();
        let base_pos = tags.first().copied().unwrap_or("");
        let is_adjp = tag_set.contains("adjp");
        let is_ordinal = tag_set.contains("adj");

        msd[0] = if tag_set.contains("numr") && tag_set.contains("adj") {
            "M"
        } else if tag_set.contains("pron") {
            "P"
        } else {
            match base_pos {
                "noun" => "N",
                "verb" => "V",
                "adj" | "adjp" => "A",
                "adv" => "R",
                "advp" => "V",
                "prep" => "S",
                "conj" => "C",
                "part" => "Q",
                "intj" | "onomat" => "I",
                "numr" => "M",
                _ => "X",
            }
        };

        match msd[0] {
            "N" => Self::fill_noun(&mut msd, &tag_set),
            "V" => Self::fill_verb(&mut msd, &tag_set, base_pos),
            "A" => Self::fill_adjective(&mut msd, &tag_set, is_adjp),
            "P" => Self::fill_pronoun(&mut msd, &tag_set),
            "R" => Self::fill_adverb(&mut msd, &tag_set),
            "C" => Self::fill_conjunction(&mut msd, &tag_set, lemma),
            "M" => self.fill_numeral(&mut msd, &tag_set, lemma, is_ordinal),
            "S" => Self::fill_preposition(&mut msd, &tag_set, lemma),
            _ => {}
        }

        let joined = msd.concat();
        let trimmed = joined.trim_end_matches('-');
        if trimmed.is_empty() {
            "-".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Converts a dict_uk export line by line.
    ///
    /// Each content line must hold `lemma word tags` separated by whitespace.
    /// Blank lines stay blank. Lines with fewer than three fields are copied
    /// through unchanged and reported in [`Conversion::skipped`].
    pub fn convert_text(&self, input: &str) -> Conversion {
        let mut output = String::new();
        let mut converted = 0;
        let mut skipped = Vec::new();

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                output.push('\n');
                continue;
            }

            match split_entry(line) {
                Some((lemma, word, tag_str)) => {
                    let tags: Vec<&str> = tag_str.split(':').collect();
                    let msd = self.convert_tags(&tags, lemma);
                    output.push_str(&format!("{lemma}\t{word}\t{tag_str}\t{msd}\n"));
                    converted += 1;
                }
                None => {
                    skipped.push(SkippedLine {
                        line: index + 1,
                        content: line.to_string(),
                    });
                    output.push_str(line);
                    output.push('\n');
                }
            }
        }

        Conversion {
            output,
            converted,
            skipped,
        }
    }

    fn fill_noun(msd: &mut [&str; 15], tags: &HashSet<&str>) {
        let proper = ["prop", "geo", "fname", "lname", "pname"];
        msd[1] = if proper.iter().any(|t| tags.contains(t)) {
            "p"
        } else {
            "c"
        };

        // Pluralia tantum entries carry no gender slot.
        if tags.contains("p") && !GENDERS.iter().any(|(tag, _)| tags.contains(tag)) {
            msd[2] = "-";
        } else if let Some(gender) = first_tag_value(GENDERS_WITH_COMMON, tags) {
            msd[2] = gender;
        }

        msd[3] = if tags.contains("p") || tags.contains("ns") {
            "p"
        } else {
            "s"
        };

        if tags.contains("nv") {
            msd[4] = "-";
        } else if let Some(case) = first_tag_value(CASES, tags) {
            msd[4] = case;
        }

        if tags.contains("anim") || tags.contains("unanim") {
            msd[5] = "y";
        } else if tags.contains("inanim") {
            msd[5] = "n";
        }
    }

    fn fill_verb(msd: &mut [&str; 15], tags: &HashSet<&str>, base_pos: &str) {
        msd[1] = "m";

        msd[2] = if tags.contains("imperf") {
            "p"
        } else if tags.contains("perf") {
            "e"
        } else {
            "b"
        };

        msd[3] = if tags.contains("impers") {
            "o"
        } else if tags.contains("inf") {
            "n"
        } else if tags.contains("impr") {
            "m"
        } else if tags.contains("advp") || base_pos == "advp" {
            "g"
        } else {
            "i"
        };

        if let Some(tense) = first_tag_value(TENSES, tags) {
            msd[4] = tense;
        }
        if let Some(person) = first_tag_value(PERSONS, tags) {
            msd[5] = person;
        }

        if tags.contains("p") {
            msd[6] = "p";
        } else if tags.contains("s") {
            msd[6] = "s";
        }

        // Past tense forms inflect for gender.
        if let Some(gender) = first_tag_value(GENDERS, tags) {
            msd[7] = gender;
        }
    }

    fn fill_adjective(msd: &mut [&str; 15], tags: &HashSet<&str>, is_adjp: bool) {
        msd[1] = if is_adjp {
            "p"
        } else if tags.contains("ord") {
            "o"
        } else {
            "f"
        };

        // Only plain adjectives default to positive degree.
        if tags.contains("compc") {
            msd[2] = "c";
        } else if tags.contains("comps") {
            msd[2] = "s";
        } else if msd[1] == "f" {
            msd[2] = "p";
        }

        if let Some(gender) = first_tag_value(GENDERS_WITH_COMMON, tags) {
            msd[3] = gender;
        }

        msd[4] = if tags.contains("p") { "p" } else { "s" };

        if tags.contains("nv") {
            msd[5] = "-";
        } else if let Some(case) = first_tag_value(CASES, tags) {
            msd[5] = case;
        }

        if tags.contains("long") {
            msd[6] = "f";
        } else if tags.contains("short") {
            msd[6] = "s";
        }

        // Accusative agreement distinguishes animate and inanimate heads.
        if tags.contains("v_zna") {
            if tags.contains("ranim") {
                msd[7] = "y";
            } else if tags.contains("rinanim") {
                msd[7] = "n";
            }
        }

        if is_adjp {
            if tags.contains("imperf") {
                msd[8] = "p";
            } else if tags.contains("perf") {
                msd[8] = "e";
            }
            if tags.contains("actv") {
                msd[9] = "a";
            } else if tags.contains("pasv") {
                msd[9] = "p";
            }
            if tags.contains("pres") {
                msd[10] = "p";
            } else if tags.contains("past") {
                msd[10] = "s";
            }
        }
    }

    fn fill_pronoun(msd: &mut [&str; 15], tags: &HashSet<&str>) {
        if let Some(pron_type) = first_tag_value(PRONOUN_TYPES, tags) {
            msd[1] = pron_type;
        }

        // Referent type is only marked on possessives.
        if tags.contains("pos") {
            msd[2] = "s";
        }

        if let Some(person) = first_tag_value(PERSONS, tags) {
            msd[3] = person;
        }

        msd[4] = first_tag_value(GENDERS, tags).unwrap_or("c");

        if tags.contains("anim") || tags.contains("unanim") {
            msd[5] = "y";
        } else if tags.contains("inanim") {
            msd[5] = "n";
        }

        msd[6] = if tags.contains("p") { "p" } else { "s" };

        if tags.contains("nv") {
            msd[7] = "-";
        } else if let Some(case) = first_tag_value(CASES, tags) {
            msd[7] = case;
        }

        if let Some(syn_type) = first_tag_value(SYNTACTIC_TYPES, tags) {
            msd[8] = syn_type;
        }
    }

    fn fill_adverb(msd: &mut [&str; 15], tags: &HashSet<&str>) {
        msd[1] = if tags.contains("compc") {
            "c"
        } else if tags.contains("comps") {
            "s"
        } else {
            "p"
        };
    }

    fn fill_conjunction(msd: &mut [&str; 15], tags: &HashSet<&str>, lemma: &str) {
        msd[1] = if tags.contains("coord") { "c" } else { "s" };
        msd[2] = if lemma.contains('-') || lemma.contains(' ') {
            "c"
        } else {
            "s"
        };
    }

    fn fill_numeral(&self, msd: &mut [&str; 15], tags: &HashSet<&str>, lemma: &str, ordinal: bool) {
        msd[1] = if is_number(lemma) {
            "d"
        } else if self.is_roman(lemma) {
            "r"
        } else {
            "l"
        };

        msd[2] = if ordinal { "o" } else { "c" };

        if let Some(gender) = first_tag_value(GENDERS, tags) {
            msd[3] = gender;
        }

        msd[4] = if tags.contains("s") { "s" } else { "p" };

        if tags.contains("nv") {
            msd[5] = "-";
        } else if let Some(case) = first_tag_value(CASES, tags) {
            msd[5] = case;
        }

        if tags.contains("anim") {
            msd[6] = "y";
        } else if tags.contains("inanim") {
            msd[6] = "n";
        }
    }

    fn fill_preposition(msd: &mut [&str; 15], _tags: &HashSet<&str>, lemma: &str) {
        msd[1] = "p";
        msd[2] = if lemma.contains('-') { "c" } else { "s" };
        msd[3] = case_government(lemma);
    }

    fn is_roman(&self, s: &str) -> bool {
        // Cyrillic І, Х, С and М are indistinguishable from their Latin
        // look-alikes in print, so dictionary entries mix both alphabets.
        let normalized: String = s
            .to_uppercase()
            .chars()
            .map(|c| match c {
                'І' => 'I',
                'Х' => 'X',
                'С' => 'C',
                'М' => 'M',
                other => other,
            })
            .collect();
        self.roman.is_match(&normalized)
    }
}

impl Default for MsdConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_number(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// Case government for prepositions, keyed by lemma. Multi-case entries
/// list every case the preposition can govern.
fn case_government(lemma: &str) -> &'static str {
    match lemma {
        "завдяки" | "всупереч" | "усупереч" | "наперекір" | "услід" | "назустріч"
        | "напротивагу" => "d",
        "во" | "ві" | "про" | "через" | "крізь" | "скрізь" | "об" | "поза" | "між"
        | "незважаючи" => "a",
        "згідно з" | "надо" | "наді" | "передо" | "переді" => "i",
        "при" | "вві" | "уві" => "l",
        "в" | "у" | "ув" | "попри" => "agl",
        "за" | "над" | "перед" | "понад" | "попід" | "під" => "ai",
        "на" | "о" | "по" => "al",
        "з" | "із" => "gi",
        "меж" | "межи" | "поміж" | "поперед" => "agi",
        "повз" => "ag",
        _ => "g",
    }
}

fn first_tag_value(map: &[(&str, &'static str)], tags: &HashSet<&str>) -> Option<&'static str> {
    map.iter()
        .find(|(tag, _)| tags.contains(tag))
        .map(|&(_, value)| value)
}

/// Splits a content line into lemma, word and the remaining tag string,
/// collapsing whitespace between the first two fields only.
fn split_entry(line: &str) -> Option<(&str, &str, &str)> {
    let (lemma, rest) = split_field(line)?;
    let (word, tags) = split_field(rest)?;
    if tags.is_empty() {
        None
    } else {
        Some((lemma, word, tags))
    }
}

fn split_field(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    Some((&s[..end], s[end..].trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert(tags: &[&str], lemma: &str) -> String {
        MsdConverter::new().convert_tags(tags, lemma)
    }

    #[test]
    fn test_common_noun() {
        assert_eq!(convert(&["noun", "anim", "m", "v_naz"], "кіт"), "Ncmsny");
    }

    #[test]
    fn test_proper_noun_inanimate() {
        assert_eq!(
            convert(&["noun", "inanim", "geo", "m", "v_naz"], "Київ"),
            "Npmsnn"
        );
    }

    #[test]
    fn test_pluralia_tantum_has_no_gender() {
        assert_eq!(convert(&["noun", "p", "v_naz"], "двері"), "Nc-pn");
    }

    #[test]
    fn test_infinitive() {
        assert_eq!(convert(&["verb", "imperf", "inf"], "робити"), "Vmpn");
    }

    #[test]
    fn test_past_tense_keeps_inner_slots() {
        assert_eq!(
            convert(&["verb", "imperf", "past", "m"], "робив"),
            "Vmpis--m"
        );
    }

    #[test]
    fn test_biaspectual_verb() {
        assert_eq!(convert(&["verb", "inf"], "атакувати"), "Vmbn");
    }

    #[test]
    fn test_impersonal_verb() {
        assert_eq!(convert(&["verb", "imperf", "impers"], "щастити"), "Vmpo");
    }

    #[test]
    fn test_gerund_maps_to_verb() {
        assert_eq!(convert(&["advp", "imperf"], "йдучи"), "Vmpg");
    }

    #[test]
    fn test_plain_adjective() {
        assert_eq!(convert(&["adj", "m", "v_naz"], "білий"), "Afpmsn");
    }

    #[test]
    fn test_participle_has_no_degree() {
        assert_eq!(
            convert(&["adj", "m", "v_naz", "adjp", "perf", "pasv"], "зроблений"),
            "Ap-msn--ep"
        );
    }

    #[test]
    fn test_ordinal_counts_as_numeral() {
        assert_eq!(convert(&["numr", "adj", "m", "v_naz"], "перший"), "Mlompn");
    }

    #[test]
    fn test_personal_pronoun() {
        assert_eq!(convert(&["pron", "pers", "1", "s", "v_naz"], "я"), "Pp-1c-sn");
    }

    #[test]
    fn test_possessive_pronoun_referent_slot() {
        assert_eq!(convert(&["pron", "pos", "m", "v_naz"], "мій"), "Pss-m-sn");
    }

    #[test]
    fn test_adverb_degrees() {
        assert_eq!(convert(&["adv"], "швидко"), "Rp");
        assert_eq!(convert(&["adv", "compc"], "швидше"), "Rc");
    }

    #[test]
    fn test_conjunctions() {
        assert_eq!(convert(&["conj", "coord"], "і"), "Ccs");
        assert_eq!(convert(&["conj", "subord"], "якщо"), "Css");
        assert_eq!(convert(&["conj", "coord"], "тому-то"), "Ccc");
    }

    #[test]
    fn test_spelled_out_numeral() {
        assert_eq!(convert(&["numr", "v_naz"], "п'ять"), "Mlc-pn");
    }

    #[test]
    fn test_digit_numeral() {
        assert_eq!(convert(&["numr"], "5"), "Mdc-p");
    }

    #[test]
    fn test_cyrillic_roman_numeral() {
        // Lemma uses Cyrillic І and Х.
        assert_eq!(convert(&["numr"], "ІХ"), "Mrc-p");
    }

    #[test]
    fn test_preposition_case_government() {
        assert_eq!(convert(&["prep"], "перед"), "Spsai");
        assert_eq!(convert(&["prep"], "завдяки"), "Spsd");
        assert_eq!(convert(&["prep"], "в"), "Spsagl");
        assert_eq!(convert(&["prep"], "до"), "Spsg");
    }

    #[test]
    fn test_compound_preposition() {
        assert_eq!(convert(&["prep"], "із-за"), "Spcg");
    }

    #[test]
    fn test_bare_categories() {
        assert_eq!(convert(&["intj"], "ой"), "I");
        assert_eq!(convert(&["part"], "же"), "Q");
        assert_eq!(convert(&["insert"], "мабуть"), "X");
        assert_eq!(convert(&["mystery"], "щось"), "X");
    }

    #[test]
    fn test_convert_text_mixed_lines() {
        let converter = MsdConverter::new();
        let input = "кіт\tкіт\tnoun:anim:m:v_naz\n\nbadline\nбілий білий adj:m:v_naz\n";

        let result = converter.convert_text(input);

        assert_eq!(
            result.output,
            "кіт\tкіт\tnoun:anim:m:v_naz\tNcmsny\n\nbadline\nбілий\tбілий\tadj:m:v_naz\tAfpmsn\n"
        );
        assert_eq!(result.converted, 2);
        assert_eq!(
            result.skipped,
            vec![SkippedLine {
                line: 3,
                content: "badline".to_string(),
            }]
        );
    }

    #[test]
    fn test_convert_text_splits_on_first_two_gaps_only() {
        let converter = MsdConverter::new();
        let result = converter.convert_text("кіт  кота noun:anim:m:v_rod\n");
        assert_eq!(result.output, "кіт\tкота\tnoun:anim:m:v_rod\tNcmsgy\n");

        // Anything after the second gap belongs to the tag string verbatim,
        // so "m extra" is one tag and no gender is recognised.
        let result = converter.convert_text("кіт кота noun:anim:m extra\n");
        assert_eq!(result.output, "кіт\tкота\tnoun:anim:m extra\tNc-s-y\n");
    }

    #[test]
    fn test_roman_detection() {
        let converter = MsdConverter::new();
        assert!(converter.is_roman("XIV"));
        assert!(converter.is_roman("іх"));
        assert!(!converter.is_roman("ABC"));
        assert!(!converter.is_roman("п'ять"));
    }
}
