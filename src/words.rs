// 🔤 Number → Arabic words
// Spells amounts in Modern Standard Arabic with noun agreement
//
// Three entry points:
// - spell_number: full range (billions), "فاصلة" for the fraction
// - spell_number_with_currency_label: same, plus an agreeing currency noun
// - spell_number_simple: on-screen preview (no billions), "من مئة" fraction

use crate::currency::CurrencyEra;
use crate::numerals::round_half_up;

// ============================================================================
// LEXICON
// ============================================================================

const ZERO: &str = "صفر";
const NEGATIVE: &str = "سالب";
const POINT: &str = "فاصلة";
const OUT_OF_HUNDRED: &str = "من مئة";
const FEMININE_ONE: &str = "واحدة";

/// 0-19, teen forms included
const ONES: [&str; 20] = [
    "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة",
    "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
    "أحد عشر", "اثنا عشر", "ثلاثة عشر", "أربعة عشر", "خمسة عشر",
    "ستة عشر", "سبعة عشر", "ثمانية عشر", "تسعة عشر",
];

const TENS: [&str; 10] = [
    "", "", "عشرون", "ثلاثون", "أربعون", "خمسون",
    "ستون", "سبعون", "ثمانون", "تسعون",
];

const HUNDREDS: [&str; 10] = [
    "", "مئة", "مئتان", "ثلاثمئة", "أربعمئة", "خمسمئة",
    "ستمئة", "سبعمئة", "ثمانمئة", "تسعمئة",
];

const BILLIONS: NounForms = NounForms {
    singular: "مليار",
    dual: "ملياران",
    plural: "مليارات",
};

const MILLIONS: NounForms = NounForms {
    singular: "مليون",
    dual: "مليونان",
    plural: "ملايين",
};

const THOUSANDS: NounForms = NounForms {
    singular: "ألف",
    dual: "ألفان",
    plural: "آلاف",
};

/// The preview has always used the oblique dual here.
/// Kept apart from THOUSANDS until someone decides which one is right.
const THOUSANDS_PREVIEW: NounForms = NounForms {
    dual: "ألفين",
    ..THOUSANDS
};

const OLD_POUNDS: NounForms = NounForms {
    singular: "ليرة سورية قديمة",
    dual: "ليرتان سوريتان قديمتان",
    plural: "ليرات سورية قديمة",
};

const NEW_POUNDS: NounForms = NounForms {
    singular: "ليرة سورية جديدة",
    dual: "ليرتان سوريتان جديدتان",
    plural: "ليرات سورية جديدة",
};

// ============================================================================
// AGREEMENT
// ============================================================================

/// Grammatical number a counted noun takes in Arabic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammaticalNumber {
    /// 1: the bare noun, no numeral
    Singular,

    /// 2: the bare dual noun
    Dual,

    /// 3-10: numeral + plural noun
    Plural,

    /// 0 and 11+: numeral + singular (accusative) noun
    Counted,
}

impl GrammaticalNumber {
    pub fn of(count: u64) -> Self {
        match count {
            1 => GrammaticalNumber::Singular,
            2 => GrammaticalNumber::Dual,
            3..=10 => GrammaticalNumber::Plural,
            _ => GrammaticalNumber::Counted,
        }
    }
}

/// Lexical forms of a noun that follows a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounForms {
    pub singular: &'static str,
    pub dual: &'static str,
    pub plural: &'static str,
}

impl NounForms {
    /// Currency noun phrase for an era
    pub fn currency(era: CurrencyEra) -> Self {
        match era {
            CurrencyEra::Old => OLD_POUNDS,
            CurrencyEra::New => NEW_POUNDS,
        }
    }

    /// Noun phrase for `count` items, with `spelled` as the numeral
    /// when the agreement class needs one
    fn phrase(&self, count: u64, spelled: impl FnOnce() -> String) -> String {
        match GrammaticalNumber::of(count) {
            GrammaticalNumber::Singular => self.singular.to_string(),
            GrammaticalNumber::Dual => self.dual.to_string(),
            GrammaticalNumber::Plural => format!("{} {}", spelled(), self.plural),
            GrammaticalNumber::Counted => format!("{} {}", spelled(), self.singular),
        }
    }
}

// ============================================================================
// SUB-FORMATTERS
// ============================================================================

/// 0-99
fn spell_tens(num: u64) -> String {
    if num < 20 {
        return ONES[num as usize].to_string();
    }

    let ten = (num / 10) as usize;
    let one = (num % 10) as usize;

    if one == 0 {
        TENS[ten].to_string()
    } else {
        // units are named before tens
        format!("{} و{}", ONES[one], TENS[ten])
    }
}

/// 0-999
fn spell_hundreds(num: u64) -> String {
    let hundred = (num / 100) as usize;
    let remainder = num % 100;

    if hundred == 0 {
        return spell_tens(remainder);
    }

    if remainder == 0 {
        return HUNDREDS[hundred].to_string();
    }

    format!("{} و{}", HUNDREDS[hundred], spell_tens(remainder))
}

/// Numeral in front of a magnitude noun. Only the billions band can
/// exceed 999; those counts go through the full decomposition.
fn spell_count(count: u64) -> String {
    if count < 1000 {
        spell_hundreds(count)
    } else {
        spell_integer(count)
    }
}

fn spell_integer(num: u64) -> String {
    if num == 0 {
        return ZERO.to_string();
    }

    let billions = num / 1_000_000_000;
    let millions = (num % 1_000_000_000) / 1_000_000;
    let thousands = (num % 1_000_000) / 1_000;
    let remainder = num % 1000;

    let mut parts = Vec::new();

    for (count, forms) in [(billions, BILLIONS), (millions, MILLIONS), (thousands, THOUSANDS)] {
        if count > 0 {
            parts.push(forms.phrase(count, || spell_count(count)));
        }
    }

    if remainder > 0 {
        parts.push(spell_hundreds(remainder));
    }

    parts.join(" و")
}

/// Fractional part rounded half-up to two decimals, as 1-99.
/// None when it rounds to 0 (or carries over to a whole unit).
fn fraction_hundredths(fraction: f64) -> Option<u64> {
    if !(fraction > 0.0) {
        return None;
    }

    let (whole, hundredths) = round_half_up(fraction, 2);
    if whole != "0" {
        return None;
    }

    match hundredths.parse::<u64>().ok()? {
        0 => None,
        n => Some(n),
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Spell any number in Arabic words.
///
/// Negative values get a "سالب" prefix; the fraction is rounded to two
/// decimals and read after "فاصلة".
///
/// ```
/// use lira_words::spell_number;
///
/// assert_eq!(spell_number(2000.0), "ألفان");
/// assert_eq!(spell_number(-5.0), "سالب خمسة");
/// ```
pub fn spell_number(value: f64) -> String {
    if value < 0.0 {
        return format!("{} {}", NEGATIVE, spell_number(-value));
    }

    let integer_part = value.floor();
    let mut result = spell_integer(integer_part as u64);

    if let Some(hundredths) = fraction_hundredths(value - integer_part) {
        result.push(' ');
        result.push_str(POINT);
        result.push(' ');
        result.push_str(&spell_number(hundredths as f64));
    }

    result
}

/// Spell an amount followed by the pound noun of `era`, agreeing in number.
///
/// For 0, 1 and 2 the phrase is fixed and the fraction is not read.
pub fn spell_number_with_currency_label(value: f64, era: CurrencyEra) -> String {
    let forms = NounForms::currency(era);
    let integer_part = value.floor();

    if !(integer_part >= 0.0) {
        return format!("{} {}", spell_number(value), forms.singular);
    }

    match integer_part as u64 {
        0 => format!("{} {}", ZERO, forms.singular),
        1 => format!("{} {}", forms.singular, FEMININE_ONE),
        count => forms.phrase(count, || spell_number(value)),
    }
}

/// Boolean-flag form of [`spell_number_with_currency_label`] (true = new pound)
pub fn spell_number_with_currency(value: f64, is_new: bool) -> String {
    spell_number_with_currency_label(value, CurrencyEra::from_is_new(is_new))
}

/// Short spelling for live previews.
///
/// Only millions, thousands and units are read: anything in the billions
/// band is dropped. The fraction is read as "و<n> من مئة". Zero, negative
/// and NaN input read as "صفر".
///
/// A fraction with no integer part reads "وخمسة من مئة" (0.05), with no
/// leading space; the web page this replaces emitted " وخمسة من مئة".
pub fn spell_number_simple(value: f64) -> String {
    if !(value > 0.0) {
        return ZERO.to_string();
    }

    let integer_part = value.floor();
    let num = integer_part as u64;

    let millions = (num % 1_000_000_000) / 1_000_000;
    let thousands = (num % 1_000_000) / 1_000;
    let remainder = num % 1000;

    let mut parts = Vec::new();

    for (count, forms) in [(millions, MILLIONS), (thousands, THOUSANDS_PREVIEW)] {
        if count > 0 {
            parts.push(forms.phrase(count, || spell_hundreds(count)));
        }
    }

    if remainder > 0 {
        parts.push(spell_hundreds(remainder));
    }

    let mut result = parts.join(" و");

    if let Some(hundredths) = fraction_hundredths(value - integer_part) {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(&format!("و{} {}", spell_hundreds(hundredths), OUT_OF_HUNDRED));
    }

    if result.is_empty() {
        ZERO.to_string()
    } else {
        result
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(spell_number(0.0), "صفر");
        assert_eq!(spell_number_simple(0.0), "صفر");
    }

    #[test]
    fn test_ones_and_teens() {
        assert_eq!(spell_number(1.0), "واحد");
        assert_eq!(spell_number(2.0), "اثنان");
        assert_eq!(spell_number(10.0), "عشرة");
        assert_eq!(spell_number(11.0), "أحد عشر");
        assert_eq!(spell_number(19.0), "تسعة عشر");
    }

    #[test]
    fn test_tens_units_first() {
        assert_eq!(spell_number(20.0), "عشرون");
        assert_eq!(spell_number(21.0), "واحد وعشرون");
        assert_eq!(spell_number(99.0), "تسعة وتسعون");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell_number(100.0), "مئة");
        assert_eq!(spell_number(200.0), "مئتان");
        assert_eq!(spell_number(101.0), "مئة وواحد");
        assert_eq!(spell_number(999.0), "تسعمئة وتسعة وتسعون");
    }

    #[test]
    fn test_thousands_agreement() {
        assert_eq!(spell_number(1000.0), "ألف");
        assert_eq!(spell_number(2000.0), "ألفان");
        assert_eq!(spell_number(5000.0), "خمسة آلاف");
        assert_eq!(spell_number(10000.0), "عشرة آلاف");
        assert_eq!(spell_number(15000.0), "خمسة عشر ألف");
        assert_eq!(spell_number(1001.0), "ألف وواحد");
    }

    #[test]
    fn test_millions_and_billions() {
        assert_eq!(spell_number(1_000_000.0), "مليون");
        assert_eq!(spell_number(2_000_000.0), "مليونان");
        assert_eq!(spell_number(3_000_000.0), "ثلاثة ملايين");
        assert_eq!(spell_number(1_000_000_000.0), "مليار");
        assert_eq!(spell_number(2_500_000_000.0), "ملياران وخمسمئة مليون");
        assert_eq!(spell_number(15_000_000_000.0), "خمسة عشر مليار");
        assert_eq!(
            spell_number(1_234_567.0),
            "مليون ومئتان وأربعة وثلاثون ألف وخمسمئة وسبعة وستون"
        );
    }

    #[test]
    fn test_billions_count_above_999() {
        assert_eq!(spell_number(1_000_000_000_000.0), "ألف مليار");
    }

    #[test]
    fn test_negative_prefix() {
        assert_eq!(spell_number(-5.0), "سالب خمسة");
        assert_eq!(spell_number(-5.0), format!("سالب {}", spell_number(5.0)));
    }

    #[test]
    fn test_fraction_point() {
        assert_eq!(spell_number(1.5), "واحد فاصلة خمسون");
        assert_eq!(spell_number(12.34), "اثنا عشر فاصلة أربعة وثلاثون");
        assert_eq!(spell_number(0.25), "صفر فاصلة خمسة وعشرون");
        assert_eq!(spell_number(3.125), "ثلاثة فاصلة ثلاثة عشر");
    }

    #[test]
    fn test_fraction_words_match_displayed_digits() {
        use crate::numerals::format_amount;

        assert_eq!(format_amount(3.125, false, 2), "3.13");
        assert_eq!(spell_number(3.125), "ثلاثة فاصلة ثلاثة عشر");
        assert_eq!(format_amount(12.995, false, 2), "12.99");
        assert_eq!(spell_number(12.995), "اثنا عشر فاصلة تسعة وتسعون");
    }

    #[test]
    fn test_fraction_rounding() {
        assert_eq!(fraction_hundredths(0.5), Some(50));
        assert_eq!(fraction_hundredths(0.125), Some(13));
        assert_eq!(fraction_hundredths(0.001), None);
        assert_eq!(fraction_hundredths(0.999), None);
        assert_eq!(fraction_hundredths(0.0), None);
        assert_eq!(fraction_hundredths(f64::NAN), None);
        // 3.0 rounds away, no suffix
        assert_eq!(spell_number(3.001), "ثلاثة");
    }

    #[test]
    fn test_grammatical_number() {
        assert_eq!(GrammaticalNumber::of(0), GrammaticalNumber::Counted);
        assert_eq!(GrammaticalNumber::of(1), GrammaticalNumber::Singular);
        assert_eq!(GrammaticalNumber::of(2), GrammaticalNumber::Dual);
        assert_eq!(GrammaticalNumber::of(3), GrammaticalNumber::Plural);
        assert_eq!(GrammaticalNumber::of(10), GrammaticalNumber::Plural);
        assert_eq!(GrammaticalNumber::of(11), GrammaticalNumber::Counted);
    }

    #[test]
    fn test_currency_fixed_phrases() {
        assert_eq!(spell_number_with_currency_label(0.0, CurrencyEra::New), "صفر ليرة سورية جديدة");
        assert_eq!(spell_number_with_currency_label(1.0, CurrencyEra::New), "ليرة سورية جديدة واحدة");
        assert_eq!(spell_number_with_currency_label(1.0, CurrencyEra::Old), "ليرة سورية قديمة واحدة");
        assert_eq!(spell_number_with_currency_label(2.0, CurrencyEra::Old), "ليرتان سوريتان قديمتان");
        assert_eq!(spell_number_with_currency_label(2.0, CurrencyEra::New), "ليرتان سوريتان جديدتان");
    }

    #[test]
    fn test_currency_fixed_phrases_drop_fraction() {
        assert_eq!(spell_number_with_currency_label(0.5, CurrencyEra::New), "صفر ليرة سورية جديدة");
        assert_eq!(spell_number_with_currency_label(2.75, CurrencyEra::Old), "ليرتان سوريتان قديمتان");
    }

    #[test]
    fn test_currency_plural_and_counted() {
        assert_eq!(spell_number_with_currency_label(5.0, CurrencyEra::New), "خمسة ليرات سورية جديدة");
        assert_eq!(spell_number_with_currency_label(10.0, CurrencyEra::Old), "عشرة ليرات سورية قديمة");
        assert_eq!(spell_number_with_currency_label(11.0, CurrencyEra::Old), "أحد عشر ليرة سورية قديمة");
        assert_eq!(spell_number_with_currency_label(100.0, CurrencyEra::New), "مئة ليرة سورية جديدة");
        assert_eq!(
            spell_number_with_currency_label(12.5, CurrencyEra::New),
            "اثنا عشر فاصلة خمسون ليرة سورية جديدة"
        );
    }

    #[test]
    fn test_currency_negative_falls_through() {
        assert_eq!(
            spell_number_with_currency_label(-5.0, CurrencyEra::New),
            "سالب خمسة ليرة سورية جديدة"
        );
    }

    #[test]
    fn test_currency_bool_flag() {
        assert_eq!(spell_number_with_currency(1.0, true), "ليرة سورية جديدة واحدة");
        assert_eq!(spell_number_with_currency(1.0, false), "ليرة سورية قديمة واحدة");
    }

    #[test]
    fn test_simple_bands() {
        assert_eq!(spell_number_simple(5000.0), "خمسة آلاف");
        assert_eq!(spell_number_simple(1500.0), "ألف وخمسمئة");
        assert_eq!(spell_number_simple(3_000_005.0), "ثلاثة ملايين وخمسة");
        assert_eq!(spell_number_simple(12_000.0), "اثنا عشر ألف");
    }

    #[test]
    fn test_simple_drops_billions() {
        assert_eq!(spell_number_simple(2_000_000_000.0), "صفر");
        assert_eq!(spell_number_simple(1_000_000_001.0), "واحد");
        assert!(!spell_number_simple(7_250_000_000.0).contains("مليار"));
    }

    #[test]
    fn test_thousands_dual_differs_between_full_and_preview() {
        // ألفان (nominative) in the full formatter, ألفين (oblique) in the preview
        assert_eq!(spell_number(2000.0), "ألفان");
        assert_eq!(spell_number_simple(2000.0), "ألفين");
        assert_ne!(spell_number(2000.0), spell_number_simple(2000.0));
    }

    #[test]
    fn test_simple_fraction() {
        assert_eq!(spell_number_simple(12.5), "اثنا عشر وخمسون من مئة");
        assert_eq!(spell_number_simple(0.05), "وخمسة من مئة");
        assert_eq!(spell_number_simple(7.001), "سبعة");
    }

    #[test]
    fn test_simple_non_positive() {
        assert_eq!(spell_number_simple(-12.0), "صفر");
        assert_eq!(spell_number_simple(f64::NAN), "صفر");
    }

    #[test]
    fn test_non_finite_does_not_panic() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN] {
            let _ = spell_number(value);
            let _ = spell_number_simple(value);
            let _ = spell_number_with_currency_label(value, CurrencyEra::Old);
        }
    }
}
