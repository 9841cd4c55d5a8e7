// Russian number-word tables.

use numwords_core::{NumberKind, Sign};

use NumberKind::*;

/// Cardinal and structural words in their lookup form (lower case, `ё`
/// written as `е`).
pub(crate) const CARDINALS: &[(&str, NumberKind, u128)] = &[
    ("ноль", Zero, 0),
    ("нуль", Zero, 0),
    // Units, with feminine and neuter forms
    ("один", Unit, 1),
    ("одна", Unit, 1),
    ("одно", Unit, 1),
    ("два", Unit, 2),
    ("две", Unit, 2),
    ("три", Unit, 3),
    ("четыре", Unit, 4),
    ("пять", Unit, 5),
    ("шесть", Unit, 6),
    ("семь", Unit, 7),
    ("восемь", Unit, 8),
    ("девять", Unit, 9),
    // Teens
    ("десять", Teen, 10),
    ("одиннадцать", Teen, 11),
    ("двенадцать", Teen, 12),
    ("тринадцать", Teen, 13),
    ("четырнадцать", Teen, 14),
    ("пятнадцать", Teen, 15),
    ("пятьнадцать", Teen, 15),
    ("шестнадцать", Teen, 16),
    ("семнадцать", Teen, 17),
    ("восемнадцать", Teen, 18),
    ("девятнадцать", Teen, 19),
    // Tens
    ("двадцать", Ten, 20),
    ("тридцать", Ten, 30),
    ("сорок", Ten, 40),
    ("пятьдесят", Ten, 50),
    ("шестьдесят", Ten, 60),
    ("семьдесят", Ten, 70),
    ("восемьдесят", Ten, 80),
    ("девяносто", Ten, 90),
    // Hundreds
    ("сто", Hundred, 100),
    ("двести", Hundred, 200),
    ("триста", Hundred, 300),
    ("четыреста", Hundred, 400),
    ("пятьсот", Hundred, 500),
    ("шестьсот", Hundred, 600),
    ("семьсот", Hundred, 700),
    ("восемьсот", Hundred, 800),
    ("девятьсот", Hundred, 900),
    // Counting noun: одна сотня, двенадцать сотен
    ("сотня", Scale, 100),
    ("сотни", Scale, 100),
    ("сотен", Scale, 100),
    ("сотню", Scale, 100),
    ("сотней", Scale, 100),
    // Scales
    ("тысяча", Scale, 1_000),
    ("тысячи", Scale, 1_000),
    ("тысяч", Scale, 1_000),
    ("тысячу", Scale, 1_000),
    ("тысячей", Scale, 1_000),
    ("миллион", Scale, 1_000_000),
    ("миллиона", Scale, 1_000_000),
    ("миллионов", Scale, 1_000_000),
    ("миллионом", Scale, 1_000_000),
    ("миллиард", Scale, 1_000_000_000),
    ("миллиарда", Scale, 1_000_000_000),
    ("миллиардов", Scale, 1_000_000_000),
    ("миллиардом", Scale, 1_000_000_000),
    ("триллион", Scale, 1_000_000_000_000),
    ("триллиона", Scale, 1_000_000_000_000),
    ("триллионов", Scale, 1_000_000_000_000),
    ("триллионом", Scale, 1_000_000_000_000),
    // Structural words
    ("точка", DecimalMarker, 0),
    ("запятая", DecimalMarker, 0),
    ("целая", DecimalMarker, 0),
    ("целых", DecimalMarker, 0),
    ("плюс", NumberKind::Sign(Sign::Plus), 0),
    ("минус", NumberKind::Sign(Sign::Minus), 0),
    ("и", Conjunction, 0),
];

/// Words that are also pronouns (`он один`) or nouns (`он нуль`).
pub(crate) const AMBIGUOUS_ALONE: &[&str] = &["один", "одна", "одно", "нуль"];

/// Ordinal stems. The full word is a stem followed by an adjective ending.
pub(crate) const ORDINAL_STEMS: &[(&str, NumberKind, u128)] = &[
    ("перв", OrdinalUnit, 1),
    ("втор", OrdinalUnit, 2),
    ("трет", OrdinalUnit, 3),
    ("четверт", OrdinalUnit, 4),
    ("пят", OrdinalUnit, 5),
    ("шест", OrdinalUnit, 6),
    ("седьм", OrdinalUnit, 7),
    ("восьм", OrdinalUnit, 8),
    ("девят", OrdinalUnit, 9),
    ("десят", OrdinalTeen, 10),
    ("одиннадцат", OrdinalTeen, 11),
    ("двенадцат", OrdinalTeen, 12),
    ("тринадцат", OrdinalTeen, 13),
    ("четырнадцат", OrdinalTeen, 14),
    ("пятнадцат", OrdinalTeen, 15),
    ("шестнадцат", OrdinalTeen, 16),
    ("семнадцат", OrdinalTeen, 17),
    ("восемнадцат", OrdinalTeen, 18),
    ("девятнадцат", OrdinalTeen, 19),
    ("двадцат", OrdinalTen, 20),
    ("тридцат", OrdinalTen, 30),
    ("сороков", OrdinalTen, 40),
    ("пятидесят", OrdinalTen, 50),
    ("шестидесят", OrdinalTen, 60),
    ("семидесят", OrdinalTen, 70),
    ("восьмидесят", OrdinalTen, 80),
    ("девяност", OrdinalTen, 90),
    ("сот", OrdinalHundred, 100),
    ("двухсот", OrdinalHundred, 200),
    ("трехсот", OrdinalHundred, 300),
    ("четырехсот", OrdinalHundred, 400),
    ("пятисот", OrdinalHundred, 500),
    ("шестисот", OrdinalHundred, 600),
    ("семисот", OrdinalHundred, 700),
    ("восьмисот", OrdinalHundred, 800),
    ("девятисот", OrdinalHundred, 900),
    ("тысячн", OrdinalScale, 1_000),
    ("миллионн", OrdinalScale, 1_000_000),
    ("миллиардн", OrdinalScale, 1_000_000_000),
    ("триллионн", OrdinalScale, 1_000_000_000_000),
];

/// Hard adjective endings and how many trailing characters of the word are
/// echoed as the rendered suffix (`пятого` → `5-го`, `пятый` → `5-й`).
pub(crate) const HARD_ENDINGS: &[(&str, usize)] = &[
    ("ый", 1),
    ("ой", 1),
    ("ая", 1),
    ("ого", 2),
    ("ому", 2),
    ("ым", 1),
    ("ую", 1),
    ("ыми", 2),
    ("ом", 1),
    ("ое", 1),
    ("ые", 1),
    ("ых", 1),
];

/// Soft endings of `третий`.
pub(crate) const SOFT_ENDINGS: &[(&str, usize)] = &[
    ("ий", 1),
    ("ья", 1),
    ("ьей", 1),
    ("ьего", 2),
    ("ьему", 2),
    ("ьим", 1),
    ("ью", 1),
    ("ьими", 2),
    ("ьем", 1),
    ("ье", 1),
    ("ьи", 1),
    ("ьих", 1),
];

/// The one stem declined with soft endings.
pub(crate) const SOFT_STEM: &str = "трет";
