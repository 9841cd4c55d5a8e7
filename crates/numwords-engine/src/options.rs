// Options controlling alpha2digit.

/// Options for [`crate::alpha2digit`].
///
/// With the `serde` feature the struct deserializes from a partial table;
/// missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanOptions {
    /// Let a tens word right after a lone digit absorb the following unit
    /// (`two twenty five` → `2 25`). When `false`, digit-by-digit dictation
    /// is assumed and the run stays split (`2 20 5`).
    pub relaxed: bool,

    /// Ordinals whose value is at or below this are left as words.
    pub ordinal_threshold: u64,

    /// Recognize a leading plus/minus word as a sign.
    pub signed: bool,

    /// Group long runs of single digits like a phone number.
    pub group_phone_numbers: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            relaxed: false,
            ordinal_threshold: 3,
            signed: true,
            group_phone_numbers: true,
        }
    }
}
