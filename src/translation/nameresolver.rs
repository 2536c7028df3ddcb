use crate::holiday::holidayrecord::HolidayRecord;

pub const DEFAULT_LOCALE: &str = "en_US";

/// Display name of `record` in `locale`.
///
/// Tries the exact locale tag, then [`DEFAULT_LOCALE`], then returns the
/// raw holiday key.
pub fn resolve_name<'a>(record: &'a HolidayRecord, locale: &str) -> &'a str {
    resolve_name_or(record, locale, DEFAULT_LOCALE)
}

/// Like [`resolve_name`], with `fallback_locale` tried before
/// [`DEFAULT_LOCALE`].
pub fn resolve_name_or<'a>(record: &'a HolidayRecord, locale: &str, fallback_locale: &str) -> &'a str {
    let names = record.localized_names();
    names
        .get(locale)
        .or_else(|| names.get(fallback_locale))
        .or_else(|| names.get(DEFAULT_LOCALE))
        .map(String::as_str)
        .unwrap_or_else(|| record.key())
}
