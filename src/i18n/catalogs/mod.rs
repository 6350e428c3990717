//! Built-in message catalogs, one module per non-canonical locale.
//!
//! Entries are stored as `(key, translation)` pairs keyed by the English
//! source text. The canonical locale (`enu`) has no table: its keys already
//! are the rendered text.

mod chs;
mod cht;
mod deu;
mod esn;
mod fra;
mod ita;
mod jpn;
mod kor;
mod ptg;

pub(crate) const ENU: &[(&str, &str)] = &[];
pub(crate) const DEU: &[(&str, &str)] = deu::ENTRIES;
pub(crate) const ESN: &[(&str, &str)] = esn::ENTRIES;
pub(crate) const FRA: &[(&str, &str)] = fra::ENTRIES;
pub(crate) const ITA: &[(&str, &str)] = ita::ENTRIES;
pub(crate) const JPN: &[(&str, &str)] = jpn::ENTRIES;
pub(crate) const KOR: &[(&str, &str)] = kor::ENTRIES;
pub(crate) const PTG: &[(&str, &str)] = ptg::ENTRIES;
pub(crate) const CHS: &[(&str, &str)] = chs::ENTRIES;
pub(crate) const CHT: &[(&str, &str)] = cht::ENTRIES;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;

    fn lookup(catalog: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
        catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    #[test]
    fn test_canonical_catalog_is_empty() {
        assert!(ENU.is_empty());
    }

    #[test]
    fn test_invalid_marker_translations() {
        assert_eq!(lookup(DEU, keys::INVALID), Some("Ungültig"));
        assert_eq!(lookup(JPN, keys::INVALID), Some("無効"));
        assert_eq!(lookup(FRA, keys::INVALID), Some("Non valide"));
    }

    #[test]
    fn test_save_error_marker_translations() {
        assert_eq!(lookup(ESN, keys::SAVE_ERROR), Some("Error al guardar"));
        assert_eq!(lookup(CHS, keys::SAVE_ERROR), Some("保存错误"));
        assert_eq!(lookup(CHT, keys::SAVE_ERROR), Some("儲存錯誤"));
    }

    #[test]
    fn test_translations_differ_from_source() {
        for catalog in [DEU, ESN, FRA, ITA, JPN, KOR, PTG, CHS, CHT] {
            let translated = lookup(catalog, keys::MAY_FAIL).expect("key should be present");
            assert_ne!(translated, keys::MAY_FAIL);
        }
    }
}
