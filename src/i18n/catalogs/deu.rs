use crate::i18n::keys;

/// German catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "Ungültig"),
    (keys::SAVE_ERROR, "Speicherfehler"),
    (keys::VALID_INPUT, "Gültige Eingabe"),
    (keys::VALID_TYPE, "Gültiger Eingabetyp"),
    (keys::TYPE_MISMATCH, "Erwartet wurde einer von {allowed}, gefunden wurde {found}"),
    (keys::INVALID_ENUM_VALUE, "{value} ist kein gültiger Wert von {enum_name}"),
    (keys::NOT_IN_RANGE, "{value} liegt nicht im Bereich {min_value} bis {max_value}"),
    (keys::GREATER_THAN, "{value} muss größer als {min_value} sein"),
    (keys::GREATER_THAN_OR_EQUAL, "{value} muss größer oder gleich {min_value} sein"),
    (keys::LESS_THAN, "{value} muss kleiner als {max_value} sein"),
    (keys::LESS_THAN_OR_EQUAL, "{value} muss kleiner oder gleich {max_value} sein"),
    (keys::POSITIVE, "{value} muss positiv sein"),
    (keys::NEGATIVE, "{value} muss negativ sein"),
    (keys::NON_NEGATIVE, "{value} darf nicht negativ sein"),
    (keys::NON_ZERO, "{value} darf nicht null sein"),
    (keys::INVALID_VALUE, "{value} ist keiner der erwarteten Werte: {expected_values}"),
    (keys::MIN_MORE_THAN_MAX, "Minimum {min_value} ist größer als Maximum {max_value}"),
    (keys::UNSUPPORTED_EXTENSION, "{file_name} endet nicht auf eine von {extensions}"),
    (keys::NO_EXTENSIONS, "Für {file_name} wurden keine zulässigen Erweiterungen angegeben"),
    (keys::INDEX_OUT_OF_RANGE, "Index außerhalb des gültigen Bereichs"),
    (keys::SAVE_FAILED, "{operation} konnte nicht in {file_name} gespeichert werden"),
    (keys::MEMBER_NOT_FOUND, "{member} ist kein Mitglied von {interface}"),
    (
        keys::OBJECT_RELEASED,
        "Auf {member} kann nicht zugegriffen werden, da das Objekt freigegeben wurde",
    ),
    (keys::MEMBER_REJECTED, "{interface} hat {member} abgelehnt: {detail}"),
    (keys::NOT_ENUM_MEMBER, "{value} ist kein Mitglied von {enum_name}"),
    (keys::MAY_FAIL, "dies kann zum Fehlschlagen des Funktionsaufrufs führen"),
    (keys::EXTENSION_MISMATCH, "{file_name} hat eine nicht unterstützte Erweiterung"),
    (keys::DEFAULT_APPLIED, "der Standardwert {default} wird angewendet"),
    (keys::LOG_CLASS_INIT, "{name} wird initialisiert"),
    (keys::LOG_PROPERTY_GET, "{name} wird abgerufen"),
    (keys::LOG_PROPERTY_SET, "{name} wird auf {value} gesetzt"),
    (keys::LOG_FUNCTION_CALL, "{name} wird ausgeführt"),
    (keys::LOG_HELPER_CHECK, "Prüfung, ob {value} {name} ist"),
    (keys::LOG_CHECK_RANGE, "Prüfung, ob {value} im Bereich {min_value} bis {max_value} liegt"),
    (keys::LOG_CHECK_MIN, "Prüfung, ob {value} mindestens {min_value} ist"),
    (keys::LOG_CHECK_MAX, "Prüfung, ob {value} höchstens {max_value} ist"),
    (keys::LOG_CHECK_MIN_MAX, "Prüfung, ob {min_value} {max_value} nicht überschreitet"),
    (keys::LOG_CHECK_POSITIVE, "Prüfung, ob {value} positiv ist"),
    (keys::LOG_CHECK_NEGATIVE, "Prüfung, ob {value} negativ ist"),
    (keys::LOG_CHECK_NON_NEGATIVE, "Prüfung, ob {value} nicht negativ ist"),
    (keys::LOG_CHECK_NON_ZERO, "Prüfung, ob {value} ungleich null ist"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "Prüfung, ob {value} einer der erwarteten Werte ist"),
    (keys::LOG_CHECK_INDEX, "Prüfung von Index {index}"),
    (keys::LOG_CHECK_FILE_EXTENSION, "Prüfung der Erweiterung von {file_name}"),
    (keys::LOG_LOCALE_INSTALLED, "Sprache auf {locale} gesetzt"),
    (keys::LOG_CATALOG_LOAD_FAILED, "Katalog {path} konnte nicht geladen werden: {error}"),
];
