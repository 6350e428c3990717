use crate::i18n::keys;

/// Italian catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "Non valido"),
    (keys::SAVE_ERROR, "Errore di salvataggio"),
    (keys::VALID_INPUT, "Input valido"),
    (keys::VALID_TYPE, "Tipo di input valido"),
    (keys::TYPE_MISMATCH, "Era previsto uno tra {allowed}, trovato {found}"),
    (keys::INVALID_ENUM_VALUE, "{value} non è un valore valido di {enum_name}"),
    (keys::NOT_IN_RANGE, "{value} non è compreso tra {min_value} e {max_value}"),
    (keys::GREATER_THAN, "{value} deve essere maggiore di {min_value}"),
    (keys::GREATER_THAN_OR_EQUAL, "{value} deve essere maggiore o uguale a {min_value}"),
    (keys::LESS_THAN, "{value} deve essere minore di {max_value}"),
    (keys::LESS_THAN_OR_EQUAL, "{value} deve essere minore o uguale a {max_value}"),
    (keys::POSITIVE, "{value} deve essere positivo"),
    (keys::NEGATIVE, "{value} deve essere negativo"),
    (keys::NON_NEGATIVE, "{value} non deve essere negativo"),
    (keys::NON_ZERO, "{value} deve essere diverso da zero"),
    (keys::INVALID_VALUE, "{value} non è tra i valori previsti: {expected_values}"),
    (keys::MIN_MORE_THAN_MAX, "Il minimo {min_value} è maggiore del massimo {max_value}"),
    (keys::UNSUPPORTED_EXTENSION, "{file_name} non termina con nessuna tra {extensions}"),
    (keys::NO_EXTENSIONS, "Nessuna estensione consentita indicata per {file_name}"),
    (keys::INDEX_OUT_OF_RANGE, "Indice fuori intervallo"),
    (keys::SAVE_FAILED, "Impossibile salvare {operation} in {file_name}"),
    (keys::MEMBER_NOT_FOUND, "{member} non è un membro di {interface}"),
    (keys::OBJECT_RELEASED, "Impossibile accedere a {member} perché l'oggetto è stato rilasciato"),
    (keys::MEMBER_REJECTED, "{interface} ha rifiutato {member}: {detail}"),
    (keys::NOT_ENUM_MEMBER, "{value} non è un membro di {enum_name}"),
    (keys::MAY_FAIL, "questo potrebbe causare il fallimento della chiamata di funzione"),
    (keys::EXTENSION_MISMATCH, "{file_name} ha un'estensione non supportata"),
    (keys::DEFAULT_APPLIED, "verrà applicato il valore predefinito {default}"),
    (keys::LOG_CLASS_INIT, "Inizializzazione di {name}"),
    (keys::LOG_PROPERTY_GET, "Lettura di {name}"),
    (keys::LOG_PROPERTY_SET, "Impostazione di {name} su {value}"),
    (keys::LOG_FUNCTION_CALL, "Esecuzione di {name}"),
    (keys::LOG_HELPER_CHECK, "Verifica che {value} sia {name}"),
    (keys::LOG_CHECK_RANGE, "Verifica che {value} sia compreso tra {min_value} e {max_value}"),
    (keys::LOG_CHECK_MIN, "Verifica che {value} sia almeno {min_value}"),
    (keys::LOG_CHECK_MAX, "Verifica che {value} sia al massimo {max_value}"),
    (keys::LOG_CHECK_MIN_MAX, "Verifica che {min_value} non superi {max_value}"),
    (keys::LOG_CHECK_POSITIVE, "Verifica che {value} sia positivo"),
    (keys::LOG_CHECK_NEGATIVE, "Verifica che {value} sia negativo"),
    (keys::LOG_CHECK_NON_NEGATIVE, "Verifica che {value} non sia negativo"),
    (keys::LOG_CHECK_NON_ZERO, "Verifica che {value} sia diverso da zero"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "Verifica che {value} sia uno dei valori previsti"),
    (keys::LOG_CHECK_INDEX, "Verifica dell'indice {index}"),
    (keys::LOG_CHECK_FILE_EXTENSION, "Verifica dell'estensione di {file_name}"),
    (keys::LOG_LOCALE_INSTALLED, "Lingua impostata su {locale}"),
    (keys::LOG_CATALOG_LOAD_FAILED, "Impossibile caricare il catalogo {path}: {error}"),
];
