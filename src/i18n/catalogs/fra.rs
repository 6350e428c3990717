use crate::i18n::keys;

/// French catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "Non valide"),
    (keys::SAVE_ERROR, "Erreur d'enregistrement"),
    (keys::VALID_INPUT, "Entrée valide"),
    (keys::VALID_TYPE, "Type d'entrée valide"),
    (keys::TYPE_MISMATCH, "L'un de {allowed} était attendu, {found} a été trouvé"),
    (keys::INVALID_ENUM_VALUE, "{value} n'est pas une valeur valide de {enum_name}"),
    (keys::NOT_IN_RANGE, "{value} n'est pas compris entre {min_value} et {max_value}"),
    (keys::GREATER_THAN, "{value} doit être supérieur à {min_value}"),
    (keys::GREATER_THAN_OR_EQUAL, "{value} doit être supérieur ou égal à {min_value}"),
    (keys::LESS_THAN, "{value} doit être inférieur à {max_value}"),
    (keys::LESS_THAN_OR_EQUAL, "{value} doit être inférieur ou égal à {max_value}"),
    (keys::POSITIVE, "{value} doit être positif"),
    (keys::NEGATIVE, "{value} doit être négatif"),
    (keys::NON_NEGATIVE, "{value} ne doit pas être négatif"),
    (keys::NON_ZERO, "{value} ne doit pas être nul"),
    (keys::INVALID_VALUE, "{value} ne fait pas partie des valeurs attendues : {expected_values}"),
    (keys::MIN_MORE_THAN_MAX, "Le minimum {min_value} est supérieur au maximum {max_value}"),
    (
        keys::UNSUPPORTED_EXTENSION,
        "{file_name} ne se termine par aucune des extensions {extensions}",
    ),
    (keys::NO_EXTENSIONS, "Aucune extension autorisée n'a été indiquée pour {file_name}"),
    (keys::INDEX_OUT_OF_RANGE, "Index hors limites"),
    (keys::SAVE_FAILED, "Impossible d'enregistrer {operation} dans {file_name}"),
    (keys::MEMBER_NOT_FOUND, "{member} n'est pas un membre de {interface}"),
    (keys::OBJECT_RELEASED, "Impossible d'accéder à {member}, car l'objet a été libéré"),
    (keys::MEMBER_REJECTED, "{interface} a refusé {member} : {detail}"),
    (keys::NOT_ENUM_MEMBER, "{value} n'est pas un membre de {enum_name}"),
    (keys::MAY_FAIL, "cela peut entraîner l'échec de l'appel de fonction"),
    (keys::EXTENSION_MISMATCH, "{file_name} possède une extension non prise en charge"),
    (keys::DEFAULT_APPLIED, "la valeur par défaut {default} sera appliquée"),
    (keys::LOG_CLASS_INIT, "Initialisation de {name}"),
    (keys::LOG_PROPERTY_GET, "Lecture de {name}"),
    (keys::LOG_PROPERTY_SET, "Définition de {name} sur {value}"),
    (keys::LOG_FUNCTION_CALL, "Exécution de {name}"),
    (keys::LOG_HELPER_CHECK, "Vérification que {value} est {name}"),
    (
        keys::LOG_CHECK_RANGE,
        "Vérification que {value} est compris entre {min_value} et {max_value}",
    ),
    (keys::LOG_CHECK_MIN, "Vérification que {value} vaut au moins {min_value}"),
    (keys::LOG_CHECK_MAX, "Vérification que {value} vaut au plus {max_value}"),
    (keys::LOG_CHECK_MIN_MAX, "Vérification que {min_value} ne dépasse pas {max_value}"),
    (keys::LOG_CHECK_POSITIVE, "Vérification que {value} est positif"),
    (keys::LOG_CHECK_NEGATIVE, "Vérification que {value} est négatif"),
    (keys::LOG_CHECK_NON_NEGATIVE, "Vérification que {value} n'est pas négatif"),
    (keys::LOG_CHECK_NON_ZERO, "Vérification que {value} est non nul"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "Vérification que {value} fait partie des valeurs attendues"),
    (keys::LOG_CHECK_INDEX, "Vérification de l'index {index}"),
    (keys::LOG_CHECK_FILE_EXTENSION, "Vérification de l'extension de {file_name}"),
    (keys::LOG_LOCALE_INSTALLED, "Langue définie sur {locale}"),
    (keys::LOG_CATALOG_LOAD_FAILED, "Impossible de charger le catalogue {path} : {error}"),
];
