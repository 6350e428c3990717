use crate::i18n::keys;

/// Spanish catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "No válido"),
    (keys::SAVE_ERROR, "Error al guardar"),
    (keys::VALID_INPUT, "Entrada válida"),
    (keys::VALID_TYPE, "Tipo de entrada válido"),
    (keys::TYPE_MISMATCH, "Se esperaba uno de {allowed}, se encontró {found}"),
    (keys::INVALID_ENUM_VALUE, "{value} no es un valor válido de {enum_name}"),
    (keys::NOT_IN_RANGE, "{value} no está dentro del rango de {min_value} a {max_value}"),
    (keys::GREATER_THAN, "{value} debe ser mayor que {min_value}"),
    (keys::GREATER_THAN_OR_EQUAL, "{value} debe ser mayor o igual que {min_value}"),
    (keys::LESS_THAN, "{value} debe ser menor que {max_value}"),
    (keys::LESS_THAN_OR_EQUAL, "{value} debe ser menor o igual que {max_value}"),
    (keys::POSITIVE, "{value} debe ser positivo"),
    (keys::NEGATIVE, "{value} debe ser negativo"),
    (keys::NON_NEGATIVE, "{value} no debe ser negativo"),
    (keys::NON_ZERO, "{value} no debe ser cero"),
    (keys::INVALID_VALUE, "{value} no es uno de los valores esperados: {expected_values}"),
    (keys::MIN_MORE_THAN_MAX, "El mínimo {min_value} es mayor que el máximo {max_value}"),
    (keys::UNSUPPORTED_EXTENSION, "{file_name} no termina en ninguna de {extensions}"),
    (keys::NO_EXTENSIONS, "No se indicaron extensiones permitidas para {file_name}"),
    (keys::INDEX_OUT_OF_RANGE, "Índice fuera de rango"),
    (keys::SAVE_FAILED, "No se pudo guardar {operation} en {file_name}"),
    (keys::MEMBER_NOT_FOUND, "{member} no es un miembro de {interface}"),
    (keys::OBJECT_RELEASED, "No se puede acceder a {member} porque el objeto se ha liberado"),
    (keys::MEMBER_REJECTED, "{interface} rechazó {member}: {detail}"),
    (keys::NOT_ENUM_MEMBER, "{value} no es un miembro de {enum_name}"),
    (keys::MAY_FAIL, "esto puede hacer que la llamada a la función falle"),
    (keys::EXTENSION_MISMATCH, "{file_name} tiene una extensión no admitida"),
    (keys::DEFAULT_APPLIED, "se aplicará el valor predeterminado {default}"),
    (keys::LOG_CLASS_INIT, "Inicializando {name}"),
    (keys::LOG_PROPERTY_GET, "Obteniendo {name}"),
    (keys::LOG_PROPERTY_SET, "Estableciendo {name} en {value}"),
    (keys::LOG_FUNCTION_CALL, "Ejecutando {name}"),
    (keys::LOG_HELPER_CHECK, "Comprobando si {value} es {name}"),
    (keys::LOG_CHECK_RANGE, "Comprobando si {value} está en el rango de {min_value} a {max_value}"),
    (keys::LOG_CHECK_MIN, "Comprobando que {value} es al menos {min_value}"),
    (keys::LOG_CHECK_MAX, "Comprobando que {value} es como máximo {max_value}"),
    (keys::LOG_CHECK_MIN_MAX, "Comprobando que {min_value} no supera {max_value}"),
    (keys::LOG_CHECK_POSITIVE, "Comprobando que {value} es positivo"),
    (keys::LOG_CHECK_NEGATIVE, "Comprobando que {value} es negativo"),
    (keys::LOG_CHECK_NON_NEGATIVE, "Comprobando que {value} no es negativo"),
    (keys::LOG_CHECK_NON_ZERO, "Comprobando que {value} no es cero"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "Comprobando que {value} es uno de los valores esperados"),
    (keys::LOG_CHECK_INDEX, "Comprobando el índice {index}"),
    (keys::LOG_CHECK_FILE_EXTENSION, "Comprobando la extensión de {file_name}"),
    (keys::LOG_LOCALE_INSTALLED, "Idioma establecido en {locale}"),
    (keys::LOG_CATALOG_LOAD_FAILED, "No se pudo cargar el catálogo {path}: {error}"),
];
