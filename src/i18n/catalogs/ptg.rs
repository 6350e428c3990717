use crate::i18n::keys;

/// Brazilian Portuguese catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "Inválido"),
    (keys::SAVE_ERROR, "Erro ao salvar"),
    (keys::VALID_INPUT, "Entrada válida"),
    (keys::VALID_TYPE, "Tipo de entrada válido"),
    (keys::TYPE_MISMATCH, "Era esperado um de {allowed}, mas foi encontrado {found}"),
    (keys::INVALID_ENUM_VALUE, "{value} não é um valor válido de {enum_name}"),
    (keys::NOT_IN_RANGE, "{value} não está no intervalo de {min_value} a {max_value}"),
    (keys::GREATER_THAN, "{value} deve ser maior que {min_value}"),
    (keys::GREATER_THAN_OR_EQUAL, "{value} deve ser maior ou igual a {min_value}"),
    (keys::LESS_THAN, "{value} deve ser menor que {max_value}"),
    (keys::LESS_THAN_OR_EQUAL, "{value} deve ser menor ou igual a {max_value}"),
    (keys::POSITIVE, "{value} deve ser positivo"),
    (keys::NEGATIVE, "{value} deve ser negativo"),
    (keys::NON_NEGATIVE, "{value} não deve ser negativo"),
    (keys::NON_ZERO, "{value} não deve ser zero"),
    (keys::INVALID_VALUE, "{value} não é um dos valores esperados: {expected_values}"),
    (keys::MIN_MORE_THAN_MAX, "O mínimo {min_value} é maior que o máximo {max_value}"),
    (keys::UNSUPPORTED_EXTENSION, "{file_name} não termina com nenhuma de {extensions}"),
    (keys::NO_EXTENSIONS, "Nenhuma extensão permitida foi informada para {file_name}"),
    (keys::INDEX_OUT_OF_RANGE, "Índice fora do intervalo"),
    (keys::SAVE_FAILED, "Não foi possível salvar {operation} em {file_name}"),
    (keys::MEMBER_NOT_FOUND, "{member} não é um membro de {interface}"),
    (keys::OBJECT_RELEASED, "Não é possível acessar {member} porque o objeto foi liberado"),
    (keys::MEMBER_REJECTED, "{interface} rejeitou {member}: {detail}"),
    (keys::NOT_ENUM_MEMBER, "{value} não é um membro de {enum_name}"),
    (keys::MAY_FAIL, "isso pode fazer com que a chamada de função falhe"),
    (keys::EXTENSION_MISMATCH, "{file_name} tem uma extensão não suportada"),
    (keys::DEFAULT_APPLIED, "o padrão {default} será aplicado"),
    (keys::LOG_CLASS_INIT, "Inicializando {name}"),
    (keys::LOG_PROPERTY_GET, "Obtendo {name}"),
    (keys::LOG_PROPERTY_SET, "Definindo {name} como {value}"),
    (keys::LOG_FUNCTION_CALL, "Executando {name}"),
    (keys::LOG_HELPER_CHECK, "Verificando se {value} é {name}"),
    (
        keys::LOG_CHECK_RANGE,
        "Verificando se {value} está no intervalo de {min_value} a {max_value}",
    ),
    (keys::LOG_CHECK_MIN, "Verificando se {value} é pelo menos {min_value}"),
    (keys::LOG_CHECK_MAX, "Verificando se {value} é no máximo {max_value}"),
    (keys::LOG_CHECK_MIN_MAX, "Verificando se {min_value} não excede {max_value}"),
    (keys::LOG_CHECK_POSITIVE, "Verificando se {value} é positivo"),
    (keys::LOG_CHECK_NEGATIVE, "Verificando se {value} é negativo"),
    (keys::LOG_CHECK_NON_NEGATIVE, "Verificando se {value} não é negativo"),
    (keys::LOG_CHECK_NON_ZERO, "Verificando se {value} é diferente de zero"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "Verificando se {value} é um dos valores esperados"),
    (keys::LOG_CHECK_INDEX, "Verificando o índice {index}"),
    (keys::LOG_CHECK_FILE_EXTENSION, "Verificando a extensão de {file_name}"),
    (keys::LOG_LOCALE_INSTALLED, "Idioma definido como {locale}"),
    (keys::LOG_CATALOG_LOAD_FAILED, "Não foi possível carregar o catálogo {path}: {error}"),
];
