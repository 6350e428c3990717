use crate::i18n::keys;

/// Korean catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "유효하지 않음"),
    (keys::SAVE_ERROR, "저장 오류"),
    (keys::VALID_INPUT, "유효한 입력"),
    (keys::VALID_TYPE, "유효한 입력 형식"),
    (keys::TYPE_MISMATCH, "{allowed} 중 하나가 필요하지만 {found}이(가) 지정되었습니다"),
    (keys::INVALID_ENUM_VALUE, "{value}은(는) {enum_name}의 유효한 값이 아닙니다"),
    (keys::NOT_IN_RANGE, "{value}이(가) {min_value}에서 {max_value} 범위를 벗어났습니다"),
    (keys::GREATER_THAN, "{value}은(는) {min_value}보다 커야 합니다"),
    (keys::GREATER_THAN_OR_EQUAL, "{value}은(는) {min_value} 이상이어야 합니다"),
    (keys::LESS_THAN, "{value}은(는) {max_value}보다 작아야 합니다"),
    (keys::LESS_THAN_OR_EQUAL, "{value}은(는) {max_value} 이하여야 합니다"),
    (keys::POSITIVE, "{value}은(는) 양수여야 합니다"),
    (keys::NEGATIVE, "{value}은(는) 음수여야 합니다"),
    (keys::NON_NEGATIVE, "{value}은(는) 음수가 아니어야 합니다"),
    (keys::NON_ZERO, "{value}은(는) 0이 아니어야 합니다"),
    (keys::INVALID_VALUE, "{value}은(는) 예상 값 {expected_values} 중 하나가 아닙니다"),
    (keys::MIN_MORE_THAN_MAX, "최솟값 {min_value}이(가) 최댓값 {max_value}보다 큽니다"),
    (keys::UNSUPPORTED_EXTENSION, "{file_name}의 확장자가 {extensions} 중 하나가 아닙니다"),
    (keys::NO_EXTENSIONS, "{file_name}에 허용된 확장자가 지정되지 않았습니다"),
    (keys::INDEX_OUT_OF_RANGE, "인덱스가 범위를 벗어났습니다"),
    (keys::SAVE_FAILED, "{operation}을(를) {file_name}에 저장할 수 없습니다"),
    (keys::MEMBER_NOT_FOUND, "{member}은(는) {interface}의 멤버가 아닙니다"),
    (keys::OBJECT_RELEASED, "개체가 해제되어 {member}에 액세스할 수 없습니다"),
    (keys::MEMBER_REJECTED, "{interface}에서 {member}을(를) 거부했습니다: {detail}"),
    (keys::NOT_ENUM_MEMBER, "{value}은(는) {enum_name}의 멤버가 아닙니다"),
    (keys::MAY_FAIL, "함수 호출이 실패할 수 있습니다"),
    (keys::EXTENSION_MISMATCH, "{file_name}의 확장자는 지원되지 않습니다"),
    (keys::DEFAULT_APPLIED, "기본값 {default}이(가) 적용됩니다"),
    (keys::LOG_CLASS_INIT, "{name} 초기화 중"),
    (keys::LOG_PROPERTY_GET, "{name} 가져오는 중"),
    (keys::LOG_PROPERTY_SET, "{name}을(를) {value}(으)로 설정하는 중"),
    (keys::LOG_FUNCTION_CALL, "{name} 실행 중"),
    (keys::LOG_HELPER_CHECK, "{value}이(가) {name}인지 확인하는 중"),
    (keys::LOG_CHECK_RANGE, "{value}이(가) {min_value}에서 {max_value} 범위에 있는지 확인하는 중"),
    (keys::LOG_CHECK_MIN, "{value}이(가) {min_value} 이상인지 확인하는 중"),
    (keys::LOG_CHECK_MAX, "{value}이(가) {max_value} 이하인지 확인하는 중"),
    (keys::LOG_CHECK_MIN_MAX, "{min_value}이(가) {max_value}을(를) 초과하지 않는지 확인하는 중"),
    (keys::LOG_CHECK_POSITIVE, "{value}이(가) 양수인지 확인하는 중"),
    (keys::LOG_CHECK_NEGATIVE, "{value}이(가) 음수인지 확인하는 중"),
    (keys::LOG_CHECK_NON_NEGATIVE, "{value}이(가) 음수가 아닌지 확인하는 중"),
    (keys::LOG_CHECK_NON_ZERO, "{value}이(가) 0이 아닌지 확인하는 중"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "{value}이(가) 예상 값 중 하나인지 확인하는 중"),
    (keys::LOG_CHECK_INDEX, "인덱스 {index} 확인 중"),
    (keys::LOG_CHECK_FILE_EXTENSION, "{file_name}의 확장자 확인 중"),
    (keys::LOG_LOCALE_INSTALLED, "언어가 {locale}(으)로 설정되었습니다"),
    (keys::LOG_CATALOG_LOAD_FAILED, "카탈로그 {path}을(를) 불러올 수 없습니다: {error}"),
];
