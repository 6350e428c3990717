use crate::i18n::keys;

/// Traditional Chinese catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "無效"),
    (keys::SAVE_ERROR, "儲存錯誤"),
    (keys::VALID_INPUT, "有效輸入"),
    (keys::VALID_TYPE, "有效輸入類型"),
    (keys::TYPE_MISMATCH, "應為 {allowed} 之一，但找到的是 {found}"),
    (keys::INVALID_ENUM_VALUE, "{value} 不是 {enum_name} 的有效值"),
    (keys::NOT_IN_RANGE, "{value} 不在 {min_value} 到 {max_value} 的範圍內"),
    (keys::GREATER_THAN, "{value} 必須大於 {min_value}"),
    (keys::GREATER_THAN_OR_EQUAL, "{value} 必須大於或等於 {min_value}"),
    (keys::LESS_THAN, "{value} 必須小於 {max_value}"),
    (keys::LESS_THAN_OR_EQUAL, "{value} 必須小於或等於 {max_value}"),
    (keys::POSITIVE, "{value} 必須為正數"),
    (keys::NEGATIVE, "{value} 必須為負數"),
    (keys::NON_NEGATIVE, "{value} 不能為負數"),
    (keys::NON_ZERO, "{value} 不能為零"),
    (keys::INVALID_VALUE, "{value} 不是預期值 {expected_values} 之一"),
    (keys::MIN_MORE_THAN_MAX, "最小值 {min_value} 大於最大值 {max_value}"),
    (keys::UNSUPPORTED_EXTENSION, "{file_name} 的副檔名不是 {extensions} 之一"),
    (keys::NO_EXTENSIONS, "未為 {file_name} 指定允許的副檔名"),
    (keys::INDEX_OUT_OF_RANGE, "索引超出範圍"),
    (keys::SAVE_FAILED, "無法將 {operation} 儲存到 {file_name}"),
    (keys::MEMBER_NOT_FOUND, "{member} 不是 {interface} 的成員"),
    (keys::OBJECT_RELEASED, "物件已釋放，無法存取 {member}"),
    (keys::MEMBER_REJECTED, "{interface} 拒絕了 {member}：{detail}"),
    (keys::NOT_ENUM_MEMBER, "{value} 不是 {enum_name} 的成員"),
    (keys::MAY_FAIL, "這可能導致函式呼叫失敗"),
    (keys::EXTENSION_MISMATCH, "{file_name} 的副檔名不受支援"),
    (keys::DEFAULT_APPLIED, "將套用預設值 {default}"),
    (keys::LOG_CLASS_INIT, "正在初始化 {name}"),
    (keys::LOG_PROPERTY_GET, "正在取得 {name}"),
    (keys::LOG_PROPERTY_SET, "正在將 {name} 設定為 {value}"),
    (keys::LOG_FUNCTION_CALL, "正在執行 {name}"),
    (keys::LOG_HELPER_CHECK, "正在檢查 {value} 是否為 {name}"),
    (keys::LOG_CHECK_RANGE, "正在檢查 {value} 是否在 {min_value} 到 {max_value} 的範圍內"),
    (keys::LOG_CHECK_MIN, "正在檢查 {value} 是否至少為 {min_value}"),
    (keys::LOG_CHECK_MAX, "正在檢查 {value} 是否至多為 {max_value}"),
    (keys::LOG_CHECK_MIN_MAX, "正在檢查 {min_value} 是否未超過 {max_value}"),
    (keys::LOG_CHECK_POSITIVE, "正在檢查 {value} 是否為正數"),
    (keys::LOG_CHECK_NEGATIVE, "正在檢查 {value} 是否為負數"),
    (keys::LOG_CHECK_NON_NEGATIVE, "正在檢查 {value} 是否為非負數"),
    (keys::LOG_CHECK_NON_ZERO, "正在檢查 {value} 是否非零"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "正在檢查 {value} 是否為預期值之一"),
    (keys::LOG_CHECK_INDEX, "正在檢查索引 {index}"),
    (keys::LOG_CHECK_FILE_EXTENSION, "正在檢查 {file_name} 的副檔名"),
    (keys::LOG_LOCALE_INSTALLED, "語言已設定為 {locale}"),
    (keys::LOG_CATALOG_LOAD_FAILED, "無法載入目錄 {path}：{error}"),
];
