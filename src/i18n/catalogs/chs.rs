use crate::i18n::keys;

/// Simplified Chinese catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "无效"),
    (keys::SAVE_ERROR, "保存错误"),
    (keys::VALID_INPUT, "有效输入"),
    (keys::VALID_TYPE, "有效输入类型"),
    (keys::TYPE_MISMATCH, "应为 {allowed} 之一，但找到的是 {found}"),
    (keys::INVALID_ENUM_VALUE, "{value} 不是 {enum_name} 的有效值"),
    (keys::NOT_IN_RANGE, "{value} 不在 {min_value} 到 {max_value} 的范围内"),
    (keys::GREATER_THAN, "{value} 必须大于 {min_value}"),
    (keys::GREATER_THAN_OR_EQUAL, "{value} 必须大于或等于 {min_value}"),
    (keys::LESS_THAN, "{value} 必须小于 {max_value}"),
    (keys::LESS_THAN_OR_EQUAL, "{value} 必须小于或等于 {max_value}"),
    (keys::POSITIVE, "{value} 必须为正数"),
    (keys::NEGATIVE, "{value} 必须为负数"),
    (keys::NON_NEGATIVE, "{value} 不能为负数"),
    (keys::NON_ZERO, "{value} 不能为零"),
    (keys::INVALID_VALUE, "{value} 不是预期值 {expected_values} 之一"),
    (keys::MIN_MORE_THAN_MAX, "最小值 {min_value} 大于最大值 {max_value}"),
    (keys::UNSUPPORTED_EXTENSION, "{file_name} 的扩展名不是 {extensions} 之一"),
    (keys::NO_EXTENSIONS, "未为 {file_name} 指定允许的扩展名"),
    (keys::INDEX_OUT_OF_RANGE, "索引超出范围"),
    (keys::SAVE_FAILED, "无法将 {operation} 保存到 {file_name}"),
    (keys::MEMBER_NOT_FOUND, "{member} 不是 {interface} 的成员"),
    (keys::OBJECT_RELEASED, "对象已释放，无法访问 {member}"),
    (keys::MEMBER_REJECTED, "{interface} 拒绝了 {member}：{detail}"),
    (keys::NOT_ENUM_MEMBER, "{value} 不是 {enum_name} 的成员"),
    (keys::MAY_FAIL, "这可能导致函数调用失败"),
    (keys::EXTENSION_MISMATCH, "{file_name} 的扩展名不受支持"),
    (keys::DEFAULT_APPLIED, "将应用默认值 {default}"),
    (keys::LOG_CLASS_INIT, "正在初始化 {name}"),
    (keys::LOG_PROPERTY_GET, "正在获取 {name}"),
    (keys::LOG_PROPERTY_SET, "正在将 {name} 设置为 {value}"),
    (keys::LOG_FUNCTION_CALL, "正在执行 {name}"),
    (keys::LOG_HELPER_CHECK, "正在检查 {value} 是否为 {name}"),
    (keys::LOG_CHECK_RANGE, "正在检查 {value} 是否在 {min_value} 到 {max_value} 的范围内"),
    (keys::LOG_CHECK_MIN, "正在检查 {value} 是否至少为 {min_value}"),
    (keys::LOG_CHECK_MAX, "正在检查 {value} 是否至多为 {max_value}"),
    (keys::LOG_CHECK_MIN_MAX, "正在检查 {min_value} 是否不超过 {max_value}"),
    (keys::LOG_CHECK_POSITIVE, "正在检查 {value} 是否为正数"),
    (keys::LOG_CHECK_NEGATIVE, "正在检查 {value} 是否为负数"),
    (keys::LOG_CHECK_NON_NEGATIVE, "正在检查 {value} 是否为非负数"),
    (keys::LOG_CHECK_NON_ZERO, "正在检查 {value} 是否非零"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "正在检查 {value} 是否为预期值之一"),
    (keys::LOG_CHECK_INDEX, "正在检查索引 {index}"),
    (keys::LOG_CHECK_FILE_EXTENSION, "正在检查 {file_name} 的扩展名"),
    (keys::LOG_LOCALE_INSTALLED, "语言已设置为 {locale}"),
    (keys::LOG_CATALOG_LOAD_FAILED, "无法加载目录 {path}：{error}"),
];
