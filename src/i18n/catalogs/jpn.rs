use crate::i18n::keys;

/// Japanese catalog.
pub(super) const ENTRIES: &[(&str, &str)] = &[
    (keys::INVALID, "無効"),
    (keys::SAVE_ERROR, "保存エラー"),
    (keys::VALID_INPUT, "有効な入力"),
    (keys::VALID_TYPE, "有効な入力タイプ"),
    (keys::TYPE_MISMATCH, "{allowed} のいずれかが必要ですが、{found} が指定されました"),
    (keys::INVALID_ENUM_VALUE, "{value} は {enum_name} の有効な値ではありません"),
    (keys::NOT_IN_RANGE, "{value} は {min_value} から {max_value} の範囲外です"),
    (keys::GREATER_THAN, "{value} は {min_value} より大きい必要があります"),
    (keys::GREATER_THAN_OR_EQUAL, "{value} は {min_value} 以上である必要があります"),
    (keys::LESS_THAN, "{value} は {max_value} より小さい必要があります"),
    (keys::LESS_THAN_OR_EQUAL, "{value} は {max_value} 以下である必要があります"),
    (keys::POSITIVE, "{value} は正の値である必要があります"),
    (keys::NEGATIVE, "{value} は負の値である必要があります"),
    (keys::NON_NEGATIVE, "{value} は負でない値である必要があります"),
    (keys::NON_ZERO, "{value} は 0 以外である必要があります"),
    (keys::INVALID_VALUE, "{value} は想定された値 {expected_values} のいずれでもありません"),
    (keys::MIN_MORE_THAN_MAX, "最小値 {min_value} が最大値 {max_value} より大きくなっています"),
    (keys::UNSUPPORTED_EXTENSION, "{file_name} の拡張子が {extensions} のいずれでもありません"),
    (keys::NO_EXTENSIONS, "{file_name} に許可された拡張子が指定されていません"),
    (keys::INDEX_OUT_OF_RANGE, "インデックスが範囲外です"),
    (keys::SAVE_FAILED, "{operation} を {file_name} に保存できませんでした"),
    (keys::MEMBER_NOT_FOUND, "{member} は {interface} のメンバーではありません"),
    (keys::OBJECT_RELEASED, "オブジェクトが解放されているため、{member} にアクセスできません"),
    (keys::MEMBER_REJECTED, "{interface} が {member} を拒否しました: {detail}"),
    (keys::NOT_ENUM_MEMBER, "{value} は {enum_name} のメンバーではありません"),
    (keys::MAY_FAIL, "関数呼び出しが失敗する可能性があります"),
    (keys::EXTENSION_MISMATCH, "{file_name} の拡張子はサポートされていません"),
    (keys::DEFAULT_APPLIED, "既定の {default} が適用されます"),
    (keys::LOG_CLASS_INIT, "{name} を初期化しています"),
    (keys::LOG_PROPERTY_GET, "{name} を取得しています"),
    (keys::LOG_PROPERTY_SET, "{name} を {value} に設定しています"),
    (keys::LOG_FUNCTION_CALL, "{name} を実行しています"),
    (keys::LOG_HELPER_CHECK, "{value} が {name} であるか確認しています"),
    (keys::LOG_CHECK_RANGE, "{value} が {min_value} から {max_value} の範囲内か確認しています"),
    (keys::LOG_CHECK_MIN, "{value} が {min_value} 以上であることを確認しています"),
    (keys::LOG_CHECK_MAX, "{value} が {max_value} 以下であることを確認しています"),
    (keys::LOG_CHECK_MIN_MAX, "{min_value} が {max_value} を超えていないことを確認しています"),
    (keys::LOG_CHECK_POSITIVE, "{value} が正の値であることを確認しています"),
    (keys::LOG_CHECK_NEGATIVE, "{value} が負の値であることを確認しています"),
    (keys::LOG_CHECK_NON_NEGATIVE, "{value} が負の値でないことを確認しています"),
    (keys::LOG_CHECK_NON_ZERO, "{value} がゼロでないことを確認しています"),
    (keys::LOG_CHECK_EXPECTED_VALUES, "{value} が想定される値のいずれかであることを確認しています"),
    (keys::LOG_CHECK_INDEX, "インデックス {index} を確認しています"),
    (keys::LOG_CHECK_FILE_EXTENSION, "{file_name} の拡張子を確認しています"),
    (keys::LOG_LOCALE_INSTALLED, "言語を {locale} に設定しました"),
    (keys::LOG_CATALOG_LOAD_FAILED, "カタログ {path} を読み込めませんでした: {error}"),
];
