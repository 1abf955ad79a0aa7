//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Parse a settings tag; anything not Chinese falls back to English
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Earnings", "收益"));
    map.insert("app-language", ("Language", "语言"));

    // Table header
    map.insert("table-date-range", ("Date Range", "日期范围"));
    map.insert("table-all", ("All", "全部"));
    map.insert("table-filter", ("Filter", "筛选"));

    // Actions
    map.insert("action-export", ("EXPORT", "导出"));
    map.insert("action-upload", ("UPLOAD", "上传"));
    map.insert("action-apply", ("Apply", "应用"));
    map.insert("action-clear", ("Clear", "清除"));
    map.insert("action-close", ("Close", "关闭"));
    map.insert("action-refresh", ("Refresh", "刷新"));

    // Table body
    map.insert("table-no-data", ("No data to display", "暂无数据"));
    map.insert("table-loading", ("Loading...", "加载中..."));

    // Pagination
    map.insert("rows-per-page", ("Rows per page:", "每页行数:"));
    map.insert("pagination-of", ("of", "共"));

    // Date presets
    map.insert("date-all", ("All time", "全部时间"));
    map.insert("date-last-7", ("Last 7 days", "最近 7 天"));
    map.insert("date-last-30", ("Last 30 days", "最近 30 天"));
    map.insert("date-this-month", ("This month", "本月"));

    // Filter panels
    map.insert("filter-title", ("Filters", "筛选条件"));
    map.insert("filter-organisation", ("Organisation", "组织"));
    map.insert("filter-payment-method", ("Payment method", "支付方式"));
    map.insert("filter-any", ("Any", "任意"));
    map.insert("date-filter-title", ("Date Range", "日期范围"));

    // Details panel
    map.insert("details-title", ("Earning Details", "收益详情"));

    // Activity messages
    map.insert("log-exported", ("Exported", "已导出"));
    map.insert("log-export-failed", ("Export failed", "导出失败"));
    map.insert("log-file-selected", ("File selected", "已选择文件"));
    map.insert("log-rows-loaded", ("Rows loaded", "数据已加载"));
    map.insert("log-load-failed", ("Loading rows failed", "数据加载失败"));
    map.insert("log-not-json", ("Only JSON row files can be loaded", "仅支持导入 JSON 数据文件"));
    map.insert("status-failures", ("failed", "失败"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_by_locale() {
        assert_eq!(t(Locale::EnUS, "action-export").as_ref(), "EXPORT");
        assert_eq!(t(Locale::ZhCN, "table-filter").as_ref(), "筛选");
    }

    #[test]
    fn row_loading_has_its_own_failure_message() {
        assert_eq!(t(Locale::EnUS, "log-load-failed").as_ref(), "Loading rows failed");
        assert_ne!(t(Locale::ZhCN, "log-load-failed").as_ref(), "log-load-failed");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key").as_ref(), "no-such-key");
    }

    #[test]
    fn locale_tags() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en"), Locale::EnUS);
        assert_eq!(Locale::from_tag("fr"), Locale::EnUS);
    }
}
