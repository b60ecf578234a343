//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 默认语言为日语。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod ja_jp;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 日语
    #[default]
    JaJp,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::JaJp, Language::EnUs]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::JaJp => "日本語",
            Language::EnUs => "English",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::JaJp => "ja-JP",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "ja-JP" | "ja" => Some(Language::JaJp),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        let all = Language::all();
        all[(self.index() + 1) % all.len()]
    }

    fn index(self) -> usize {
        match self {
            Language::JaJp => 0,
            Language::EnUs => 1,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = JaJp

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    translations(current_language())
}

/// 获取指定语言的翻译
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::JaJp => &ja_jp::TRANSLATIONS,
        Language::EnUs => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EnUs,
        _ => Language::JaJp,
    }
}
