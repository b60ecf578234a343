//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的面板
//! 2. **提示框文本归 `alerts.*`**：控制器返回的每种 Notice 都有对应文本
//! 3. **设置弹窗归 `settings.*`**
//! 4. **跨组件复用归 `common.*`**
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 关键词生成面板
    pub generate: GenerateTexts,
    /// 手动投稿面板
    pub manual: ManualTexts,
    /// 文章面板（预览 / 编辑器）
    pub article: ArticleTexts,
    /// 设置弹窗
    pub settings: SettingsTexts,
    /// 提示框文本
    pub alerts: AlertTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub backend: &'static str,
    pub cancel: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub generate: &'static str,     // "Alt+g"
    pub preview: &'static str,      // "Alt+v"
    pub manual_post: &'static str,  // "Alt+m"
    pub edit: &'static str,         // "Alt+e"
    pub post: &'static str,         // "Alt+p"
    pub update: &'static str,       // "Alt+u"
    pub settings: &'static str,     // "Alt+s"
    pub open_link: &'static str,    // "Alt+o"
    pub language: &'static str,     // "Alt+l"
    pub theme: &'static str,        // "Alt+t"
    pub reveal: &'static str,       // "Alt+r"
    pub quit: &'static str,         // "Alt+q"
    pub scroll: &'static str,       // "PgUp/PgDn"
}

/// 动作描述
pub struct ActionTexts {
    pub next_field: &'static str,
    pub new_line: &'static str,
    pub save: &'static str,
    pub close: &'static str,
    pub open_link: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub settings: &'static str,
    pub show_hide: &'static str,
    pub scroll: &'static str,
}

// ============================================================================
// 面板文本
// ============================================================================

/// 关键词生成面板
pub struct GenerateTexts {
    pub title: &'static str,
    pub keywords_label: &'static str,
    pub keywords_placeholder: &'static str,
    pub generate_btn: &'static str,
    pub generating: &'static str,
}

/// 手动投稿面板
pub struct ManualTexts {
    pub title: &'static str,
    pub title_label: &'static str,
    pub title_placeholder: &'static str,
    pub content_label: &'static str,
    pub content_placeholder: &'static str,
    pub preview_btn: &'static str,
    pub previewing: &'static str,
    pub manual_post_btn: &'static str,
}

/// 文章面板
pub struct ArticleTexts {
    pub preview_title: &'static str,
    pub editor_title: &'static str,
    pub empty: &'static str,
    pub loading: &'static str,
    pub edit_btn: &'static str,
    pub post_btn: &'static str,
    pub posting: &'static str,
    pub title_label: &'static str,
    pub markdown_label: &'static str,
    pub update_btn: &'static str,
    pub updating: &'static str,
    pub cancel_btn: &'static str,
}

/// 设置弹窗
pub struct SettingsTexts {
    pub title: &'static str,
    pub api_key_label: &'static str,
    pub api_key_hint: &'static str,
    pub wp_url_label: &'static str,
    pub wp_url_hint: &'static str,
    pub wp_username_label: &'static str,
    pub wp_password_label: &'static str,
    pub save_btn: &'static str,
    pub saving: &'static str,
}

/// 提示框文本
///
/// `post_success` 包含 `{title}` 占位符。
pub struct AlertTexts {
    pub keywords_required: &'static str,
    pub title_content_required: &'static str,
    pub wp_creds_missing: &'static str,
    pub nothing_to_edit: &'static str,
    pub post_success: &'static str,
    pub view_post: &'static str,
    pub settings_saved: &'static str,
    pub settings_failed: &'static str,
    pub field_url: &'static str,
    pub field_username: &'static str,
    pub field_password: &'static str,
    /// 服务端未给出错误信息时的兜底文本
    pub generate_unknown_error: &'static str,
    pub convert_unknown_error: &'static str,
    pub post_unknown_error: &'static str,
    /// 无法连接时的文本
    pub generate_connect_failed: &'static str,
    pub convert_connect_failed: &'static str,
    pub post_connect_failed: &'static str,
    pub connect_failed: &'static str,
    pub open_link_failed: &'static str,
}
