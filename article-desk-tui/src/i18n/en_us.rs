//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, AlertTexts, ArticleTexts, CommonTexts, GenerateTexts, HintTexts, KeyNames,
    ManualTexts, SettingsTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Article Desk",
        backend: "Backend",
        cancel: "Cancel",
        quit: "Quit",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            generate: "Alt+g",
            preview: "Alt+v",
            manual_post: "Alt+m",
            edit: "Alt+e",
            post: "Alt+p",
            update: "Alt+u",
            settings: "Alt+s",
            open_link: "Alt+o",
            language: "Alt+l",
            theme: "Alt+t",
            reveal: "Alt+r",
            quit: "Alt+q",
            scroll: "PgUp/PgDn",
        },
        actions: ActionTexts {
            next_field: "Next field",
            new_line: "New line",
            save: "Save",
            close: "Close",
            open_link: "Open link",
            language: "Language",
            theme: "Theme",
            settings: "Settings",
            show_hide: "Show/Hide",
            scroll: "Scroll",
        },
    },

    // ========================================================================
    // 面板
    // ========================================================================
    generate: GenerateTexts {
        title: "Generate from Keywords",
        keywords_label: "Keywords",
        keywords_placeholder: "Enter keywords, e.g. \"rust, async, tutorial\"",
        generate_btn: "Generate Article",
        generating: "Generating...",
    },

    manual: ManualTexts {
        title: "Manual Post",
        title_label: "Title",
        title_placeholder: "Article title",
        content_label: "Content (Markdown)",
        content_placeholder: "Write your article in Markdown",
        preview_btn: "Preview",
        previewing: "Converting...",
        manual_post_btn: "Post Manually",
    },

    article: ArticleTexts {
        preview_title: "Preview",
        editor_title: "Markdown Editor",
        empty: "Generate an article or preview a manual draft to see it here.",
        loading: "Generating article, please wait...",
        edit_btn: "Edit",
        post_btn: "Post to WordPress",
        posting: "Posting...",
        title_label: "Title",
        markdown_label: "Content (Markdown)",
        update_btn: "Update Preview",
        updating: "Updating...",
        cancel_btn: "Cancel",
    },

    // ========================================================================
    // 设置弹窗
    // ========================================================================
    settings: SettingsTexts {
        title: "Settings",
        api_key_label: "OpenAI API Key",
        api_key_hint: "Leave empty to use the server's key",
        wp_url_label: "WordPress URL",
        wp_url_hint: "https://example.com",
        wp_username_label: "WordPress Username",
        wp_password_label: "Application Password",
        save_btn: "Save Settings",
        saving: "Saving...",
    },

    // ========================================================================
    // 提示框
    // ========================================================================
    alerts: AlertTexts {
        keywords_required: "Please enter keywords.",
        title_content_required: "Title and content are required.",
        wp_creds_missing: "Please configure your WordPress settings first.",
        nothing_to_edit: "There is no article to edit yet.",
        post_success: "Article \"{title}\" posted successfully!",
        view_post: "View post",
        settings_saved: "Settings saved.",
        settings_failed: "Could not access the settings file",
        field_url: "URL",
        field_username: "username",
        field_password: "password",
        generate_unknown_error: "An unknown error occurred.",
        convert_unknown_error: "Failed to update preview.",
        post_unknown_error: "An unknown error occurred during posting.",
        generate_connect_failed: "Failed to connect to the server. Please try again.",
        convert_connect_failed: "Failed to connect to server for preview update.",
        post_connect_failed: "Failed to connect to the WordPress server.",
        connect_failed: "Failed to connect to the server.",
        open_link_failed: "Could not open the browser",
    },
};
