//! 日文翻译 (ja-JP)

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
        backend: "バックエンド",
        cancel: "キャンセル",
        quit: "終了",
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
            next_field: "次の項目",
            new_line: "改行",
            save: "保存",
            close: "閉じる",
            open_link: "リンクを開く",
            language: "言語",
            theme: "テーマ",
            settings: "設定",
            show_hide: "表示/非表示",
            scroll: "スクロール",
        },
    },

    // ========================================================================
    // 面板
    // ========================================================================
    generate: GenerateTexts {
        title: "キーワードから生成",
        keywords_label: "キーワード",
        keywords_placeholder: "キーワードを入力してください（例: \"rust, 非同期, 入門\"）",
        generate_btn: "記事を生成",
        generating: "生成中...",
    },

    manual: ManualTexts {
        title: "手動投稿",
        title_label: "タイトル",
        title_placeholder: "記事のタイトル",
        content_label: "本文（Markdown）",
        content_placeholder: "Markdown で記事を書いてください",
        preview_btn: "プレビュー",
        previewing: "変換中...",
        manual_post_btn: "手動で投稿",
    },

    article: ArticleTexts {
        preview_title: "プレビュー",
        editor_title: "Markdown エディタ",
        empty: "記事を生成するか、手動の下書きをプレビューするとここに表示されます。",
        loading: "記事を生成しています。しばらくお待ちください...",
        edit_btn: "編集",
        post_btn: "WordPress に投稿",
        posting: "投稿中...",
        title_label: "タイトル",
        markdown_label: "本文（Markdown）",
        update_btn: "プレビューを更新",
        updating: "更新中...",
        cancel_btn: "キャンセル",
    },

    // ========================================================================
    // 设置弹窗
    // ========================================================================
    settings: SettingsTexts {
        title: "設定",
        api_key_label: "OpenAI API キー",
        api_key_hint: "空欄の場合はサーバーのキーを使用します",
        wp_url_label: "WordPress URL",
        wp_url_hint: "https://example.com",
        wp_username_label: "WordPress ユーザー名",
        wp_password_label: "アプリケーションパスワード",
        save_btn: "設定を保存",
        saving: "保存中...",
    },

    // ========================================================================
    // 提示框
    // ========================================================================
    alerts: AlertTexts {
        keywords_required: "キーワードを入力してください。",
        title_content_required: "タイトルと本文は必須です。",
        wp_creds_missing: "先に WordPress の設定を行ってください。",
        nothing_to_edit: "編集する記事がまだありません。",
        post_success: "記事「{title}」を投稿しました！",
        view_post: "投稿を表示",
        settings_saved: "設定を保存しました。",
        settings_failed: "設定ファイルにアクセスできません",
        field_url: "URL",
        field_username: "ユーザー名",
        field_password: "パスワード",
        generate_unknown_error: "不明なエラーが発生しました。",
        convert_unknown_error: "プレビューの更新に失敗しました。",
        post_unknown_error: "投稿中に不明なエラーが発生しました。",
        generate_connect_failed: "サーバーに接続できませんでした。もう一度お試しください。",
        convert_connect_failed: "プレビュー更新のためにサーバーへ接続できませんでした。",
        post_connect_failed: "WordPress サーバーに接続できませんでした。",
        connect_failed: "サーバーに接続できませんでした。",
        open_link_failed: "ブラウザを開けませんでした",
    },
};
