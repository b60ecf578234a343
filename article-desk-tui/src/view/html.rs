//! HTML → 终端文本
//!
//! 由 html2text 完成解析与实体解码；这里只把它的纯文本输出整理成预览行：
//! 标题去掉 `#` 前缀并单独标记，链接脚注去掉，连续空行合并。

use std::sync::LazyLock;

use regex::Regex;

/// 不在这里折行，交给 ratatui 按面板宽度处理
const RENDER_WIDTH: usize = 10_000;

#[allow(clippy::expect_used)]
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6} +(.*)$").expect("heading pattern"));
// `[text][1]` → `text`
#[allow(clippy::expect_used)]
static LINK_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\[\d+\]").expect("link pattern"));
// 文末的 `[1]: https://…`
#[allow(clippy::expect_used)]
static FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\d+\]: ").expect("footnote pattern"));

/// 预览中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub heading: bool,
}

/// 把 HTML 转换为按行排列的文本
///
/// 连续空行合并为一行，首尾空行去掉。
pub fn html_to_lines(html: &str) -> Vec<TextLine> {
    let rendered = html2text::from_read(html.as_bytes(), RENDER_WIDTH);

    let mut lines: Vec<TextLine> = Vec::new();
    for raw in rendered.lines() {
        if FOOTNOTE.is_match(raw) {
            continue;
        }
        let raw = LINK_REF.replace_all(raw.trim_end(), "$1");
        let (heading, text) = match HEADING.captures(&raw) {
            Some(caps) => (true, caps[1].trim().to_string()),
            None => (false, raw.to_string()),
        };
        // 开头的空行和连续空行都不保留
        if text.is_empty() && !lines.last().is_some_and(|l| !l.text.is_empty()) {
            continue;
        }
        lines.push(TextLine {
            heading: heading && !text.is_empty(),
            text,
        });
    }
    while lines.last().is_some_and(|l| l.text.is_empty()) {
        lines.pop();
    }
    lines
}
