//! 文章操作消息

/// 对应页面上的各个按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionMessage {
    /// 根据关键词生成
    Generate,
    /// 手动输入：转换并预览
    ManualPreview,
    /// 手动输入：转换并投稿
    ManualPublish,
    /// 打开编辑器
    Edit,
    /// 投稿当前文章
    Publish,
    /// 编辑器：更新预览
    UpdatePreview,
    /// 编辑器：取消
    CancelEdit,
}
