//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 点击触发
    ActivateContainer,    // 点击列表空白区域，开始添加
    ActivateItem(String), // 点击某个列表项，开始编辑
    ActivateToggle,       // 点击主题按钮

    // 表单/通用交互
    Cancel,      // Esc
    Submit,      // Enter
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
