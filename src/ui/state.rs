//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::Rect;

use crate::models::{Item, ItemList};
use crate::theme::ThemeToggle;

/// 应用状态
pub struct App {
    pub list: ItemList,
    pub theme: ThemeToggle,
    pub mode: AppMode,
    pub input_buffer: String,
    pub message: Option<String>,
    pub areas: ScreenAreas,
}

/// 应用模式
///
/// 弹窗模式等价于阻塞式 prompt：弹窗打开期间不处理其他交互。
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddingItem,
    EditingItem(String), // String is the item ID being edited
}

/// 渲染时记录的各区域位置，供鼠标命中测试使用
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenAreas {
    pub container: Rect,       // 列表容器整体（含边框）
    pub container_inner: Rect, // 列表项所在的内部区域
    pub toggle: Rect,          // 主题按钮
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            list: ItemList::new(),
            theme: ThemeToggle::new(),
            mode: AppMode::Normal,
            input_buffer: String::new(),
            message: None,
            areas: ScreenAreas::default(),
        }
    }

    /// 获取正在编辑的列表项
    pub fn editing_item(&self) -> Option<&Item> {
        match &self.mode {
            AppMode::EditingItem(id) => self.list.get(id),
            _ => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
