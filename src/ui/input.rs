//! 事件映射 (Input -> Action)
//!
//! 将键盘和鼠标事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::{App, AppMode, ScreenAreas};
use crate::models::ItemList;

/// 根据当前模式和按键获取对应的 Action
pub fn get_key_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        AppMode::AddingItem | AppMode::EditingItem(_) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 鼠标左键点击的命中测试
///
/// 每次点击最多解析为一个 Action：先判定列表项，再回落到容器空白区域，
/// 所以点中列表项的点击不会同时触发"添加"。弹窗打开期间忽略所有点击。
pub fn get_click_action(
    mode: &AppMode,
    areas: &ScreenAreas,
    list: &ItemList,
    column: u16,
    row: u16,
) -> Option<Action> {
    if *mode != AppMode::Normal {
        return None;
    }

    let pos = Position::new(column, row);

    if areas.toggle.contains(pos) {
        return Some(Action::ActivateToggle);
    }

    if areas.container.contains(pos) {
        // 列表项逐行渲染在内部区域，行号直接对应序号
        if areas.container_inner.contains(pos) {
            let index = (row - areas.container_inner.y) as usize;
            if let Some(item) = list.items.get(index) {
                return Some(Action::ActivateItem(item.id.clone()));
            }
        }
        return Some(Action::ActivateContainer);
    }

    None
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_key_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件，返回 true 表示退出
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> io::Result<bool> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(false);
    }

    let action = get_click_action(&app.mode, &app.areas, &app.list, mouse.column, mouse.row);
    if let Some(action) = action {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
