//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use super::actions::Action;
use super::state::{App, AppMode};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::ActivateContainer => self.start_add_item(),
            Action::ActivateItem(id) => self.start_edit_item(id),
            Action::ActivateToggle => self.toggle_theme(),

            Action::Cancel => match &self.mode {
                // 添加弹窗取消：不创建列表项
                AppMode::AddingItem => self.cancel(),
                // 编辑弹窗取消不做保护：取消也会写入，文本被置空
                AppMode::EditingItem(id) => {
                    let id = id.clone();
                    self.cancel_edit_item(id);
                }
                AppMode::Normal => {}
            },

            Action::Submit => match &self.mode {
                AppMode::AddingItem => self.confirm_add_item(),
                AppMode::EditingItem(id) => {
                    let id = id.clone();
                    self.confirm_edit_item(id);
                }
                AppMode::Normal => {}
            },

            Action::Input(c) => {
                if matches!(self.mode, AppMode::AddingItem | AppMode::EditingItem(_)) {
                    self.input_buffer.push(c);
                }
            }

            Action::DeleteChar => {
                if matches!(self.mode, AppMode::AddingItem | AppMode::EditingItem(_)) {
                    self.input_buffer.pop();
                }
            }
        }
        false
    }

    // ============ 添加列表项相关 ============

    /// 点击容器空白区域，打开添加弹窗
    pub fn start_add_item(&mut self) {
        self.mode = AppMode::AddingItem;
        self.input_buffer.clear();
    }

    /// 确认添加：任何文本（包括空串）都会创建列表项
    pub fn confirm_add_item(&mut self) {
        let text = self.input_buffer.clone();
        self.list.add_item(text);
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = Some(format!("列表项已添加（共 {} 条）", self.list.len()));
    }

    // ============ 编辑列表项相关 ============

    /// 点击列表项，打开编辑弹窗（输入框从空白开始，不预填旧文本）
    pub fn start_edit_item(&mut self, item_id: String) {
        if self.list.get(&item_id).is_some() {
            self.mode = AppMode::EditingItem(item_id);
            self.input_buffer.clear();
        }
    }

    /// 确认编辑：输入内容原样替换列表项文本
    pub fn confirm_edit_item(&mut self, item_id: String) {
        let text = self.input_buffer.clone();
        self.list.set_text(&item_id, text);
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = Some("列表项已更新".to_string());
    }

    /// 取消编辑：文本被置为空串而不是保留原值
    pub fn cancel_edit_item(&mut self, item_id: String) {
        self.list.set_text(&item_id, String::new());
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = None;
    }

    // ============ 主题相关 ============

    /// 点击主题按钮
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DARK_THEME, LIGHT_THEME, ThemeState};

    fn add_item_via_dialog(app: &mut App, text: &str) {
        app.dispatch(Action::ActivateContainer);
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
        app.dispatch(Action::Submit);
    }

    #[test]
    fn test_add_flow_appends_items_in_order() {
        let mut app = App::new();
        add_item_via_dialog(&mut app, "one");
        add_item_via_dialog(&mut app, "two");
        add_item_via_dialog(&mut app, "three");

        assert_eq!(app.list.len(), 3);
        let texts: Vec<&str> = app.list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_cancelled_add_creates_nothing() {
        let mut app = App::new();
        app.dispatch(Action::ActivateContainer);
        app.dispatch(Action::Input('x'));
        app.dispatch(Action::Cancel);

        assert_eq!(app.list.len(), 0);
        assert_eq!(app.mode, AppMode::Normal);
    }

    /// 空串也是合法输入，会创建一个空文本的列表项
    #[test]
    fn test_empty_submit_creates_empty_item() {
        let mut app = App::new();
        app.dispatch(Action::ActivateContainer);
        app.dispatch(Action::Submit);

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.items[0].text, "");
    }

    #[test]
    fn test_edit_flow_replaces_text_verbatim() {
        let mut app = App::new();
        add_item_via_dialog(&mut app, "old");
        let id = app.list.items[0].id.clone();

        app.dispatch(Action::ActivateItem(id.clone()));
        // 编辑输入框从空白开始
        assert_eq!(app.input_buffer, "");
        for c in "new".chars() {
            app.dispatch(Action::Input(c));
        }
        app.dispatch(Action::Submit);

        assert_eq!(app.list.get(&id).unwrap().text, "new");
        assert_eq!(app.list.len(), 1);
    }

    /// 编辑弹窗取消不保留原文本：原值被空串覆盖
    #[test]
    fn test_cancelled_edit_clears_text() {
        let mut app = App::new();
        add_item_via_dialog(&mut app, "keep me");
        let id = app.list.items[0].id.clone();

        app.dispatch(Action::ActivateItem(id.clone()));
        app.dispatch(Action::Cancel);

        assert_eq!(app.list.get(&id).unwrap().text, "");
        assert_eq!(app.mode, AppMode::Normal);
    }

    /// 点击列表项（无论提交还是取消）都不会改变列表项数量
    #[test]
    fn test_item_activation_never_changes_count() {
        let mut app = App::new();
        add_item_via_dialog(&mut app, "a");
        add_item_via_dialog(&mut app, "b");
        let id = app.list.items[0].id.clone();

        app.dispatch(Action::ActivateItem(id.clone()));
        app.dispatch(Action::Submit);
        assert_eq!(app.list.len(), 2);

        app.dispatch(Action::ActivateItem(id));
        app.dispatch(Action::Cancel);
        assert_eq!(app.list.len(), 2);
    }

    #[test]
    fn test_backspace_edits_buffer() {
        let mut app = App::new();
        app.dispatch(Action::ActivateContainer);
        app.dispatch(Action::Input('a'));
        app.dispatch(Action::Input('b'));
        app.dispatch(Action::DeleteChar);
        app.dispatch(Action::Submit);

        assert_eq!(app.list.items[0].text, "a");
    }

    #[test]
    fn test_toggle_action_drives_theme_state_machine() {
        let mut app = App::new();
        assert_eq!(app.theme.state(), ThemeState::Unset);

        app.dispatch(Action::ActivateToggle);
        assert_eq!(app.theme.state(), ThemeState::Light);
        assert!(app.theme.root.contains(LIGHT_THEME));
        assert_eq!(app.theme.label, "dark");

        app.dispatch(Action::ActivateToggle);
        assert_eq!(app.theme.state(), ThemeState::Dark);
        assert!(app.theme.root.contains(DARK_THEME));
        assert!(!app.theme.root.contains(LIGHT_THEME));
        assert_eq!(app.theme.label, "light");
    }

    /// 列表和主题互不影响
    #[test]
    fn test_components_are_independent() {
        let mut app = App::new();
        add_item_via_dialog(&mut app, "item");
        app.dispatch(Action::ActivateToggle);

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.items[0].text, "item");
        assert_eq!(app.theme.state(), ThemeState::Light);
    }

    #[test]
    fn test_quit_action() {
        let mut app = App::new();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::ActivateContainer));
    }
}
