use chrono::{DateTime, Local};
use uuid::Uuid;

/// 列表项
///
/// 文本在创建时由用户提供，之后可以整体替换；列表项永远不会被删除。
#[derive(Debug, Clone)]
pub struct Item {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Local>,
}

impl Item {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            created_at: Local::now(),
        }
    }
}

/// 列表容器（运行时结构）
///
/// 持有有序的列表项序列，插入顺序即显示顺序。只支持追加和改写文本。
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    pub items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 追加新列表项，返回其 ID
    pub fn add_item(&mut self, text: String) -> String {
        let item = Item::new(text);
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// 按 ID 查找列表项
    pub fn get(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// 整体替换列表项的文本
    pub fn set_text(&mut self, item_id: &str, text: String) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
            item.text = text;
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_items_in_order() {
        let mut list = ItemList::new();
        list.add_item("第一".to_string());
        list.add_item("第二".to_string());
        list.add_item("第三".to_string());

        assert_eq!(list.len(), 3);
        let texts: Vec<&str> = list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["第一", "第二", "第三"]);
    }

    #[test]
    fn test_add_empty_text() {
        let mut list = ItemList::new();
        let id = list.add_item(String::new());

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(&id).unwrap().text, "");
    }

    #[test]
    fn test_set_text_replaces_verbatim() {
        let mut list = ItemList::new();
        let id = list.add_item("原始文本".to_string());

        list.set_text(&id, "新文本".to_string());
        assert_eq!(list.get(&id).unwrap().text, "新文本");

        list.set_text(&id, String::new());
        assert_eq!(list.get(&id).unwrap().text, "");
    }

    #[test]
    fn test_set_text_unknown_id_is_noop() {
        let mut list = ItemList::new();
        list.add_item("a".to_string());
        list.set_text("no-such-id", "b".to_string());

        assert_eq!(list.len(), 1);
        assert_eq!(list.items[0].text, "a");
    }
}
