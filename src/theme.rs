use ratatui::style::Color;

/// 两个主题类标记，是主题切换与外部样式层之间的唯一接口
pub const LIGHT_THEME: &str = "light-theme";
pub const DARK_THEME: &str = "dark-theme";

/// 主题状态，由根元素上的类标记推导，不单独存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Unset, // 初始状态，首次切换之前
    Light,
    Dark,
}

/// 页面根元素的类标记列表（classList 的等价物）
#[derive(Debug, Clone, Default)]
pub struct RootClasses {
    tokens: Vec<String>,
}

impl RootClasses {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    pub fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    #[allow(dead_code)]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// 主题切换组件
///
/// 持有根元素的类标记和按钮标签。点击时做三分支判断：
/// - 当前为 light-theme：换成 dark-theme，标签设为 "light"
/// - 当前为 dark-theme：换成 light-theme，标签设为 "dark"
/// - 两者都不在（初始）：加上 light-theme，标签设为 "dark"
///
/// 标签命名的是"另一个"主题而不是当前主题，这个滞后是原始行为，保留不改。
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    pub root: RootClasses,
    pub label: String,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self {
            root: RootClasses::new(),
            label: "dark".to_string(),
        }
    }

    /// 由类标记推导当前主题状态
    pub fn state(&self) -> ThemeState {
        if self.root.contains(LIGHT_THEME) {
            ThemeState::Light
        } else if self.root.contains(DARK_THEME) {
            ThemeState::Dark
        } else {
            ThemeState::Unset
        }
    }

    /// 点击切换按钮
    pub fn toggle(&mut self) {
        if self.root.contains(LIGHT_THEME) {
            self.root.remove(LIGHT_THEME);
            self.root.add(DARK_THEME);
            self.label = "light".to_string();
        } else if self.root.contains(DARK_THEME) {
            self.root.remove(DARK_THEME);
            self.root.add(LIGHT_THEME);
            self.label = "dark".to_string();
        } else {
            self.root.add(LIGHT_THEME);
            self.label = "dark".to_string();
        }
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::new()
    }
}

/// 由主题状态选出的配色（样式层按类标记取色，不做其他副作用）
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub dim: Color,
}

impl Palette {
    pub fn for_state(state: ThemeState) -> Self {
        match state {
            ThemeState::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                accent: Color::Blue,
                dim: Color::DarkGray,
            },
            ThemeState::Dark => Self {
                bg: Color::Black,
                fg: Color::White,
                accent: Color::Cyan,
                dim: Color::Gray,
            },
            // 首次切换之前沿用终端默认配色
            ThemeState::Unset => Self {
                bg: Color::Reset,
                fg: Color::Reset,
                accent: Color::Cyan,
                dim: Color::Gray,
            },
        }
    }
}
