//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件。样式层只依据根元素上的
//! light-theme / dark-theme 类标记取色，不产生其他副作用。

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::state::{App, AppMode};
use crate::theme::Palette;
use components::{render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
///
/// 同时把各区域的位置写回 app.areas，供鼠标命中测试使用。
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_state(app.theme.state());

    // 整屏底色由当前主题标记决定
    let background = Block::default().style(Style::default().bg(palette.bg).fg(palette.fg));
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(5),    // 列表容器
            Constraint::Length(3), // 主题按钮
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0], &palette);
    render_container(frame, app, chunks[1], &palette);
    render_toggle(frame, app, chunks[2], &palette);
    render_help(frame, app, chunks[3], &palette);

    // 渲染弹窗
    match &app.mode {
        AppMode::AddingItem => render_add_dialog(frame, app, &palette),
        AppMode::EditingItem(_) => render_edit_dialog(frame, app, &palette),
        AppMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new("🌱 Sprig 点击列表")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 列表容器：空白处点击添加，列表项点击编辑
fn render_container(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .title("列表（点击空白处添加）")
        .borders(Borders::ALL)
        .style(Style::default().fg(palette.fg));

    // 记录命中测试区域：列表项逐行渲染在内部区域
    app.areas.container = area;
    app.areas.container_inner = block.inner(area);

    let items: Vec<ListItem> = app
        .list
        .items
        .iter()
        .map(|item| {
            let row = Line::from(vec![
                Span::styled("• ", Style::default().fg(palette.accent)),
                Span::styled(item.text.clone(), Style::default().fg(palette.fg)),
                Span::styled(
                    format!("  ({})", item.created_at.format("%H:%M")),
                    Style::default().fg(palette.dim),
                ),
            ]);
            ListItem::new(row)
        })
        .collect();

    if app.list.is_empty() {
        let hint = Paragraph::new("暂无列表项，点击此处添加第一条")
            .style(Style::default().fg(palette.dim))
            .block(block);
        frame.render_widget(hint, area);
    } else {
        let list_widget = List::new(items).block(block);
        frame.render_widget(list_widget, area);
    }
}

/// 主题按钮：显示当前标签文本
fn render_toggle(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette) {
    app.areas.toggle = area;

    let button = Paragraph::new(app.theme.label.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title("主题（点击切换）").borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let help_text = match &app.mode {
        AppMode::Normal => "[点击空白处] 添加  [点击列表项] 编辑  [点击主题按钮] 切换  [q] 退出",
        AppMode::AddingItem => "输入文本后按 [Enter] 添加  [Esc] 取消",
        AppMode::EditingItem(_) => "输入新文本后按 [Enter] 保存  [Esc] 清空原文本",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(palette.dim))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_add_dialog(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = centered_rect(60, 30, frame.area());
    let inner = render_dialog_framework(frame, area, "添加列表项", palette.accent);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "文本",
        &app.input_buffer,
        true,
        palette.accent,
    );

    let hint = Paragraph::new("按 Enter 添加（可留空），Esc 取消")
        .style(Style::default().fg(palette.dim));
    frame.render_widget(hint, chunks[1]);
}

fn render_edit_dialog(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = centered_rect(60, 30, frame.area());
    let inner = render_dialog_framework(frame, area, "编辑列表项", palette.accent);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let current = app
        .editing_item()
        .map(|item| item.text.clone())
        .unwrap_or_default();
    let current_line = Paragraph::new(format!("当前: {current}"))
        .style(Style::default().fg(palette.dim));
    frame.render_widget(current_line, chunks[0]);

    render_input_widget(
        frame,
        chunks[1],
        "新文本",
        &app.input_buffer,
        true,
        palette.accent,
    );

    let hint = Paragraph::new("按 Enter 保存，Esc 清空原文本")
        .style(Style::default().fg(palette.dim));
    frame.render_widget(hint, chunks[2]);
}
