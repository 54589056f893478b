// 图标组件

use gpui::*;

/// 渲染 SVG 图标
pub fn render_icon(path: &'static str, color: Hsla) -> impl IntoElement {
    svg().path(path).size_4().text_color(color)
}

/// 小号图标（列表行内使用）
pub fn render_small_icon(path: &'static str, color: Hsla) -> impl IntoElement {
    svg().path(path).size_3().text_color(color)
}
