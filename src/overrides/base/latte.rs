//! Latte - light palette baseline (blue accent)

pub const OVERRIDES: &[(&str, &str)] = &[
    ("background.appearance", "blurred"),
    ("background", "#f9fafcd7"),
    ("status_bar.background", "#f9fafcd7"),
    ("title_bar.background", "#f9fafcd7"),
    ("elevated_surface.background", "#f9fafc"),
    ("surface.background", "#f9fafcd0"),
    ("border", "#90909000"),
    ("hint.background", "#e8e8e8c0"),
    ("editor.background", "#00000000"),
    ("editor.line_number", "#00000020"),
    ("editor.active_line_number", "#0079ff90"),
    ("editor.gutter.background", "#00000000"),
    ("tab_bar.background", "#00000000"),
    ("terminal.background", "#00000000"),
    ("toolbar.background", "#00000000"),
    ("tab.active_background", "#007aff12"),
    ("tab.inactive_background", "#00000000"),
    ("panel.background", "#00000000"),
    ("panel.focused_border", "00000000"),
    ("panel.overlay_background", "#f9fafc"),
    ("element.active", "#00000000"),
    ("border.variant", "#00000000"),
    ("scrollbar.track.border", "#00000000"),
    ("editor.active_line.background", "#00000000"),
    ("scrollbar.track.background", "#00000000"),
    ("scrollbar.thumb.background", "#007aff12"),
    ("ghost_element.hover", "#007aff08"),
    ("ghost_element.active", "#007aff12"),
    ("ghost_element.selected", "#007aff12"),
    ("drop_target.background", "#007aff18"),
    ("editor.highlighted_line.background", "#007aff12"),
    ("error.background", "#ffd7d9"),
    ("warning.background", "#ffe5c0"),
    ("info.background", "#cce9f3"),
    ("success.background", "#d4eecf"),
];
