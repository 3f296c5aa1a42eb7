//! Mocha - darkest upstream palette baseline (rosewater accent)

pub const OVERRIDES: &[(&str, &str)] = &[
    ("background.appearance", "blurred"),
    ("background", "#1e1e2ed7"),
    ("status_bar.background", "#1e1e2ed7"),
    ("title_bar.background", "#1e1e2ed7"),
    ("elevated_surface.background", "#181825"),
    ("surface.background", "#1e1e2ed0"),
    ("border", "#00000000"),
    ("hint.background", "#313244c0"),
    ("editor.background", "#00000000"),
    ("editor.line_number", "#ffffff20"),
    ("editor.active_line_number", "#f5e0dc90"),
    ("editor.gutter.background", "#00000000"),
    ("tab_bar.background", "#00000000"),
    ("terminal.background", "#00000000"),
    ("toolbar.background", "#00000000"),
    ("tab.active_background", "#f5e0dc12"),
    ("tab.inactive_background", "#00000000"),
    ("panel.background", "#00000000"),
    ("panel.focused_border", "00000000"),
    ("panel.overlay_background", "#1e1e2e"),
    ("element.active", "#00000000"),
    ("border.variant", "#00000000"),
    ("scrollbar.track.border", "#00000000"),
    ("editor.active_line.background", "#00000000"),
    ("scrollbar.track.background", "#00000000"),
    ("scrollbar.thumb.background", "#f5e0dc12"),
    ("ghost_element.hover", "#f5e0dc08"),
    ("ghost_element.active", "#f5e0dc12"),
    ("ghost_element.selected", "#f5e0dc12"),
    ("drop_target.background", "#f5e0dc18"),
    ("editor.highlighted_line.background", "#f5e0dc12"),
    ("error.background", "#3b2022"),
    ("warning.background", "#342a1e"),
    ("info.background", "#1c2d33"),
    ("success.background", "#213023"),
];
