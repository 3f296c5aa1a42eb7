//! Macchiato - mid dark palette baseline (rosewater accent)

pub const OVERRIDES: &[(&str, &str)] = &[
    ("background.appearance", "blurred"),
    ("background", "#24273ad7"),
    ("status_bar.background", "#24273ad7"),
    ("title_bar.background", "#24273ad7"),
    ("elevated_surface.background", "#1e2030"),
    ("surface.background", "#24273ad0"),
    ("border", "#00000000"),
    ("hint.background", "#363a4fc0"),
    ("editor.background", "#00000000"),
    ("editor.line_number", "#ffffff20"),
    ("editor.active_line_number", "#f4dbd690"),
    ("editor.gutter.background", "#00000000"),
    ("tab_bar.background", "#00000000"),
    ("terminal.background", "#00000000"),
    ("toolbar.background", "#00000000"),
    ("tab.active_background", "#f4dbd612"),
    ("tab.inactive_background", "#00000000"),
    ("panel.background", "#00000000"),
    ("panel.focused_border", "00000000"),
    ("panel.overlay_background", "#24273a"),
    ("element.active", "#00000000"),
    ("border.variant", "#00000000"),
    ("scrollbar.track.border", "#00000000"),
    ("editor.active_line.background", "#00000000"),
    ("scrollbar.track.background", "#00000000"),
    ("scrollbar.thumb.background", "#f4dbd612"),
    ("ghost_element.hover", "#f4dbd608"),
    ("ghost_element.active", "#f4dbd612"),
    ("ghost_element.selected", "#f4dbd612"),
    ("drop_target.background", "#f4dbd618"),
    ("editor.highlighted_line.background", "#f4dbd612"),
    ("error.background", "#3d2224"),
    ("warning.background", "#362c1f"),
    ("info.background", "#1e2f35"),
    ("success.background", "#233225"),
];
