//! Frappé - muted dark palette baseline (mauve accent)

pub const OVERRIDES: &[(&str, &str)] = &[
    ("background.appearance", "blurred"),
    ("background", "#303446d7"),
    ("status_bar.background", "#303446d7"),
    ("title_bar.background", "#303446d7"),
    ("elevated_surface.background", "#292c3c"),
    ("surface.background", "#303446d0"),
    ("border", "#00000000"),
    ("hint.background", "#414559c0"),
    ("editor.background", "#00000000"),
    ("editor.line_number", "#ffffff20"),
    ("editor.active_line_number", "#ca9ee690"),
    ("editor.gutter.background", "#00000000"),
    ("tab_bar.background", "#00000000"),
    ("terminal.background", "#00000000"),
    ("toolbar.background", "#00000000"),
    ("tab.active_background", "#ca9ee612"),
    ("tab.inactive_background", "#00000000"),
    ("panel.background", "#00000000"),
    ("panel.focused_border", "00000000"),
    ("panel.overlay_background", "#303446"),
    ("element.active", "#00000000"),
    ("border.variant", "#00000000"),
    ("scrollbar.track.border", "#00000000"),
    ("editor.active_line.background", "#00000000"),
    ("scrollbar.track.background", "#00000000"),
    ("scrollbar.thumb.background", "#ca9ee612"),
    ("ghost_element.hover", "#ca9ee608"),
    ("ghost_element.active", "#ca9ee612"),
    ("ghost_element.selected", "#ca9ee612"),
    ("drop_target.background", "#ca9ee618"),
    ("editor.highlighted_line.background", "#ca9ee612"),
    ("error.background", "#3f2325"),
    ("warning.background", "#382d20"),
    ("info.background", "#1f3137"),
    ("success.background", "#243427"),
];
