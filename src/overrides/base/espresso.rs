//! Espresso - synthetic pure-black variant, derived from Macchiato
//!
//! Not an upstream palette: the merger clones Macchiato, keeps its syntax
//! colors, and replaces the UI chrome with these near-black values.

pub const OVERRIDES: &[(&str, &str)] = &[
    ("background.appearance", "blurred"),
    ("background", "#000000d7"),
    ("status_bar.background", "#000000d7"),
    ("title_bar.background", "#000000d7"),
    ("elevated_surface.background", "#0a0a0a"),
    ("surface.background", "#000000d0"),
    ("border", "#00000000"),
    ("hint.background", "#1a1a1ac0"),
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
    ("panel.overlay_background", "#1a1a1a"),
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
    ("error.background", "#391e20"),
    ("warning.background", "#32281d"),
    ("info.background", "#1a2b31"),
    ("success.background", "#1f2e21"),
];
