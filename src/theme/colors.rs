// Static color binding tables
//
// One table drives both the light and the dark dictionary of every theme;
// only the flavor it is resolved against changes.

use super::Accent;

/// Palette role a manifest color key reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Base,
    Mantle,
    Crust,
    Surface0,
    Surface1,
    Overlay1,
    Text,
    /// The theme's selected accent
    Accent,
}

impl Role {
    /// Palette key to look up for this role
    pub fn palette_key(self, accent: Accent) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Mantle => "mantle",
            Self::Crust => "crust",
            Self::Surface0 => "surface0",
            Self::Surface1 => "surface1",
            Self::Overlay1 => "overlay1",
            Self::Text => "text",
            Self::Accent => accent.as_str(),
        }
    }
}

/// Manifest color key -> palette role, in output order
pub const COLOR_KEYS: &[(&str, Role)] = &[
    ("frame", Role::Base),
    ("button_background_active", Role::Accent),
    ("button_background_hover", Role::Surface0),
    ("icons", Role::Text),
    ("tab_text", Role::Text),
    ("tab_line", Role::Accent),
    ("tab_loading", Role::Accent),
    ("tab_selected", Role::Base),
    ("tab_background_text", Role::Overlay1),
    ("tab_background_separator", Role::Surface0),
    ("bookmark_text", Role::Text),
    ("toolbar", Role::Base),
    ("toolbar_field", Role::Surface0),
    ("toolbar_field_text", Role::Text),
    ("toolbar_field_highlight", Role::Accent),
    ("toolbar_field_highlight_text", Role::Mantle),
    ("toolbar_field_border", Role::Mantle),
    ("toolbar_field_focus", Role::Surface0),
    ("toolbar_field_text_focus", Role::Text),
    ("toolbar_field_border_focus", Role::Accent),
    ("toolbar_top_separator", Role::Surface0),
    ("toolbar_bottom_separator", Role::Surface0),
    ("toolbar_vertical_separator", Role::Surface0),
    ("sidebar", Role::Base),
    ("sidebar_text", Role::Text),
    ("sidebar_highlight", Role::Accent),
    ("sidebar_highlight_text", Role::Mantle),
    ("sidebar_border", Role::Surface0),
    ("popup", Role::Surface0),
    ("popup_text", Role::Text),
    ("popup_border", Role::Base),
    ("popup_highlight", Role::Accent),
    ("popup_highlight_text", Role::Mantle),
    ("spaces_bg", Role::Mantle),
    ("tree_view_bg", Role::Crust),
    ("bg_color", Role::Base),
    ("spaces_bg_active", Role::Accent),
    ("button_primary_bg", Role::Accent),
    ("button_text", Role::Crust),
    ("spaces_button", Role::Crust),
    ("tree_pane_bg", Role::Crust),
    ("tree_card_bg", Role::Mantle),
    ("layout_bg_0", Role::Base),
    ("layout_bg_1", Role::Base),
    ("button_bg", Role::Mantle),
    ("lwt_accent_color", Role::Mantle),
    ("list_container_background_selected_current", Role::Mantle),
    ("ab_cards_list_bg", Role::Mantle),
    ("in_content_box_info_background", Role::Mantle),
    ("calendar_view_toggle_bg", Role::Mantle),
    ("calendar_view_toggle_hover_bg", Role::Surface0),
    ("tabs_toolbar_bg", Role::Mantle),
    ("color_gray_70", Role::Mantle),
    ("color_gray_50", Role::Surface1),
];

/// Theme experiment bindings: manifest color key -> Thunderbird CSS variable
pub const EXPERIMENT_COLORS: &[(&str, &str)] = &[
    ("spaces_bg", "--spaces-bg-color"),
    ("spaces_bg_active", "--spaces-button-active-bg-color"),
    ("spaces_button", "--spaces-button-active-text-color"),
    ("tree_view_bg", "--tree-view-bg"),
    ("bg_color", "--bg-color"),
    ("button_primary_bg", "--button-primary-background-color"),
    ("button_text", "--button-primary-text-color"),
    ("tree_pane_bg", "--tree-pane-background"),
    ("tree_card_bg", "--tree-card-background"),
    ("layout_bg_0", "--layout-background-0"),
    ("layout_bg_1", "--layout-background-1"),
    ("button_bg", "--button-background-color"),
    ("lwt_accent_color", "--lwt-accent-color"),
    (
        "list_container_background_selected_current",
        "--list-container-background-selected-current",
    ),
    ("ab_cards_list_bg", "--ab-cards-list-bg"),
    ("in_content_box_info_background", "--in-content-box-info-background"),
    ("calendar_view_toggle_bg", "--calendar-view-toggle-background"),
    ("calendar_view_toggle_hover_bg", "--calendar-view-toggle-hover-background"),
    ("tabs_toolbar_bg", "--tabs-toolbar-background-color"),
    ("color_gray_70", "--color-gray-70"),
    ("color_gray_50", "--color-gray-50"),
];

/// Icon size -> path inside the package
pub const ICONS: &[(&str, &str)] = &[
    ("16", "images/icon16.png"),
    ("48", "images/icon48.png"),
    ("128", "images/icon128.png"),
];
