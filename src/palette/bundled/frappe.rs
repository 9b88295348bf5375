//! Catppuccin Frappé - Subdued dark flavor

pub const FLAVOR: &str = r##"# Catppuccin Frappé palette

[meta]
identifier = "frappe"
name = "Frappé"
order = 1
dark = true

[colors]
rosewater = { name = "Rosewater", hex = "#f2d5cf" }
flamingo = { name = "Flamingo", hex = "#eebebe" }
pink = { name = "Pink", hex = "#f4b8e4" }
mauve = { name = "Mauve", hex = "#ca9ee6" }
red = { name = "Red", hex = "#e78284" }
maroon = { name = "Maroon", hex = "#ea999c" }
peach = { name = "Peach", hex = "#ef9f76" }
yellow = { name = "Yellow", hex = "#e5c890" }
green = { name = "Green", hex = "#a6d189" }
teal = { name = "Teal", hex = "#81c8be" }
sky = { name = "Sky", hex = "#99d1db" }
sapphire = { name = "Sapphire", hex = "#85c1dc" }
blue = { name = "Blue", hex = "#8caaee" }
lavender = { name = "Lavender", hex = "#babbf1" }
text = { name = "Text", hex = "#c6d0f5" }
subtext1 = { name = "Subtext 1", hex = "#b5bfe2" }
subtext0 = { name = "Subtext 0", hex = "#a5adce" }
overlay2 = { name = "Overlay 2", hex = "#949cbb" }
overlay1 = { name = "Overlay 1", hex = "#838ba7" }
overlay0 = { name = "Overlay 0", hex = "#737994" }
surface2 = { name = "Surface 2", hex = "#626880" }
surface1 = { name = "Surface 1", hex = "#51576d" }
surface0 = { name = "Surface 0", hex = "#414559" }
base = { name = "Base", hex = "#303446" }
mantle = { name = "Mantle", hex = "#292c3c" }
crust = { name = "Crust", hex = "#232634" }
"##;
