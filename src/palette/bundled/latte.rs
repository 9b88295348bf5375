//! Catppuccin Latte - Soothing pastel light flavor

pub const FLAVOR: &str = r##"# Catppuccin Latte palette

[meta]
identifier = "latte"
name = "Latte"
order = 0
dark = false

[colors]
rosewater = { name = "Rosewater", hex = "#dc8a78" }
flamingo = { name = "Flamingo", hex = "#dd7878" }
pink = { name = "Pink", hex = "#ea76cb" }
mauve = { name = "Mauve", hex = "#8839ef" }
red = { name = "Red", hex = "#d20f39" }
maroon = { name = "Maroon", hex = "#e64553" }
peach = { name = "Peach", hex = "#fe640b" }
yellow = { name = "Yellow", hex = "#df8e1d" }
green = { name = "Green", hex = "#40a02b" }
teal = { name = "Teal", hex = "#179299" }
sky = { name = "Sky", hex = "#04a5e5" }
sapphire = { name = "Sapphire", hex = "#209fb5" }
blue = { name = "Blue", hex = "#1e66f5" }
lavender = { name = "Lavender", hex = "#7287fd" }
text = { name = "Text", hex = "#4c4f69" }
subtext1 = { name = "Subtext 1", hex = "#5c5f77" }
subtext0 = { name = "Subtext 0", hex = "#6c6f85" }
overlay2 = { name = "Overlay 2", hex = "#7c7f93" }
overlay1 = { name = "Overlay 1", hex = "#8c8fa1" }
overlay0 = { name = "Overlay 0", hex = "#9ca0b0" }
surface2 = { name = "Surface 2", hex = "#acb0be" }
surface1 = { name = "Surface 1", hex = "#bcc0cc" }
surface0 = { name = "Surface 0", hex = "#ccd0da" }
base = { name = "Base", hex = "#eff1f5" }
mantle = { name = "Mantle", hex = "#e6e9ef" }
crust = { name = "Crust", hex = "#dce0e8" }
"##;
