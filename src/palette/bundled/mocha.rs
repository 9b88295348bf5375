//! Catppuccin Mocha - The original dark flavor

pub const FLAVOR: &str = r##"# Catppuccin Mocha palette

[meta]
identifier = "mocha"
name = "Mocha"
order = 3
dark = true

[colors]
rosewater = { name = "Rosewater", hex = "#f5e0dc" }
flamingo = { name = "Flamingo", hex = "#f2cdcd" }
pink = { name = "Pink", hex = "#f5c2e7" }
mauve = { name = "Mauve", hex = "#cba6f7" }
red = { name = "Red", hex = "#f38ba8" }
maroon = { name = "Maroon", hex = "#eba0ac" }
peach = { name = "Peach", hex = "#fab387" }
yellow = { name = "Yellow", hex = "#f9e2af" }
green = { name = "Green", hex = "#a6e3a1" }
teal = { name = "Teal", hex = "#94e2d5" }
sky = { name = "Sky", hex = "#89dceb" }
sapphire = { name = "Sapphire", hex = "#74c7ec" }
blue = { name = "Blue", hex = "#89b4fa" }
lavender = { name = "Lavender", hex = "#b4befe" }
text = { name = "Text", hex = "#cdd6f4" }
subtext1 = { name = "Subtext 1", hex = "#bac2de" }
subtext0 = { name = "Subtext 0", hex = "#a6adc8" }
overlay2 = { name = "Overlay 2", hex = "#9399b2" }
overlay1 = { name = "Overlay 1", hex = "#7f849c" }
overlay0 = { name = "Overlay 0", hex = "#6c7086" }
surface2 = { name = "Surface 2", hex = "#585b70" }
surface1 = { name = "Surface 1", hex = "#45475a" }
surface0 = { name = "Surface 0", hex = "#313244" }
base = { name = "Base", hex = "#1e1e2e" }
mantle = { name = "Mantle", hex = "#181825" }
crust = { name = "Crust", hex = "#11111b" }
"##;
