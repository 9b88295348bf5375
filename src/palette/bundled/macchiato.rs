//! Catppuccin Macchiato - Medium contrast dark flavor

pub const FLAVOR: &str = r##"# Catppuccin Macchiato palette

[meta]
identifier = "macchiato"
name = "Macchiato"
order = 2
dark = true

[colors]
rosewater = { name = "Rosewater", hex = "#f4dbd6" }
flamingo = { name = "Flamingo", hex = "#f0c6c6" }
pink = { name = "Pink", hex = "#f5bde6" }
mauve = { name = "Mauve", hex = "#c6a0f6" }
red = { name = "Red", hex = "#ed8796" }
maroon = { name = "Maroon", hex = "#ee99a0" }
peach = { name = "Peach", hex = "#f5a97f" }
yellow = { name = "Yellow", hex = "#eed49f" }
green = { name = "Green", hex = "#a6da95" }
teal = { name = "Teal", hex = "#8bd5ca" }
sky = { name = "Sky", hex = "#91d7e3" }
sapphire = { name = "Sapphire", hex = "#7dc4e4" }
blue = { name = "Blue", hex = "#8aadf4" }
lavender = { name = "Lavender", hex = "#b7bdf8" }
text = { name = "Text", hex = "#cad3f5" }
subtext1 = { name = "Subtext 1", hex = "#b8c0e0" }
subtext0 = { name = "Subtext 0", hex = "#a5adcb" }
overlay2 = { name = "Overlay 2", hex = "#939ab7" }
overlay1 = { name = "Overlay 1", hex = "#8087a2" }
overlay0 = { name = "Overlay 0", hex = "#6e738d" }
surface2 = { name = "Surface 2", hex = "#5b6078" }
surface1 = { name = "Surface 1", hex = "#494d64" }
surface0 = { name = "Surface 0", hex = "#363a4f" }
base = { name = "Base", hex = "#24273a" }
mantle = { name = "Mantle", hex = "#1e2030" }
crust = { name = "Crust", hex = "#181926" }
"##;
