//! Accent colors
//!
//! The 14 palette roles a theme can use as its highlight color.

use std::fmt;

/// Highlight color of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Rosewater,
    Flamingo,
    Pink,
    Mauve,
    Red,
    Maroon,
    Peach,
    Yellow,
    Green,
    Teal,
    Sky,
    Sapphire,
    Blue,
    Lavender,
}

impl Accent {
    /// Every accent, in build order
    pub const ALL: [Accent; 14] = [
        Accent::Rosewater,
        Accent::Flamingo,
        Accent::Pink,
        Accent::Mauve,
        Accent::Red,
        Accent::Maroon,
        Accent::Peach,
        Accent::Yellow,
        Accent::Green,
        Accent::Teal,
        Accent::Sky,
        Accent::Sapphire,
        Accent::Blue,
        Accent::Lavender,
    ];

    /// Palette role name, also used in theme names and file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rosewater => "rosewater",
            Self::Flamingo => "flamingo",
            Self::Pink => "pink",
            Self::Mauve => "mauve",
            Self::Red => "red",
            Self::Maroon => "maroon",
            Self::Peach => "peach",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Sky => "sky",
            Self::Sapphire => "sapphire",
            Self::Blue => "blue",
            Self::Lavender => "lavender",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_are_unique() {
        let mut names: Vec<_> = Accent::ALL.iter().map(Accent::as_str).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_display_matches_role_name() {
        assert_eq!(Accent::Mauve.to_string(), "mauve");
        assert_eq!(format!("{}", Accent::Sapphire), "sapphire");
    }
}
