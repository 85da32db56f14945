use std::fmt;

/// Android screen-density bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// All buckets, smallest first
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Resource directory for this bucket, e.g. `mipmap-xhdpi`
    pub fn mipmap_dir(self) -> String {
        format!("mipmap-{}", self.name())
    }

    /// Launcher icon edge in pixels (48dp scaled to the bucket)
    pub fn icon_size(self) -> u32 {
        match self {
            Density::Mdpi => 48,
            Density::Hdpi => 72,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 144,
            Density::Xxxhdpi => 192,
        }
    }

    /// Adaptive-icon foreground layer edge in pixels (108dp scaled to the bucket)
    pub fn foreground_size(self) -> u32 {
        match self {
            Density::Mdpi => 108,
            Density::Hdpi => 162,
            Density::Xhdpi => 216,
            Density::Xxhdpi => 324,
            Density::Xxxhdpi => 432,
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
