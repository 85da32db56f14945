/// Application-wide constants for icon generation and the Android resource layout

pub mod defaults {
    /// Base resource name of the generated launcher icon
    pub const ICON_NAME: &str = "ic_ermotos";

    /// Source image, relative to the res directory
    pub const SOURCE_IMAGE: &str = "drawable/ermotoshd.png";

    /// Color suggested when the background color resource is missing
    pub const BACKGROUND_COLOR_HINT: &str = "#FF6200";

    /// Android resource directory, relative to the project root
    pub const RES_DIR: &str = "app/src/main/res";

    /// Density-independent directory that holds the adaptive-icon descriptors (API 26+)
    pub const ANYDPI_DIR: &str = "mipmap-anydpi-v26";

    /// Color resources file, relative to the res directory
    pub const COLORS_FILE: &str = "values/colors.xml";

    /// Optional config file, relative to the project root
    pub const CONFIG_FILE: &str = "icongen.yaml";
}

pub mod adaptive {
    /// Fraction of the foreground layer guaranteed visible under every mask shape
    /// 72dp of the 108dp layer
    pub const SAFE_AREA: f32 = 0.66;
}

pub mod output {
    pub const IMAGE_EXTENSION: &str = "webp";
    pub const ROUND_SUFFIX: &str = "_round";
    pub const FOREGROUND_SUFFIX: &str = "_foreground";
    pub const BACKGROUND_SUFFIX: &str = "_background";

    /// Width of the banner lines printed around the run
    pub const BANNER_WIDTH: usize = 60;
}
