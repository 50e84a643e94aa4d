use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Which decimal reading of the lamps the page shows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr, Display, EnumString, clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum DisplayMode {
    Signed,
    #[default]
    Unsigned,
}
