use std::path::PathBuf;

use clap::ValueEnum;

/// Line grammar of the descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DescriptorFormat {
    /// `1. Artist - Title`
    #[default]
    Simple,
    /// `01_Title; Artist -- Dance`
    Dance,
}

/// Settings for one run, built once by the entry point.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub descriptor: PathBuf,
    pub directory: PathBuf,
    pub name: String,
    pub format: DescriptorFormat,
    /// Where `<name>.m3u` and `<name>.m3u8` go. `None` disables the playlist.
    pub playlist_dir: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(descriptor: impl Into<PathBuf>, directory: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            directory: directory.into(),
            name: name.into(),
            format: DescriptorFormat::default(),
            playlist_dir: None,
            report: None,
            dry_run: false,
        }
    }
}
