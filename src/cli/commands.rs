use clap::Parser;
use std::path::PathBuf;

use crate::config::{DescriptorFormat, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "ditag")]
#[command(version)]
#[command(about = "Automatically rename and tag your dance playlist", long_about = None)]
pub struct Cli {
    /// Text file listing the playlist, one track per line
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Directory of the mp3 files to rename and tag in place
    #[arg(short = 'd', long = "dir")]
    pub dir: PathBuf,

    /// Name of the playlist, written as album. e.g. "Schulball 08.05.2024"
    #[arg(short = 'n', long = "name")]
    pub name: String,

    /// Line format of the descriptor file
    #[arg(long, value_enum, default_value_t = DescriptorFormat::Simple)]
    pub format: DescriptorFormat,

    /// Directory to write <name>.m3u and <name>.m3u8 to
    #[arg(long, default_value = ".")]
    pub playlist_dir: PathBuf,

    /// Do not write playlist files
    #[arg(long, conflicts_with = "playlist_dir")]
    pub no_playlist: bool,

    /// Write a CSV report of every file and record to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Only show what would be renamed and tagged
    #[arg(long)]
    pub dry_run: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            descriptor: cli.file,
            directory: cli.dir,
            name: cli.name,
            format: cli.format,
            playlist_dir: (!cli.no_playlist).then_some(cli.playlist_dir),
            report: cli.report,
            dry_run: cli.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_required_flags() {
        let cli = Cli::try_parse_from([
            "ditag", "-f", "playlist.txt", "-d", "music_dir", "-n", "My Playlist",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("playlist.txt"));
        assert_eq!(cli.dir, PathBuf::from("music_dir"));
        assert_eq!(cli.name, "My Playlist");
        assert_eq!(cli.format, DescriptorFormat::Simple);

        let config = RunConfig::from(cli);
        assert_eq!(config.playlist_dir, Some(PathBuf::from(".")));
        assert!(!config.dry_run);
    }

    #[test]
    fn long_flags_and_options() {
        let cli = Cli::try_parse_from([
            "ditag",
            "--file",
            "tänze.txt",
            "--dir",
            "Tanzmusik",
            "--name",
            "Ball",
            "--format",
            "dance",
            "--no-playlist",
            "--report",
            "report.csv",
            "--dry-run",
        ])
        .unwrap();

        let config = RunConfig::from(cli);
        assert_eq!(config.format, DescriptorFormat::Dance);
        assert_eq!(config.playlist_dir, None);
        assert_eq!(config.report, Some(PathBuf::from("report.csv")));
        assert!(config.dry_run);
    }

    #[test]
    fn missing_required_flags_is_a_usage_error() {
        let err = Cli::try_parse_from(["ditag"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
