#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use ditag::{DescriptorFormat, RunConfig};

/// MPEG-1 layer III, 128 kbps, 44.1 kHz, stereo, no CRC.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
const FRAME_LEN: usize = 417;

/// A short run of silent-ish mp3 frames, enough for a container probe.
pub fn mp3_bytes(frames: usize) -> Vec<u8> {
    let mut frame = vec![0u8; FRAME_LEN];
    frame[..4].copy_from_slice(&FRAME_HEADER);
    frame.repeat(frames)
}

pub fn write_mp3(dir: &Path, name: &str) -> PathBuf {
    write_mp3_frames(dir, name, 20)
}

/// Each frame holds 1152 samples, so 400 frames last about 10.45 seconds.
pub fn write_mp3_frames(dir: &Path, name: &str, frames: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, mp3_bytes(frames)).unwrap();
    path
}

pub struct Fixture {
    pub root: tempfile::TempDir,
    pub music: PathBuf,
    pub descriptor: PathBuf,
    pub playlists: PathBuf,
}

impl Fixture {
    pub fn new(descriptor: &str, mp3s: &[&str]) -> Self {
        let root = tempfile::tempdir().unwrap();
        let music = root.path().join("music");
        let playlists = root.path().join("playlists");
        fs::create_dir(&music).unwrap();
        fs::create_dir(&playlists).unwrap();

        let descriptor_path = root.path().join("tracks.txt");
        fs::write(&descriptor_path, descriptor).unwrap();

        for name in mp3s {
            write_mp3(&music, name);
        }

        Self {
            root,
            music,
            descriptor: descriptor_path,
            playlists,
        }
    }

    pub fn config(&self, name: &str) -> RunConfig {
        let mut config = RunConfig::new(&self.descriptor, &self.music, name);
        config.playlist_dir = Some(self.playlists.clone());
        config
    }

    pub fn dance_config(&self, name: &str) -> RunConfig {
        let mut config = self.config(name);
        config.format = DescriptorFormat::Dance;
        config
    }

    /// File names in the music directory, sorted bytewise.
    pub fn music_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.music)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn snapshot(&self) -> Vec<(String, Vec<u8>)> {
        self.music_files()
            .into_iter()
            .map(|name| {
                let bytes = fs::read(self.music.join(&name)).unwrap();
                (name, bytes)
            })
            .collect()
    }
}
