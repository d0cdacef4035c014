use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::Iterator;
use std::path::Path;

pub const NESTEST_GOLD_LOG_PATH: &str = "./tests/data/nestest.log";
pub const NESTEST_ROM_PATH: &str = "./tests/data/nestest.nes";

/// Both fixture files are large binary/text blobs not checked into this
/// tree; the conformance test skips itself when they are absent rather
/// than failing the suite.
pub fn fixtures_present() -> bool {
    Path::new(NESTEST_ROM_PATH).exists() && Path::new(NESTEST_GOLD_LOG_PATH).exists()
}

pub fn load_gold_standard_log() -> impl Iterator<Item = String> {
    let path = Path::new(NESTEST_GOLD_LOG_PATH);
    let file = File::open(path).expect("failed to read nestest gold log");
    let file = BufReader::new(file);
    file.lines().map(|line| line.unwrap().trim().to_string())
}

pub fn load_nestest_rom_bytes() -> Vec<u8> {
    std::fs::read(NESTEST_ROM_PATH).expect("failed to read nestest ROM")
}
