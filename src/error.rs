// Ambient typed-error surface. The core's own tick/step/ppu_step are infallible by
// construction (see SPEC_FULL.md §7); this enum covers the one fallible boundary a caller
// embedding this crate hits in practice: constructing a Cartridge from raw ROM bytes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("rom buffer too small to be a DMG cartridge: got {len} bytes, need at least {min}")]
    RomTooSmall { len: usize, min: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
