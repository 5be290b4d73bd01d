// Shared helpers for integration tests: in-memory iNES image assembly.

/// Build an iNES image around the given PRG-ROM and CHR-ROM.
///
/// PRG must be a whole number of 16 KiB banks, CHR of 8 KiB banks.
pub fn build_ines_image(prg: &[u8], chr: &[u8], flags6: u8) -> Vec<u8> {
    assert_eq!(prg.len() % (16 * 1024), 0);
    assert_eq!(chr.len() % (8 * 1024), 0);

    let mut image = vec![
        b'N',
        b'E',
        b'S',
        0x1A,
        (prg.len() / (16 * 1024)) as u8,
        (chr.len() / (8 * 1024)) as u8,
        flags6,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
    ];
    image.extend_from_slice(prg);
    image.extend_from_slice(chr);
    image
}

/// A 16 KiB PRG bank holding `program` at its start, with the reset
/// vector pointing at $8000.
pub fn prg_with_program(program: &[u8]) -> Vec<u8> {
    let mut prg = vec![0xEA; 16 * 1024]; // NOP filler
    prg[..program.len()].copy_from_slice(program);
    prg[0x3FFC] = 0x00; // reset vector = $8000
    prg[0x3FFD] = 0x80;
    prg
}
