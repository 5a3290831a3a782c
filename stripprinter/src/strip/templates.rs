//! Canned strips.

/// Fixed strip used to check printer alignment and paper width.
pub fn test_strip() -> String {
    [
        "=============== TEST FLIGHT STRIP ===============",
        "CS: C-GPT5   DEP: CYYZ   ARR: CYHZ",
        "ROUTE: DCT YCF J576 YRI J563 ABBOT DCT",
        "FL: 350   EOBT: 1530Z   WTC: M",
        "EQUIP: SDFGHIRWY / PBN A1B2C3",
        "=================================================",
    ]
    .iter()
    .fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}
