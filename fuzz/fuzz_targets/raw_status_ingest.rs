#![no_main]

use hs2_status::{coarse_series, count_by_raw_status, fine_series, series_total};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let values = raw
        .lines()
        .map(|line| if line == "null" { None } else { Some(line) })
        .collect::<Vec<_>>();

    let counts = count_by_raw_status(values.iter().copied());
    assert!(counts.total() <= values.len() as u64);

    let fine = fine_series(Some(&counts));
    let coarse = coarse_series(Some(&counts));
    assert_eq!(series_total(&fine), counts.total());
    assert_eq!(series_total(&coarse), counts.total());
    assert!(fine.iter().chain(coarse.iter()).all(|entry| entry.value > 0));
});
