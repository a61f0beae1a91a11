use super::*;

#[test]
fn clamp_test() {
    let mut check = 7;
    clamp(&mut check, 0, 10);
    assert_eq!(check, 7);

    let mut check = -3;
    clamp(&mut check, 0, 10);
    assert_eq!(check, 0);

    let mut check = 388;
    clamp(&mut check, 0, 10);
    assert_eq!(check, 10);
}

#[test]
fn nearest_index_identity() {
    for i in 0..5 {
        assert_eq!(nearest_index(i, 5, 5), i);
    }
}

#[test]
fn nearest_index_upscale() {
    // 2 source pixels stretched over 4 destination pixels
    let mapped: Vec<usize> = (0..4).map(|i| nearest_index(i, 4, 2)).collect();
    assert_eq!(mapped, vec![0, 0, 1, 1]);
}

#[test]
fn nearest_index_downscale() {
    // 4 source pixels squeezed into 2 destination pixels
    let mapped: Vec<usize> = (0..2).map(|i| nearest_index(i, 2, 4)).collect();
    assert_eq!(mapped, vec![0, 2]);
}

#[test]
fn nearest_index_stays_in_source() {
    let table: Vec<usize> = (0..7).map(|i| nearest_index(i, 7, 3)).collect();
    assert_eq!(table.len(), 7);
    assert!(table.iter().all(|&i| i < 3));
    assert_eq!(table[0], 0);
    assert_eq!(table[6], 2);
}
