use walksat_utils::*;

#[test]
fn test_u8s_from_str() {
    assert_eq!(u8s_from_str("walksat"), u8s_from_str("walksat"));
    assert_ne!(u8s_from_str("walksat"), u8s_from_str("walksat "));
    assert_eq!(
        u8s_from_str(""),
        [
            175, 19, 73, 185, 245, 249, 161, 166, 160, 64, 77, 234, 54, 220, 201, 73, 155, 203,
            37, 201, 173, 193, 18, 183, 204, 154, 147, 202, 228, 31, 50, 98
        ]
    );
}

#[test]
fn test_calc_seed() {
    let seed = calc_seed("bench", 0);
    assert_eq!(seed, calc_seed("bench", 0));
    assert_eq!(seed, u8s_from_str("bench_0"));
    assert_ne!(seed, calc_seed("bench", 1));
    assert_ne!(seed, calc_seed("other", 0));
}
