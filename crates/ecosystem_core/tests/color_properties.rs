use ecosystem_core::color::*;

const SAMPLES: [&str; 12] = [
    "#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#3b82f6", "#e11d48", "#14b8a6",
    "#a3e635", "#7c3aed", "#334155", "#f5f5f4",
];

#[test]
fn contrast_is_symmetric_for_all_pairs() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(get_contrast_ratio(a, b), get_contrast_ratio(b, a), "{a} vs {b}");
        }
    }
}

#[test]
fn contrast_stays_within_wcag_bounds() {
    for a in SAMPLES {
        assert!((get_contrast_ratio(a, a) - 1.0).abs() < 1e-12);
        for b in SAMPLES {
            let ratio = get_contrast_ratio(a, b);
            assert!((1.0..=21.0 + 1e-9).contains(&ratio), "{a} vs {b}: {ratio}");
        }
    }
}

#[test]
fn hsl_round_trip_stays_within_rounding_error() {
    for hex in SAMPLES {
        let hsl = hex_to_hsl(hex).unwrap();
        let back = hex_to_rgb(&hsl_to_hex(hsl.h, hsl.s, hsl.l)).unwrap();
        let orig = hex_to_rgb(hex).unwrap();
        for (x, y) in [(orig.r, back.r), (orig.g, back.g), (orig.b, back.b)] {
            assert!(x.abs_diff(y) <= 4, "{hex}: {orig:?} vs {back:?}");
        }
    }
}

#[test]
fn scale_keeps_base_at_500() {
    for hex in SAMPLES {
        let scale = generate_color_scale(hex);
        assert_eq!(scale.get(500), Some(hex));
        assert_eq!(scale.iter().map(|(step, _)| step).collect::<Vec<_>>(), SCALE_STEPS);
    }
}

#[test]
fn optimal_foreground_always_meets_aa_large() {
    for hex in SAMPLES {
        let fg = get_optimal_foreground(hex);
        assert!(
            meets_contrast_requirements(&fg, hex, ContrastLevel::Aa, TextSize::Large),
            "{fg} on {hex}"
        );
    }
}
