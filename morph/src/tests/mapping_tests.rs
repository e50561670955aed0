use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::*;

fn noise(rng: &mut StdRng, width: u32, height: u32, channels: ChannelCount) -> Vec<u8> {
    let len = width as usize * height as usize * channels.byte_count();
    (0..len).map(|_| rng.random::<u8>()).collect()
}

fn brightness_at(rgb: &[u8], index: u32) -> f32 {
    let i = index as usize * 3;
    brightness(rgb[i], rgb[i + 1], rgb[i + 2])
}

#[test]
fn pairs_by_rank_not_position() {
    // black, gray, white
    let source = [0, 0, 0, 128, 128, 128, 255, 255, 255];
    // white, gray, black
    let target = [255, 255, 255, 128, 128, 128, 0, 0, 0];

    let mapping = compute_mapping(&source, &target, 3, 1).unwrap();

    // darkest source (0) -> darkest target (2), brightest source (2) -> brightest target (0)
    assert_eq!(mapping.as_slice(), &[2, 1, 0]);
    assert!(mapping.is_bijection());
}

#[test]
fn distinct_brightness_in_column_image() {
    // 1x3 image, rows: gray, black, white
    let source = [128, 128, 128, 0, 0, 0, 255, 255, 255];
    // rows: black, white, gray
    let target = [0, 0, 0, 255, 255, 255, 128, 128, 128];

    let mapping = compute_mapping(&source, &target, 1, 3).unwrap();
    assert_eq!(mapping.target_of(1), Some(0)); // black -> black
    assert_eq!(mapping.target_of(0), Some(2)); // gray -> gray
    assert_eq!(mapping.target_of(2), Some(1)); // white -> white
}

#[test]
fn all_black_source_maps_in_index_order() {
    let source = [0u8; 2 * 2 * 3];
    // target brightness order: 3, 1, 0, 2
    let target = [
        90, 90, 90, //
        20, 20, 20, //
        200, 200, 200, //
        5, 5, 5,
    ];

    let first = compute_mapping(&source, &target, 2, 2).unwrap();
    assert_eq!(first.as_slice(), &[3, 1, 0, 2]);

    for _ in 0..10 {
        assert_eq!(compute_mapping(&source, &target, 2, 2).unwrap(), first);
    }
}

#[test]
fn identical_images_map_to_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    let image = noise(&mut rng, 16, 16, ChannelCount::Rgb);

    let mapping = compute_mapping(&image, &image, 16, 16).unwrap();

    // Both rankings break ties the same way, so every pixel stays put.
    for (source, target) in mapping.iter() {
        assert_eq!(source, target);
    }
}

#[test]
fn uniform_images_map_to_identity() {
    let source = [40u8; 5 * 3 * 3];
    let target = [220u8; 5 * 3 * 3];
    let mapping = compute_mapping(&source, &target, 5, 3).unwrap();
    let expected: Vec<u32> = (0..15).collect();
    assert_eq!(mapping.into_vec(), expected);
}

#[test]
fn noise_100x100_matches_target_ranking() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let source = noise(&mut rng, 100, 100, ChannelCount::Rgb);
    let target = noise(&mut rng, 100, 100, ChannelCount::Rgb);

    let mapping = compute_mapping(&source, &target, 100, 100).unwrap();
    assert_eq!(mapping.len(), 10_000);
    assert!(mapping.is_bijection());

    let source_ranked = rank_pixels(&PixelBuffer::rgb(&source, 100, 100).unwrap());
    let target_ranked = rank_pixels(&PixelBuffer::rgb(&target, 100, 100).unwrap());

    for i in 0..10_000 {
        let source_index = source_ranked[i].index;
        let mapped = mapping.target_of(source_index).unwrap();
        assert_eq!(brightness_at(&target, mapped), target_ranked[i].brightness);
    }
}

#[test]
fn mapping_preserves_brightness_order() {
    let mut rng = StdRng::seed_from_u64(99);
    let source = noise(&mut rng, 32, 24, ChannelCount::Rgb);
    let target = noise(&mut rng, 32, 24, ChannelCount::Rgb);

    let mapping = compute_mapping(&source, &target, 32, 24).unwrap();
    let source_ranked = rank_pixels(&PixelBuffer::rgb(&source, 32, 24).unwrap());

    let mapped_brightness: Vec<f32> = source_ranked
        .iter()
        .map(|ranked| brightness_at(&target, mapping.target_of(ranked.index).unwrap()))
        .collect();
    assert!(mapped_brightness.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn parallel_and_sequential_agree() {
    let mut rng = StdRng::seed_from_u64(1234);
    let source = noise(&mut rng, 64, 64, ChannelCount::Rgba);
    let target = noise(&mut rng, 64, 64, ChannelCount::Rgba);

    let parallel = MorphConfig {
        channel_count: ChannelCount::Rgba,
        parallel: true,
        parallel_min_pixels: 0,
    };
    let sequential = MorphConfig::sequential().with_channel_count(ChannelCount::Rgba);

    let a = compute_mapping_with(&parallel, &source, &target, 64, 64).unwrap();
    let b = compute_mapping_with(&sequential, &source, &target, 64, 64).unwrap();
    assert_eq!(a, b);
    assert!(a.is_bijection());
}

#[test]
fn rgba_alpha_is_ignored() {
    let mut rng = StdRng::seed_from_u64(42);
    let source = noise(&mut rng, 10, 10, ChannelCount::Rgba);
    let target = noise(&mut rng, 10, 10, ChannelCount::Rgba);

    let mut source_other_alpha = source.clone();
    for px in source_other_alpha.chunks_exact_mut(4) {
        px[3] = px[3].wrapping_add(101);
    }

    let config = MorphConfig::default().with_channel_count(ChannelCount::Rgba);
    let a = compute_mapping_with(&config, &source, &target, 10, 10).unwrap();
    let b = compute_mapping_with(&config, &source_other_alpha, &target, 10, 10).unwrap();
    assert_eq!(a, b);

    let source_rgb = PixelBuffer::rgba(&source, 10, 10).unwrap().to_rgb();
    let target_rgb = PixelBuffer::rgba(&target, 10, 10).unwrap().to_rgb();
    assert_eq!(compute_mapping(&source_rgb, &target_rgb, 10, 10).unwrap(), a);
}

#[test]
fn mixed_layouts_map_by_pixel() {
    let source_rgb = [255, 255, 255, 0, 0, 0];
    let target_rgba = [0, 0, 0, 255, 255, 255, 255, 0];
    let mapper = RankPairMapper::default();

    let mapping = mapper
        .map(
            &PixelBuffer::rgb(&source_rgb, 2, 1).unwrap(),
            &PixelBuffer::rgba(&target_rgba, 2, 1).unwrap(),
        )
        .unwrap();
    assert_eq!(mapping.as_slice(), &[1, 0]);
}

#[test]
fn empty_image_yields_empty_mapping() {
    assert!(compute_mapping(&[], &[], 0, 0).unwrap().is_empty());
    assert!(compute_mapping(&[], &[], 0, 17).unwrap().is_empty());
    assert!(compute_mapping(&[], &[], 17, 0).unwrap().is_empty());
}

#[test]
fn wrong_buffer_length_fails_fast() {
    let good = [0u8; 12];
    let short = [0u8; 11];

    assert_eq!(
        compute_mapping(&short, &good, 2, 2),
        Err(Error::BufferLength {
            actual: 11,
            expected: 12
        })
    );
    assert_eq!(
        compute_mapping(&good, &short, 2, 2),
        Err(Error::BufferLength {
            actual: 11,
            expected: 12
        })
    );

    // RGBA-sized buffers under the default RGB layout
    assert!(matches!(
        compute_mapping(&[0u8; 16], &[0u8; 16], 2, 2),
        Err(Error::BufferLength { .. })
    ));
}

#[test]
fn mismatched_pixel_counts_fail_fast() {
    let source = [0u8; 4 * 3];
    let target = [0u8; 3 * 3];
    let mapper = RankPairMapper::default();

    let result = mapper.map(
        &PixelBuffer::rgb(&source, 2, 2).unwrap(),
        &PixelBuffer::rgb(&target, 3, 1).unwrap(),
    );
    assert_eq!(
        result,
        Err(Error::PixelCountMismatch {
            source_count: 4,
            target_count: 3
        })
    );
}

#[test]
fn map_into_fills_caller_buffer() {
    let source = [0, 0, 0, 255, 255, 255];
    let target = [255, 255, 255, 0, 0, 0];
    let mapper = RankPairMapper::new(MorphConfig::sequential());
    let source = PixelBuffer::rgb(&source, 2, 1).unwrap();
    let target = PixelBuffer::rgb(&target, 2, 1).unwrap();

    let mut out = [u32::MAX; 2];
    mapper.map_into(&source, &target, &mut out).unwrap();
    assert_eq!(out, [1, 0]);

    let mut wrong = [0u32; 3];
    assert_eq!(
        mapper.map_into(&source, &target, &mut wrong),
        Err(Error::OutputLength {
            actual: 3,
            expected: 2
        })
    );
}

#[test]
fn staged_operations_match_compute_mapping() {
    let mut rng = StdRng::seed_from_u64(5);
    let source = noise(&mut rng, 20, 20, ChannelCount::Rgb);
    let target = noise(&mut rng, 20, 20, ChannelCount::Rgb);

    let source_brightness = compute_brightness(&PixelBuffer::rgb(&source, 20, 20).unwrap());
    let target_brightness = compute_brightness(&PixelBuffer::rgb(&target, 20, 20).unwrap());
    let src_sorted = sort_indices_by_brightness(&source_brightness).unwrap();
    let tgt_sorted = sort_indices_by_brightness(&target_brightness).unwrap();

    let staged = build_mapping(&src_sorted, &tgt_sorted).unwrap();
    assert_eq!(staged, compute_mapping(&source, &target, 20, 20).unwrap());
}
