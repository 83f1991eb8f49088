mod common;

use common::TestResult;
use common::fixtures::*;
use inkpress::notebook::{HEADER_LEN, PenKind, StrokeColor, decode_notebook};
use inkpress::DecodeError;

#[test]
fn decodes_empty_notebook() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let bytes = NotebookBuilder::new().encode();
    let notebook = decode_notebook(&bytes)?;
    assert_eq!(notebook.page_count(), 0);
    Ok(())
}

#[test]
fn decodes_blank_pages_in_order() -> TestResult {
    let bytes = NotebookBuilder::new().blank_pages(4).encode();
    let notebook = decode_notebook(&bytes)?;
    assert_eq!(notebook.page_count(), 4);
    for page in &notebook.pages {
        assert!(page.layers.is_empty());
    }
    Ok(())
}

#[test]
fn decodes_single_stroke_scenario() -> TestResult {
    let bytes = single_stroke_notebook();
    let notebook = decode_notebook(&bytes)?;

    assert_eq!(notebook.page_count(), 1);
    let stroke = &notebook.pages[0].layers[0].strokes[0];
    assert_eq!(stroke.pen, PenKind::Ballpoint);
    assert_eq!(stroke.color, StrokeColor::Black);
    assert_eq!(stroke.width, 2.0);
    let coords: Vec<(f32, f32)> = stroke.points.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(coords, vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    Ok(())
}

#[test]
fn zero_point_stroke_decodes_without_error() -> TestResult {
    let bytes = NotebookBuilder::new()
        .page(page_with(vec![stroke(0, 0, 1.5, &[])]))
        .encode();
    let notebook = decode_notebook(&bytes)?;
    assert!(notebook.pages[0].layers[0].strokes[0].points.is_empty());
    Ok(())
}

#[test]
fn unrecognized_style_codes_resolve_to_defaults() -> TestResult {
    let bytes = NotebookBuilder::new()
        .page(page_with(vec![stroke(99, 99, 1.0, &[(0.0, 0.0)])]))
        .encode();
    let notebook = decode_notebook(&bytes)?;
    let stroke = &notebook.pages[0].layers[0].strokes[0];
    assert_eq!(stroke.pen, PenKind::Ballpoint);
    assert_eq!(stroke.color, StrokeColor::Black);
    Ok(())
}

#[test]
fn every_strict_prefix_of_a_valid_buffer_fails_as_truncated() {
    let _ = env_logger::builder().is_test(true).try_init();

    let bytes = NotebookBuilder::new()
        .page(page_with(vec![
            stroke(1, 2, 1.0, &[(1.0, 2.0), (3.0, 4.0)]),
            stroke(0, 0, 0.5, &[(5.0, 6.0)]),
        ]))
        .blank_pages(1)
        .encode();
    assert!(decode_notebook(&bytes).is_ok());

    // The encoding is exact, so chopping off any suffix must fail loudly
    // rather than yield a shorter-but-valid document.
    for len in 0..bytes.len() {
        let result = decode_notebook(&bytes[..len]);
        assert!(
            matches!(result, Err(DecodeError::TruncatedInput { .. })),
            "prefix of {len} byte(s) decoded to {result:?}"
        );
    }
}

#[test]
fn declared_second_page_missing_from_buffer_is_truncated() {
    // Header claims two pages but the buffer only holds one page's records.
    let one_page = NotebookBuilder::new()
        .page(page_with(vec![stroke(0, 0, 1.0, &[(0.0, 0.0)])]))
        .encode();
    let mut bytes = one_page.clone();
    bytes[HEADER_LEN..HEADER_LEN + 4].copy_from_slice(&2u32.to_le_bytes());

    let result = decode_notebook(&bytes);
    assert!(matches!(result, Err(DecodeError::TruncatedInput { .. })));
}

#[test]
fn negative_width_survives_decode_unmodified() -> TestResult {
    let bytes = NotebookBuilder::new()
        .page(page_with(vec![stroke(0, 0, -1.0, &[(0.0, 0.0), (1.0, 1.0)])]))
        .encode();
    let notebook = decode_notebook(&bytes)?;
    assert_eq!(notebook.pages[0].layers[0].strokes[0].width, -1.0);
    Ok(())
}
