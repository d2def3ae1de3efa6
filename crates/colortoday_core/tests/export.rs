use colortoday_core::export::render::{DEFAULT_CANVAS_SIZE, MAX_CANVAS_SIZE};
use colortoday_core::{encode_png, export_file_name, DateKey, FillMap, HexColor, Scene};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    // IHDR is the first chunk: width and height follow the chunk type.
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (width, height)
}

#[test]
fn export_produces_square_png_of_requested_size() {
    let day = DateKey::parse("2024-06-15").unwrap();
    let scene = Scene::for_date(&day);
    let mut fills = FillMap::new();
    fills.set("shape-0", HexColor::parse("#f0643a").unwrap());

    let bytes = encode_png(&scene, &fills, &day, DEFAULT_CANVAS_SIZE).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);
    assert_eq!(png_dimensions(&bytes), (DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE));
}

#[test]
fn export_clamps_oversized_canvas() {
    let day = DateKey::parse("2024-01-01").unwrap();
    let scene = Scene::for_date(&day);
    let bytes = encode_png(&scene, &FillMap::new(), &day, 5000).unwrap();
    assert_eq!(png_dimensions(&bytes), (MAX_CANVAS_SIZE, MAX_CANVAS_SIZE));
}

#[test]
fn export_is_deterministic() {
    let day = DateKey::parse("2025-12-31").unwrap();
    let scene = Scene::for_date(&day);
    let fills = FillMap::new();
    assert_eq!(
        encode_png(&scene, &fills, &day, 128).unwrap(),
        encode_png(&scene, &fills, &day, 128).unwrap()
    );
}

#[test]
fn export_label_differs_between_days() {
    let scene = Scene::for_date(&DateKey::parse("2025-12-31").unwrap());
    let fills = FillMap::new();
    let first = DateKey::parse("2025-12-31").unwrap();
    let second = DateKey::parse("2025-11-30").unwrap();
    assert_ne!(
        encode_png(&scene, &fills, &first, 128).unwrap(),
        encode_png(&scene, &fills, &second, 128).unwrap()
    );
}

#[test]
fn export_file_name_embeds_date_key() {
    let day = DateKey::parse("2024-06-15").unwrap();
    assert_eq!(export_file_name(&day), "color-today-2024-06-15.png");
}
