#![cfg(target_arch = "wasm32")]

use ballpit_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn world_spawns_and_renders() {
    let mut world = World::new(320.0, 240.0).unwrap();
    world.set_threaded(false);
    for _ in 0..30 {
        world.step(1.0 / 60.0);
    }
    assert!(world.body_count() >= 5);
    assert_eq!(world.extract_render(), world.body_count() as usize);
    assert_eq!(world.circles_len(), world.body_count() as usize * 3);
}

#[wasm_bindgen_test]
fn bad_config_is_reported_to_js() {
    assert!(World::from_config_json(r#"{"iterations": 0}"#).is_err());
    assert!(World::default_config_json().unwrap().contains("cellSize"));
}
