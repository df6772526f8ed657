#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Menu files in JSON go through the same flattening path
    if let Ok(file) = serde_json::from_slice::<treemenu::MenuFile>(data) {
        let _ = treemenu::TreeMenuResolver::<()>::new(&file.to_menu());
    }
});
