#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and flattening a menu file should never panic
        if let Ok(file) = toml::from_str::<treemenu::MenuFile>(content) {
            let menu = file.to_menu::<()>();
            if let Ok(mut resolver) = treemenu::TreeMenuResolver::builder()
                .options(file.resolver.clone())
                .build(&menu)
            {
                let first = resolver
                    .displayable_menu()
                    .first()
                    .map(|entry| entry.id.to_string());
                if let Some(id) = first {
                    let _ = resolver.choose(&id);
                    let _ = resolver.go_back();
                }
            }
        }
    }
});
