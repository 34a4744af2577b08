#![no_main]

use libfuzzer_sys::fuzz_target;
use serde::Deserialize;

/// Mirror of the manifest TOML shape for fuzzing (private in main crate)
#[derive(Deserialize)]
struct TomlManifest {
    #[allow(dead_code)]
    #[serde(default)]
    version: Option<u32>,
    #[allow(dead_code)]
    #[serde(default)]
    deployer: Option<TomlDeployer>,
    #[allow(dead_code)]
    #[serde(default)]
    resource: Vec<TomlResource>,
}

#[derive(Deserialize)]
struct TomlDeployer {
    #[allow(dead_code)]
    command: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    args: Vec<String>,
}

#[derive(Deserialize)]
struct TomlResource {
    name: String,
    #[allow(dead_code)]
    #[serde(default)]
    args: Vec<TomlArg>,
}

#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum TomlArg {
    Reference { r#ref: String },
    Literal(String),
}

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz manifest TOML parsing - this should never panic
        if let Ok(manifest) = toml::from_str::<TomlManifest>(content) {
            // Resource names go through validation next; that should
            // never panic either.
            for resource in &manifest.resource {
                let _ = caravan::ResourceName::parse(&resource.name);
            }
        }
    }
});
