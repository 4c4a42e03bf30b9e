//! Layer composition for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::FolioConfig;

/// Merges `(layer, value)` pairs, lowest precedence first, into a config.
///
/// Layers are named `defaults`, `file`, `environment` or `cli`.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> FolioConfig {
    let composer = layers
        .iter()
        .fold(MergeComposer::new(), |mut composer, (layer, value)| {
            let value = value.clone();
            match *layer {
                "defaults" => composer.push_defaults(value),
                "file" => composer.push_file(value, None),
                "environment" => composer.push_environment(value),
                "cli" => composer.push_cli(value),
                other => panic!("no such configuration layer: {other}"),
            }
            composer
        });

    FolioConfig::merge_from_layers(composer.layers()).expect("layers should merge into a config")
}
