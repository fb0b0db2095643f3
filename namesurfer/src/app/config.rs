use app_core::string_error::ErrorStringExt;
use rank_chart::{hex_to_color, Color, LayoutConfig, PALETTE_SIZE};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

const CONFIG_FILE: &str = ".namesurfer";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub width: f64,
    pub height: f64,
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("names-data.txt"),
            width: 800.0,
            height: 600.0,
            layout: LayoutConfig::default(),
        }
    }
}

impl Config {
    /// Load `~/.namesurfer`.
    pub fn from_config_file() -> Result<Self, String> {
        let Some(home) = dirs_next::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        Self::from_path(&home.join(CONFIG_FILE))
    }

    pub fn from_path(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path).err_to_string("could not load config file")?;
        Ok(Self::parse(&raw))
    }

    /// Parse `key=value` lines on top of the defaults. Unknown keys and
    /// values that do not parse are reported and ignored.
    pub fn parse(raw: &str) -> Self {
        let mut config = Self::default();
        let mut layout = LayoutConfig::default();
        for line in raw.lines().map(str::trim) {
            // Lines starting with "#" are considered comments.
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                log::warn!("ignoring config line without '=': {}", line);
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            match key {
                "data_path" => config.data_path = PathBuf::from(val),
                "width" => set_parsed(key, val, &mut config.width),
                "height" => set_parsed(key, val, &mut config.height),
                "graph_margin" => {
                    if let Some(margin) = parse_value(key, val) {
                        layout = layout.with_graph_margin(margin);
                    }
                }
                "label_height" => {
                    if let Some(height) = parse_value(key, val) {
                        layout = layout.with_label_height(height);
                    }
                }
                "max_rank" => {
                    if let Some(max_rank) = parse_value(key, val) {
                        layout = layout.with_max_rank(max_rank);
                    }
                }
                "label_with_name" => {
                    if let Some(flag) = parse_value(key, val) {
                        layout = layout.with_name_labels(flag);
                    }
                }
                "palette" => match parse_palette(val) {
                    Some(palette) => layout = layout.with_palette(palette),
                    None => log::warn!(
                        "'palette' needs {} comma separated hex colors, got '{}'",
                        PALETTE_SIZE,
                        val
                    ),
                },
                _ => log::warn!("unknown config key '{}'", key),
            }
        }
        config.layout = layout;
        config
    }
}

fn parse_value<T: FromStr>(key: &str, val: &str) -> Option<T> {
    let parsed = val.parse::<T>().ok();
    if parsed.is_none() {
        log::warn!("could not parse '{}' from '{}'", key, val);
    }
    parsed
}

fn set_parsed<T: FromStr>(key: &str, val: &str, target: &mut T) {
    if let Some(parsed) = parse_value(key, val) {
        *target = parsed;
    }
}

fn parse_palette(val: &str) -> Option<[Color; PALETTE_SIZE]> {
    let colors = val
        .split(',')
        .map(hex_to_color)
        .collect::<Option<Vec<Color>>>()?;
    colors.try_into().ok()
}

#[cfg(test)]
mod tests {
    use rank_chart::color_to_hex;

    use super::*;

    #[test]
    fn test_parse_overrides_defaults() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = Config::parse(
            "# chart settings\n\
             data_path = /tmp/names.txt\n\
             width=1100\n\
             height = 500\n\
             graph_margin=50\n\
             label_height=8\n\
             max_rank=500\n\
             label_with_name=true\n\
             palette=#111111,#222222,#333333,#444444\n",
        );
        assert_eq!(config.data_path, PathBuf::from("/tmp/names.txt"));
        assert_eq!(config.width, 1100.0);
        assert_eq!(config.height, 500.0);
        assert_eq!(config.layout.graph_margin, 50.0);
        assert!(config.layout.label_with_name);
        assert_eq!(color_to_hex(config.layout.palette[3]), "#444444");
        assert_eq!(config.layout.label_height, 8.0);
        assert_eq!(config.layout.max_rank, 500);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = Config::parse(
            "width=wide\n\
             max_rank=-1\n\
             palette=#ff0000,#00ff00\n\
             colour=red\n\
             no equals sign\n",
        );
        let default = Config::default();
        assert_eq!(config.width, default.width);
        assert_eq!(config.layout, default.layout);
    }
}
