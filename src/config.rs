use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MigrationError;

/// Migration configuration for navsplice
///
/// Every literal the rewrite depends on lives here. The defaults describe the
/// AI navigation migration of `EnhancedNavigation.tsx`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Source file rewritten in place
    pub file: PathBuf,
    /// Accepted file extensions
    pub extensions: Vec<String>,

    /// Name of the list literal being migrated
    pub outer_list: String,
    /// Element type in the `const <outer_list>: <item_type>[]` declaration
    pub item_type: String,
    /// Indentation in front of the declaration when it gets removed
    pub declaration_indent: String,

    /// Entries whose `children` lists are moved, in output order
    pub sources: Vec<String>,
    /// Text placed between two extracted fragments
    pub separator: String,

    pub target: TargetConfig,
    pub obsolete: ObsoleteConfig,
}

/// The entry that receives the extracted children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub name: String,
    pub description: String,
    pub is_new: bool,
    pub badge: String,
    /// Indentation of the appended fields
    pub field_indent: String,
    /// Indentation of the re-closing brace
    pub close_indent: String,
}

/// Literal bounds of the rendering block deleted after the migration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObsoleteConfig {
    pub start: String,
    pub end: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        MigrationConfig {
            file: PathBuf::from("src/components/EnhancedNavigation.tsx"),
            extensions: ["tsx", "ts", "jsx", "js"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),

            outer_list: "aiNavigation".to_string(),
            item_type: "NavigationItem".to_string(),
            declaration_indent: "    ".to_string(),

            sources: vec![
                "AI-Powered Activities".to_string(),
                "Advanced Features".to_string(),
            ],
            separator: ",\n".to_string(),

            target: TargetConfig::default(),
            obsolete: ObsoleteConfig::default(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            name: "Toolkit".to_string(),
            description: "AI-powered tools and exercises".to_string(),
            is_new: true,
            badge: "AI".to_string(),
            field_indent: " ".repeat(9),
            close_indent: " ".repeat(7),
        }
    }
}

impl Default for ObsoleteConfig {
    fn default() -> Self {
        ObsoleteConfig {
            start: "\n               /* AI-Enhanced Features */\n               <div>\n".to_string(),
            end: "{aiNavigation.map((item) => renderNavigationItem(item))}\n                </nav>\n              </div>"
                .to_string(),
        }
    }
}

impl MigrationConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the user config directory is
    /// consulted and defaults are used when nothing is found there.
    pub fn load(explicit: Option<&Path>) -> Result<Self, MigrationError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::from_file(&config_path);
            }
        }

        Ok(MigrationConfig::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, MigrationError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, MigrationError> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to the config directory
    pub fn save(&self) -> anyhow::Result<Option<PathBuf>> {
        let Some(config_path) = Self::config_path() else {
            return Ok(None);
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(Some(config_path))
    }

    /// Get the path to the user config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("navsplice").join("migration.toml"))
    }

    /// Write the default configuration file, returning where it went
    pub fn init_default() -> anyhow::Result<Option<PathBuf>> {
        MigrationConfig::default().save()
    }

    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
